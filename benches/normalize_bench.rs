/// Criterion benchmarks for reservoir-transforms.
///
/// All benchmarks run on the CPU (`burn::backend::NdArray`) so no GPU is
/// required and they integrate easily into CI.
///
/// Benchmark groups:
///   • normalize_estimated – statistics estimated on every call
///   • normalize_fixed     – fixed mean / std
///   • normalize_fit       – freezing statistics from a series
///   • series_convert      – Vec<Vec<F>> ↔ Tensor round-trips
use burn::backend::NdArray;
use burn::tensor::{Tensor, TensorData};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use reservoir_transforms::{
    utils::{convert_series_to_tensor, convert_tensor_to_vector, generate_test_data},
    Normalize, NormalizeConfig, Transformer,
};

type B = NdArray<f64>;

const SIZES: [(usize, usize); 4] = [(100, 10), (1_000, 50), (5_000, 100), (20_000, 16)];

fn cpu() -> burn::backend::ndarray::NdArrayDevice {
    burn::backend::ndarray::NdArrayDevice::Cpu
}

fn random_series(time_steps: usize, features: usize) -> Tensor<B, 2> {
    let data: Vec<f64> = generate_test_data(time_steps, features);
    Tensor::from_data(TensorData::new(data, [time_steps, features]), &cpu())
}

// ---------------------------------------------------------------------------
// Estimated statistics
// ---------------------------------------------------------------------------
fn bench_normalize_estimated(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_estimated");

    for (time_steps, features) in SIZES {
        let id = BenchmarkId::from_parameter(format!("{time_steps}×{features}"));
        group.bench_with_input(id, &(time_steps, features), |b, &(t, f)| {
            let normalize = NormalizeConfig::new(f).init::<B>(&cpu()).unwrap();
            let x = random_series(t, f);
            b.iter(|| normalize.apply(x.clone()).unwrap());
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Fixed statistics
// ---------------------------------------------------------------------------
fn bench_normalize_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_fixed");

    for (time_steps, features) in SIZES {
        let id = BenchmarkId::from_parameter(format!("{time_steps}×{features}"));
        group.bench_with_input(id, &(time_steps, features), |b, &(t, f)| {
            let normalize = NormalizeConfig::builder()
                .with_input_dim(f)
                .with_mean(vec![0.5; f])
                .with_std(vec![0.29; f])
                .build()
                .unwrap()
                .init::<B>(&cpu())
                .unwrap();
            let x = random_series(t, f);
            b.iter(|| normalize.apply(x.clone()).unwrap());
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Normalize::fit
// ---------------------------------------------------------------------------
fn bench_normalize_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_fit");

    for (time_steps, features) in SIZES {
        let id = BenchmarkId::from_parameter(format!("{time_steps}×{features}"));
        group.bench_with_input(id, &(time_steps, features), |b, &(t, f)| {
            let normalize = Normalize::<B>::estimated(f).unwrap();
            let x = random_series(t, f);
            b.iter(|| normalize.fit(x.clone()).unwrap());
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Series round-trip: Vec<Vec<f64>> → Tensor → Vec<Vec<f64>>
// ---------------------------------------------------------------------------
fn bench_series_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_convert");

    for (time_steps, features) in [(100, 10), (1_000, 50)] {
        let id = BenchmarkId::from_parameter(format!("{time_steps}×{features}"));
        group.bench_with_input(id, &(time_steps, features), |b, &(t, f)| {
            let data: Vec<f64> = generate_test_data(t, f);
            let rows: Vec<Vec<f64>> = data.chunks(f).map(|chunk| chunk.to_vec()).collect();
            let device = cpu();
            b.iter(|| {
                let tensor: Tensor<B, 2> =
                    convert_series_to_tensor(rows.clone(), &device).unwrap();
                convert_tensor_to_vector(tensor)
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------
criterion_group!(
    benches,
    bench_normalize_estimated,
    bench_normalize_fixed,
    bench_normalize_fit,
    bench_series_convert,
);
criterion_main!(benches);
