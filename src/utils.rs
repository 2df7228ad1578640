use burn::{
    prelude::Backend,
    tensor::{Device, Tensor, TensorData},
};
use num_traits::Float;
use prettytable::{row, Table};
use rand::{distr::StandardUniform, prelude::Distribution, Rng};

use crate::error::{Error, Result};

/// Generate a flat, row-major random time series with values in `[0, 1)`.
pub fn generate_test_data<F>(
    time_steps: usize, // Number of time steps (rows)
    num_features: usize, // Number of features (columns) per time step
) -> Vec<F>
where
    StandardUniform: Distribution<F>,
{
    let mut rng = rand::rng();

    (0..time_steps * num_features)
        .map(|_| rng.random::<F>())
        .collect()
}

fn check_rows<T>(series: &[Vec<T>], num_features: usize) -> Result<()> {
    match series
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != num_features)
    {
        Some((row, values)) => Err(Error::RaggedSeries {
            row,
            expected: num_features,
            actual: values.len(),
        }),
        None => Ok(()),
    }
}

/// Build a `[time_steps, num_features]` tensor from a flat row-major vector.
///
/// Fails when `data` does not hold exactly `time_steps * num_features` values.
pub fn convert_vector_to_tensor<B: Backend, F: Float>(
    data: Vec<F>,
    time_steps: usize,
    num_features: usize,
    device: &Device<B>,
) -> Result<Tensor<B, 2>> {
    let expected = time_steps * num_features;
    if data.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let data: Vec<f64> = data
        .into_iter()
        .map(|value| value.to_f64().unwrap_or(f64::NAN))
        .collect();
    let tensor_data = TensorData::new(data, [time_steps, num_features]);
    Ok(Tensor::<B, 2>::from_data(tensor_data, device))
}

/// Build a `[time, features]` tensor from one vector per time step.
///
/// Fails on an empty series or when rows have different lengths.
pub fn convert_series_to_tensor<B: Backend, F: Float>(
    series: Vec<Vec<F>>,
    device: &Device<B>,
) -> Result<Tensor<B, 2>> {
    let time_steps = series.len();
    let num_features = series.first().map_or(0, |row| row.len());
    if num_features == 0 {
        return Err(Error::InvalidDimension { dim: num_features });
    }

    check_rows(&series, num_features)?;

    let flat: Vec<F> = series.into_iter().flatten().collect();
    convert_vector_to_tensor(flat, time_steps, num_features, device)
}

/// Export a `[time, features]` tensor as one `Vec<f64>` per time step.
pub fn convert_tensor_to_vector<B: Backend>(data: Tensor<B, 2>) -> Vec<Vec<f64>> {
    let num_features = data.dims()[1];
    if num_features == 0 {
        return Vec::new();
    }

    let data = data.to_data().convert::<f64>();
    let values = data.as_slice::<f64>().unwrap_or_default();

    values
        .chunks(num_features)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Per-column mean and (unbiased) standard deviation of an exported series.
///
/// Fails when rows have different lengths.
pub fn column_moments(series: &[Vec<f64>]) -> Result<Vec<(f64, f64)>> {
    let time_steps = series.len();
    let num_features = series.first().map_or(0, |row| row.len());
    check_rows(series, num_features)?;

    Ok((0..num_features)
        .map(|col| {
            let mean = series.iter().map(|row| row[col]).sum::<f64>() / time_steps as f64;
            let var = series
                .iter()
                .map(|row| (row[col] - mean).powi(2))
                .sum::<f64>()
                / (time_steps.saturating_sub(1)).max(1) as f64;
            (mean, var.sqrt())
        })
        .collect())
}

pub fn print_tensor<B: Backend, const D: usize>(data: &Tensor<B, D>) {
    let dims = data.dims();
    let time_steps = match dims.len() > 0 {
        true => dims[0],
        false => 0,
    };

    let mut table = Table::new();
    table.add_row(row!["Step", "Values"]);

    for index in 0..time_steps {
        let row = data.clone().slice([index..index + 1]);
        let row = row.to_data().convert::<f64>();
        let row = row.as_slice::<f64>().unwrap_or_default();
        let row: Vec<String> = row.iter().map(|value| format!("{value:+.4}")).collect();
        table.add_row(row![index, row.join("  ")]);
    }

    table.printstd();
}

pub fn print_tensor_with_title<B: Backend, const D: usize>(title: &str, data: &Tensor<B, D>) {
    println!("{title}");
    print_tensor(data);
}
