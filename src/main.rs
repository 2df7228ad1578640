use burn::backend::{ndarray::NdArrayDevice, NdArray};
use reservoir_transforms::{
    prelude::*,
    utils::{convert_tensor_to_vector, convert_vector_to_tensor, print_tensor_with_title},
    Transformer,
};

fn main() -> Result<()> {
    type MyBackend = NdArray<f64>;

    let device = NdArrayDevice::Cpu;

    let time_steps = 8;
    let num_features = 3;

    // The last feature is held constant to show the zero-std fallback
    let mut data: Vec<f64> = generate_test_data(time_steps, num_features);
    for step in 0..time_steps {
        data[step * num_features + num_features - 1] = 5.0;
    }

    let series =
        convert_vector_to_tensor::<MyBackend, f64>(data, time_steps, num_features, &device)?;
    print_tensor_with_title("Input series", &series);

    let config = NormalizeConfig::builder()
        .with_input_dim(num_features)
        .with_dummy_zero_std(1.0)
        .build()?;
    let normalize = config.init::<MyBackend>(&device)?;
    println!("{normalize}");

    let output = normalize.apply(series)?;
    print_tensor_with_title("Normalized series", &output);

    for (feature, (mean, std)) in column_moments(&convert_tensor_to_vector(output))?
        .into_iter()
        .enumerate()
    {
        println!("feature {feature}: mean = {mean:+.6}, std = {std:.6}");
    }

    Ok(())
}
