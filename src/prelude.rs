use burn::backend::{ndarray::NdArrayDevice, NdArray};
use num_traits::Float;

use crate::transformer::Transformer;
use crate::utils::{convert_series_to_tensor, convert_tensor_to_vector};

// Re-export common types for easier use
pub use crate::config::{NormalizeConfig, NormalizeConfigBuilder};
pub use crate::dtype::DType;
pub use crate::error::{Error, Result};
pub use crate::normalizer::{mean_over_time, std_over_time, Normalize};
pub use crate::transformer::Compose;
pub use crate::utils::{column_moments, generate_test_data};

/// CPU backend used by the convenience functions, in double precision.
pub type CpuBackend = NdArray<f64>;

/// Standardize a time series on the CPU, estimating mean and standard
/// deviation from the series itself.
///
/// # Arguments
/// * `series` - One vector per time step, each with the same number of features.
///
/// # Returns
/// The standardized series, with the same shape as the input.
///
/// # Example
/// ```rust
/// use reservoir_transforms::prelude::*;
///
/// let series = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
/// let normalized = normalize(series).unwrap();
/// assert_eq!(normalized[0], vec![-1.0, 0.0]);
/// ```
pub fn normalize<F: Float>(series: Vec<Vec<F>>) -> Result<Vec<Vec<f64>>> {
    let input_dim = series.first().map_or(0, |row| row.len());
    normalize_with(series, &NormalizeConfig::new(input_dim))
}

/// Standardize a time series on the CPU with an explicit configuration.
pub fn normalize_with<F: Float>(
    series: Vec<Vec<F>>,
    config: &NormalizeConfig,
) -> Result<Vec<Vec<f64>>> {
    let device = NdArrayDevice::Cpu;
    let transform = config.init::<CpuBackend>(&device)?;
    let x = convert_series_to_tensor::<CpuBackend, F>(series, &device)?;
    let output = transform.apply(x)?;
    Ok(convert_tensor_to_vector(output))
}
