use burn::{
    prelude::Backend,
    tensor::{Device, Tensor, TensorData},
};
use serde::{Deserialize, Serialize};

use crate::{
    dtype::DType,
    error::{Error, Result},
    normalizer::Normalize,
};

/// The default divisor for zero standard deviations
const DUMMY_ZERO_STD: f64 = 1.0;

/// Configuration for a [`Normalize`] transform.
///
/// Statistics are stored as plain vectors so the configuration can be
/// serialized alongside a pipeline and initialized on any backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Number of features per time step.
    pub input_dim: usize,

    /// Fixed mean to subtract. `None` estimates it from every series.
    pub mean: Option<Vec<f64>>,

    /// Fixed standard deviation to divide by. `None` estimates it from every series.
    pub std: Option<Vec<f64>>,

    /// Divisor substituted wherever a standard deviation is exactly zero.
    pub dummy_zero_std: f64,

    /// Precision of exported outputs.
    pub dtype: DType,
}

impl NormalizeConfig {
    /// A configuration that estimates both statistics, with default fallback and dtype.
    pub fn new(input_dim: usize) -> Self {
        Self {
            input_dim,
            mean: None,
            std: None,
            dummy_zero_std: DUMMY_ZERO_STD,
            dtype: DType::default(),
        }
    }

    /// Creates a new builder for constructing a `NormalizeConfig`.
    pub fn builder() -> NormalizeConfigBuilder {
        NormalizeConfigBuilder::default()
    }

    /// Check dimensions and the fallback divisor without touching a device.
    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(Error::InvalidDimension {
                dim: self.input_dim,
            });
        }
        if self.dummy_zero_std == 0.0 || !self.dummy_zero_std.is_finite() {
            return Err(Error::InvalidDummyStd {
                value: self.dummy_zero_std,
            });
        }

        for (name, value) in [("mean", &self.mean), ("std", &self.std)] {
            if let Some(value) = value {
                if value.len() != self.input_dim {
                    return Err(Error::StatisticLength {
                        name,
                        expected: self.input_dim,
                        actual: value.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Initialize the transform on `device`.
    pub fn init<B: Backend>(&self, device: &Device<B>) -> Result<Normalize<B>> {
        self.validate()?;

        let to_tensor = |values: &Vec<f64>| {
            Tensor::<B, 1>::from_data(TensorData::new(values.clone(), [values.len()]), device)
        };

        Normalize::new(
            self.input_dim,
            self.mean.as_ref().map(to_tensor),
            self.std.as_ref().map(to_tensor),
            self.dummy_zero_std,
            self.dtype,
        )
    }
}

/// Builder pattern for constructing a `NormalizeConfig` with optional parameters.
#[derive(Debug, Default)]
pub struct NormalizeConfigBuilder {
    input_dim: Option<usize>,
    mean: Option<Vec<f64>>,
    std: Option<Vec<f64>>,
    dummy_zero_std: Option<f64>,
    dtype: Option<DType>,
}

impl NormalizeConfigBuilder {
    /// Set the number of features per time step.
    pub fn with_input_dim(mut self, input_dim: usize) -> Self {
        self.input_dim = Some(input_dim);
        self
    }

    /// Fix the mean instead of estimating it from each series.
    pub fn with_mean(mut self, mean: Vec<f64>) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Fix the standard deviation instead of estimating it from each series.
    pub fn with_std(mut self, std: Vec<f64>) -> Self {
        self.std = Some(std);
        self
    }

    /// Set the divisor used for features whose standard deviation is zero.
    pub fn with_dummy_zero_std(mut self, dummy_zero_std: f64) -> Self {
        self.dummy_zero_std = Some(dummy_zero_std);
        self
    }

    /// Set the output precision.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Finalize the configuration.
    ///
    /// `input_dim` is required; the fallback divisor defaults to `1.0` and
    /// the dtype to [`DType::F64`].
    pub fn build(self) -> Result<NormalizeConfig> {
        let config = NormalizeConfig {
            input_dim: self
                .input_dim
                .ok_or(Error::MissingField { field: "input_dim" })?,
            mean: self.mean,
            std: self.std,
            dummy_zero_std: self.dummy_zero_std.unwrap_or(DUMMY_ZERO_STD),
            dtype: self.dtype.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NormalizeConfig::builder().with_input_dim(3).build().unwrap();
        assert_eq!(config, NormalizeConfig::new(3));
        assert_eq!(config.dummy_zero_std, 1.0);
        assert_eq!(config.dtype, DType::F64);
        assert!(config.mean.is_none());
        assert!(config.std.is_none());
    }

    #[test]
    fn test_missing_input_dim() {
        let err = NormalizeConfig::builder().with_mean(vec![0.0]).build();
        assert_eq!(err, Err(Error::MissingField { field: "input_dim" }));
    }

    #[test]
    fn test_statistic_length_rejected() {
        let err = NormalizeConfig::builder()
            .with_input_dim(2)
            .with_std(vec![1.0, 2.0, 3.0])
            .build();
        assert_eq!(
            err,
            Err(Error::StatisticLength {
                name: "std",
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_zero_dummy_std_rejected() {
        let err = NormalizeConfig::builder()
            .with_input_dim(2)
            .with_dummy_zero_std(0.0)
            .build();
        assert_eq!(err, Err(Error::InvalidDummyStd { value: 0.0 }));
    }

    #[test]
    fn test_zero_input_dim_rejected() {
        assert_eq!(
            NormalizeConfig::new(0).validate(),
            Err(Error::InvalidDimension { dim: 0 })
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = NormalizeConfig::builder()
            .with_input_dim(2)
            .with_mean(vec![0.5, -1.0])
            .with_dtype(DType::F32)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: NormalizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
