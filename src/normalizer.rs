use burn::{prelude::*, tensor::cast::ToElement};
use log::{debug, log_enabled, trace, warn, Level};
use std::fmt;

use crate::{
    dtype::DType,
    error::{Error, Result},
    transformer::Transformer,
};

/// Per-feature mean of a `[time, features]` series, taken along the time axis.
///
/// Returns a tensor of shape `[features]`.
pub fn mean_over_time<B: Backend>(x: Tensor<B, 2>) -> Tensor<B, 1> {
    let [_, features] = x.dims();
    x.mean_dim(0).reshape([features])
}

/// Per-feature sample standard deviation (`n - 1` denominator) of a
/// `[time, features]` series, taken along the time axis.
///
/// Returns a tensor of shape `[features]`, or [`Error::NotEnoughTimeSteps`]
/// when the series has fewer than two time steps.
pub fn std_over_time<B: Backend>(x: Tensor<B, 2>) -> Result<Tensor<B, 1>> {
    let [time_steps, features] = x.dims();
    if time_steps < 2 {
        return Err(Error::NotEnoughTimeSteps { time_steps });
    }

    Ok(x.var(0).sqrt().reshape([features]))
}

fn count_zeros<B: Backend>(values: &Tensor<B, 1>) -> usize {
    values
        .clone()
        .equal_elem(0.0)
        .int()
        .sum()
        .into_scalar()
        .to_usize()
}

fn check_statistic<B: Backend>(
    name: &'static str,
    value: &Option<Tensor<B, 1>>,
    input_dim: usize,
) -> Result<()> {
    match value {
        Some(value) if value.dims()[0] != input_dim => Err(Error::StatisticLength {
            name,
            expected: input_dim,
            actual: value.dims()[0],
        }),
        _ => Ok(()),
    }
}

/// Standardize a time series feature by feature.
///
/// For an input of shape `[time, input_dim]` every column `j` becomes
///
/// ```text
/// y[t, j] = (x[t, j] − μ[j]) / σ[j]
/// ```
///
/// where `μ` and `σ` are either fixed at construction or estimated from the
/// series being transformed. Any `σ[j]` equal to zero is replaced by
/// `dummy_zero_std` so constant features do not produce infinities or NaNs.
///
/// The output always has the same shape as the input.
#[derive(Debug, Clone)]
pub struct Normalize<B: Backend> {
    input_dim: usize,
    mean: Option<Tensor<B, 1>>,
    std: Option<Tensor<B, 1>>,
    dummy_zero_std: f64,
    dtype: DType,
}

impl<B: Backend> Normalize<B> {
    /// Creates a new `Normalize` transform.
    ///
    /// # Arguments
    /// * `input_dim` - Number of features per time step.
    /// * `mu` - Fixed mean of shape `[input_dim]`, or `None` to estimate it on every call.
    /// * `std` - Fixed standard deviation of shape `[input_dim]`, or `None` to estimate it on every call.
    /// * `dummy_zero_std` - Divisor used wherever a standard deviation is exactly zero.
    /// * `dtype` - Precision of exported outputs.
    pub fn new(
        input_dim: usize,
        mu: Option<Tensor<B, 1>>,
        std: Option<Tensor<B, 1>>,
        dummy_zero_std: f64,
        dtype: DType,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidDimension { dim: input_dim });
        }
        if dummy_zero_std == 0.0 || !dummy_zero_std.is_finite() {
            return Err(Error::InvalidDummyStd {
                value: dummy_zero_std,
            });
        }
        check_statistic("mean", &mu, input_dim)?;
        check_statistic("std", &std, input_dim)?;

        if let Some(std) = &std {
            let zeros = count_zeros(std);
            if zeros > 0 {
                warn!(
                    "fixed std has {zeros} zero entries, dividing those features by {dummy_zero_std}"
                );
            }
        }

        Ok(Self {
            input_dim,
            mean: mu,
            std,
            dummy_zero_std,
            dtype,
        })
    }

    /// Creates a transform that estimates both statistics on every call.
    pub fn estimated(input_dim: usize) -> Result<Self> {
        Self::new(input_dim, None, None, 1.0, DType::default())
    }

    /// Returns a copy of this transform with mean and standard deviation
    /// frozen to the statistics of `x`.
    ///
    /// Use this to normalize test series with a training series' statistics.
    pub fn fit(&self, x: Tensor<B, 2>) -> Result<Self> {
        self.check_features(&x)?;
        let std = std_over_time(x.clone())?;
        let mean = mean_over_time(x);
        debug!("fitted normalization statistics over {} features", self.input_dim);

        Ok(Self {
            mean: Some(mean),
            std: Some(std),
            ..self.clone()
        })
    }

    /// Dimension of the input time series.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Dimension of the output time series, always equal to `input_dim`.
    pub fn output_dim(&self) -> usize {
        self.input_dim
    }

    /// Output precision.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// The fixed mean, if any.
    pub fn mean(&self) -> Option<&Tensor<B, 1>> {
        self.mean.as_ref()
    }

    /// The fixed standard deviation, if any.
    pub fn std(&self) -> Option<&Tensor<B, 1>> {
        self.std.as_ref()
    }

    /// Divisor substituted for zero standard deviations.
    pub fn dummy_zero_std(&self) -> f64 {
        self.dummy_zero_std
    }

    fn check_features(&self, x: &Tensor<B, 2>) -> Result<()> {
        let [_, features] = x.dims();
        if features != self.input_dim {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim,
                actual: features,
            });
        }
        Ok(())
    }

    /// Standardize `x`, consuming it.
    ///
    /// The subtraction and division reuse `x`'s buffer when the caller holds
    /// the only handle to it.
    pub fn standardize(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        self.check_features(&x)?;
        let [time_steps, _] = x.dims();
        if time_steps == 0 {
            return Ok(x);
        }

        debug!(
            "normalizing [{time_steps}, {}] series (mean: {}, std: {})",
            self.input_dim,
            if self.mean.is_some() { "fixed" } else { "estimated" },
            if self.std.is_some() { "fixed" } else { "estimated" },
        );

        let mean = match &self.mean {
            Some(mean) => mean.clone(),
            None => mean_over_time(x.clone()),
        };
        let x = x - mean.unsqueeze::<2>();

        let std = match &self.std {
            Some(std) => std.clone(),
            None => std_over_time(x.clone())?,
        };

        if log_enabled!(Level::Trace) {
            trace!(
                "{} zero-std feature(s) divided by {}",
                count_zeros(&std),
                self.dummy_zero_std
            );
        }

        let zero_std = std.clone().equal_elem(0.0);
        let std = std.mask_fill(zero_std, self.dummy_zero_std);

        Ok(x / std.unsqueeze::<2>())
    }
}

impl<B: Backend> Transformer<B> for Normalize<B> {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn output_dim(&self) -> usize {
        self.input_dim
    }

    fn dtype(&self) -> DType {
        self.dtype
    }

    fn transform(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        self.standardize(x)
    }
}

impl<B: Backend> fmt::Display for Normalize<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = |fixed: bool| if fixed { "fixed" } else { "estimated" };
        write!(
            f,
            "Normalize(input_dim={}, output_dim={}, mean={}, std={}, dummy_zero_std={}, dtype={})",
            self.input_dim,
            self.output_dim(),
            source(self.mean.is_some()),
            source(self.std.is_some()),
            self.dummy_zero_std,
            self.dtype,
        )
    }
}
