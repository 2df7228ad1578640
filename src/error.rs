use thiserror::Error;

/// Errors raised while configuring or applying a transform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A transform was declared with zero features per time step.
    #[error("Invalid dimension: a time series needs at least one feature, got {dim}")]
    InvalidDimension {
        /// The rejected dimension.
        dim: usize,
    },

    /// A fixed statistic does not have one entry per feature.
    #[error("Fixed {name} has {actual} entries, expected {expected}")]
    StatisticLength {
        /// Which statistic ("mean" or "std").
        name: &'static str,
        /// The transform's input dimension.
        expected: usize,
        /// The statistic's length.
        actual: usize,
    },

    /// The input's feature dimension does not match the transform.
    #[error("Dimension mismatch: expected {expected} features per time step, got {actual}")]
    DimensionMismatch {
        /// The transform's input dimension.
        expected: usize,
        /// The input's feature dimension.
        actual: usize,
    },

    /// Rows of a time series have different lengths.
    #[error("Ragged time series: row {row} has {actual} features, expected {expected}")]
    RaggedSeries {
        /// Index of the offending time step.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A flat buffer does not hold `time_steps * num_features` values.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// `time_steps * num_features`.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// An unknown precision name.
    #[error("Invalid dtype: {name}")]
    InvalidDType {
        /// The rejected name.
        name: String,
    },

    /// A standard deviation needs at least two time steps.
    #[error("Cannot estimate a standard deviation from {time_steps} time step(s)")]
    NotEnoughTimeSteps {
        /// Number of time steps in the input.
        time_steps: usize,
    },

    /// The zero-std fallback divisor would itself break the division.
    #[error("Invalid dummy_zero_std {value}: must be finite and non-zero")]
    InvalidDummyStd {
        /// The rejected value.
        value: f64,
    },

    /// A required builder field was never set.
    #[error("Missing field: {field} must be set")]
    MissingField {
        /// Name of the field.
        field: &'static str,
    },

    /// Two consecutive pipeline stages disagree on the feature dimension.
    #[error("Pipeline mismatch at stage {stage}: expected input dimension {expected}, got {actual}")]
    PipelineMismatch {
        /// Index of the stage being added.
        stage: usize,
        /// Output dimension of the previous stage.
        expected: usize,
        /// Input dimension of the new stage.
        actual: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected 3 features per time step, got 2"
        );

        let err = Error::StatisticLength {
            name: "std",
            expected: 4,
            actual: 1,
        };
        assert_eq!(err.to_string(), "Fixed std has 1 entries, expected 4");
    }

    #[test]
    fn test_not_enough_time_steps_display() {
        let err = Error::NotEnoughTimeSteps { time_steps: 1 };
        assert!(err.to_string().contains("1 time step"));
    }
}
