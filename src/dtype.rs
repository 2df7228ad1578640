use burn::tensor::TensorData;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Numeric precision of a transform's exported output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// Single precision.
    F32,
    /// Double precision.
    #[default]
    F64,
}

impl DType {
    /// Convert exported tensor data to this precision.
    pub fn convert(self, data: TensorData) -> TensorData {
        match self {
            DType::F32 => data.convert::<f32>(),
            DType::F64 => data.convert::<f64>(),
        }
    }
}

impl From<DType> for burn::tensor::DType {
    fn from(dtype: DType) -> Self {
        match dtype {
            DType::F32 => burn::tensor::DType::F32,
            DType::F64 => burn::tensor::DType::F64,
        }
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" | "float32" | "float" => Ok(DType::F32),
            "f64" | "float64" | "double" => Ok(DType::F64),
            _ => Err(Error::InvalidDType { name: s.to_string() }),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "float32"),
            DType::F64 => write!(f, "float64"),
        }
    }
}
