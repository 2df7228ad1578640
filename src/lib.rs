//! Time series preprocessing transforms for reservoir computing.
//!
//! The central transform is [`Normalize`]: per-feature standardization of a
//! `[time, features]` series, with fixed or per-call estimated statistics and
//! a configurable divisor for constant features.
//!
//! ```rust
//! use burn::backend::{ndarray::NdArrayDevice, NdArray};
//! use burn::tensor::{Tensor, TensorData};
//! use reservoir_transforms::{NormalizeConfig, Transformer};
//!
//! type B = NdArray<f64>;
//! let device = NdArrayDevice::Cpu;
//!
//! let normalize = NormalizeConfig::new(2).init::<B>(&device).unwrap();
//! let x = Tensor::<B, 2>::from_data(
//!     TensorData::new(vec![1.0, 10.0, 3.0, 10.0], [2, 2]),
//!     &device,
//! );
//! let y = normalize.apply(x).unwrap();
//! assert_eq!(y.dims(), [2, 2]);
//! ```

pub mod config;
pub mod dtype;
pub mod error;
pub mod normalizer;
pub mod prelude;
pub mod transformer;
pub mod utils;

pub use config::{NormalizeConfig, NormalizeConfigBuilder};
pub use dtype::DType;
pub use error::{Error, Result};
pub use normalizer::Normalize;
pub use transformer::{Compose, Transformer};
