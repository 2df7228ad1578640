use burn::{
    prelude::Backend,
    tensor::{Tensor, TensorData},
};
use log::debug;

use crate::{
    dtype::DType,
    error::{Error, Result},
};

/// A transform over `[time, features]` series.
///
/// Implementors provide [`transform`](Transformer::transform); callers go
/// through [`apply`](Transformer::apply), which checks the feature dimension
/// on the way in and out.
pub trait Transformer<B: Backend> {
    /// Number of features expected per input time step.
    fn input_dim(&self) -> usize;

    /// Number of features produced per output time step.
    fn output_dim(&self) -> usize;

    /// Precision of exported outputs.
    fn dtype(&self) -> DType;

    /// Transform a series whose feature dimension has already been checked.
    fn transform(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>>;

    /// Apply the transform to a `[time, input_dim]` series.
    fn apply(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        let [_, features] = x.dims();
        if features != self.input_dim() {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim(),
                actual: features,
            });
        }

        let output = self.transform(x)?;

        let [_, features] = output.dims();
        if features != self.output_dim() {
            return Err(Error::DimensionMismatch {
                expected: self.output_dim(),
                actual: features,
            });
        }
        Ok(output)
    }

    /// Apply the transform and export the result at [`dtype`](Transformer::dtype) precision.
    fn apply_data(&self, x: Tensor<B, 2>) -> Result<TensorData> {
        let output = self.apply(x)?;
        Ok(self.dtype().convert(output.to_data()))
    }
}

/// Chains transforms so each stage's output feeds the next stage.
pub struct Compose<B: Backend> {
    dim: usize,
    stages: Vec<Box<dyn Transformer<B>>>,
}

impl<B: Backend> Compose<B> {
    /// Creates an empty pipeline over `dim` features. An empty pipeline is the identity.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            stages: Vec::new(),
        }
    }

    /// Appends a stage. Its input dimension must match the current output dimension.
    pub fn push<T: Transformer<B> + 'static>(mut self, stage: T) -> Result<Self> {
        let expected = self.output_dim();
        if stage.input_dim() != expected {
            return Err(Error::PipelineMismatch {
                stage: self.stages.len(),
                expected,
                actual: stage.input_dim(),
            });
        }

        self.stages.push(Box::new(stage));
        Ok(self)
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<B: Backend> Transformer<B> for Compose<B> {
    fn input_dim(&self) -> usize {
        self.stages.first().map_or(self.dim, |stage| stage.input_dim())
    }

    fn output_dim(&self) -> usize {
        self.stages.last().map_or(self.dim, |stage| stage.output_dim())
    }

    fn dtype(&self) -> DType {
        self.stages
            .last()
            .map_or(DType::default(), |stage| stage.dtype())
    }

    fn transform(&self, x: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        debug!("running {} pipeline stage(s)", self.stages.len());
        self.stages
            .iter()
            .try_fold(x, |x, stage| stage.apply(x))
    }
}
