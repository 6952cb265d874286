//! The model contract consumed by the gradient estimator

use crate::{ExecutionMode, Result};
use varq_core::{InputBatch, OutputBatch, ParameterRegistry};

/// A parameterized model with an ordered trainable parameter collection
///
/// This is the narrow contract the shift-and-run estimator consumes: write
/// access to the ordered parameter registry, and a forward evaluation that
/// reads the *current* parameter values. `evaluate` must be pure apart from
/// reading those values; repeated calls at the same parameter state and
/// inputs must return the same output.
///
/// The estimator mutates parameters in place between evaluations, so a model
/// must not cache forward results across parameter writes.
pub trait VariationalModel {
    /// The ordered parameter collection (stable iteration order)
    fn parameters(&self) -> &ParameterRegistry;

    /// Mutable access to the parameter collection
    fn parameters_mut(&mut self) -> &mut ParameterRegistry;

    /// One full forward pass at the current parameter values
    fn evaluate(&self, inputs: &InputBatch, mode: ExecutionMode) -> Result<OutputBatch>;
}
