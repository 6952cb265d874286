//! Error types for varq-core

use thiserror::Error;

/// Errors that can occur in parameter and program operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Write attempted on a frozen parameter
    #[error("Cannot modify frozen parameter '{0}'")]
    FrozenParameter(String),

    /// Value outside the parameter's declared bounds
    #[error("Value {value} outside bounds [{min}, {max}] for parameter '{name}'")]
    BoundsViolation {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Parameter id does not refer to a registered parameter
    #[error("Invalid parameter id {0}: registry has {1} parameters")]
    InvalidParameterId(usize, usize),

    /// Wire index outside the program's wire count
    #[error("Invalid wire index {wire}: program has {num_wires} wires")]
    InvalidWire { wire: usize, num_wires: usize },

    /// Same wire used as control and target
    #[error("Duplicate wire {0} in two-wire operation")]
    DuplicateWire(usize),

    /// Tensor dimensions do not match
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Generic validation error
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Create a shape mismatch error from two shape descriptions
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
