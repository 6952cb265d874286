//! Core types for variational quantum models
//!
//! This crate provides the fundamental building blocks shared by the
//! evaluators and the gradient estimator:
//! - [`Parameter`] / [`ParameterRegistry`]: ordered, mutable trainable state
//! - [`InputBatch`] / [`OutputBatch`]: classical input and measurement output
//! - [`CircuitProgram`]: the rotation/entangler op list evaluators execute
//!
//! # Example
//! ```
//! use varq_core::{CircuitProgram, ParameterRegistry, RotationAxis};
//!
//! let mut registry = ParameterRegistry::new();
//! let theta = registry.add_named("theta_0", 0.5);
//!
//! let mut program = CircuitProgram::new(2).unwrap();
//! program.rotation(RotationAxis::Y, 0, registry.get(theta).unwrap().value()).unwrap();
//! ```

pub mod batch;
pub mod error;
pub mod parameter;
pub mod parameter_id;
pub mod parameter_registry;
pub mod program;

// Re-exports for convenience
pub use batch::{InputBatch, OutputBatch};
pub use error::CoreError;
pub use parameter::Parameter;
pub use parameter_id::ParameterId;
pub use parameter_registry::ParameterRegistry;
pub use program::{CircuitProgram, ProgramOp, RotationAxis};

/// Type alias for results in varq-core
pub type Result<T> = std::result::Result<T, CoreError>;
