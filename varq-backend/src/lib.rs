//! Forward evaluation backends for variational quantum models
//!
//! This crate provides the evaluator abstraction consumed by the gradient
//! estimator, with two execution paths selected by [`ExecutionMode`]:
//! - [`StatevectorEvaluator`]: local dense statevector simulation
//! - [`ProcessorEvaluator`]: remote hardware-interfacing execution over HTTP
//!
//! Both evaluate a [`CircuitProgram`](varq_core::CircuitProgram) and return
//! per-wire Pauli-Z expectation values.

pub mod error;
pub mod evaluator;
pub mod local_simulator;
pub mod model;
pub mod processor;
pub mod state_vector;

pub use error::{EvaluatorError, Result};
pub use evaluator::{ExecutionMode, ForwardEvaluator};
pub use local_simulator::{StatevectorConfig, StatevectorEvaluator};
pub use model::VariationalModel;
pub use processor::{ProcessorConfig, ProcessorEvaluator};
pub use state_vector::StateVector;
