//! Parameter-shift gradient estimation
//!
//! This crate implements the shift-and-run estimator: for each trainable
//! parameter of a [`VariationalModel`](varq_backend::VariationalModel), the
//! parameter is perturbed by a fixed angular offset, the full forward pass
//! is re-evaluated at each perturbed setting, and the two evaluations are
//! combined into a gradient estimate, without requiring differentiable
//! simulation and without corrupting the model's working parameter state.
//!
//! For a Pauli-rotation gate U(θ) = exp(−iθG/2) with generator eigenvalues
//! ±1, the two-term rule is exact at shift s = π/2:
//!
//! ∂f/∂θ = [f(θ + π/2) − f(θ − π/2)] / 2
//!
//! # Example
//! ```
//! use varq_backend::ExecutionMode;
//! use varq_core::InputBatch;
//! use varq_grad::{shift_and_run, ShiftRuleConfig};
//! use varq_model::{LayerArch, QuantumClassifier};
//!
//! let mut model = QuantumClassifier::new(LayerArch::default());
//! let inputs = InputBatch::from_rows(vec![vec![0.0; model.feature_dim()]]).unwrap();
//!
//! let result = shift_and_run(
//!     &mut model,
//!     &inputs,
//!     ExecutionMode::Simulator,
//!     &ShiftRuleConfig::default(),
//! ).unwrap();
//!
//! assert_eq!(result.gradients.len(), 16);
//! ```

pub mod error;
pub mod shift_and_run;
pub mod shift_guard;

pub use error::{GradientError, Result};
pub use shift_and_run::{shift_and_run, ShiftAndRunResult, ShiftRuleConfig};
pub use shift_guard::ShiftScope;
