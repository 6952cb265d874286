//! A parameterized quantum classifier
//!
//! The model maps a batch of classical feature rows to per-wire Pauli-Z
//! expectation values: each row is encoded as rotation angles, the trainable
//! entangling layers are applied at the current parameter values, and all
//! wires are measured. Forward evaluation dispatches on
//! [`ExecutionMode`](varq_backend::ExecutionMode) between the local
//! statevector evaluator and an optional remote processor.

pub mod classifier;
pub mod encoder;
pub mod layer;

pub use classifier::QuantumClassifier;
pub use encoder::AngleEncoder;
pub use layer::{EntanglingLayer, LayerArch};
