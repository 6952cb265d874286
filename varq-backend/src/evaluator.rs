//! The forward evaluator capability and execution mode flag

use crate::Result;
use std::fmt;
use varq_core::CircuitProgram;

/// Selects which backend performs forward evaluation
///
/// The mode is passed through unchanged to every evaluation within one
/// gradient estimation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Local statevector simulation
    Simulator,
    /// Remote hardware-interfacing processor
    Processor,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Simulator => write!(f, "simulator"),
            ExecutionMode::Processor => write!(f, "processor"),
        }
    }
}

/// Trait for forward evaluation backends
///
/// An evaluator executes a [`CircuitProgram`] from the all-zeros state and
/// returns the Pauli-Z expectation value of every wire, in wire order.
/// Evaluators are opaque to the gradient estimator; it only sees the model
/// contract built on top of them.
pub trait ForwardEvaluator: Send + Sync {
    /// Get the evaluator name
    fn name(&self) -> &str;

    /// Which execution mode this evaluator serves
    fn mode(&self) -> ExecutionMode;

    /// Execute one program and measure all wires
    ///
    /// Returns `program.num_wires()` expectation values in `[-1, 1]`.
    fn run(&self, program: &CircuitProgram) -> Result<Vec<f64>>;

    /// Execute a batch of programs
    ///
    /// The default implementation runs sequentially; evaluators may
    /// override it (the local simulator parallelizes over programs).
    fn run_batch(&self, programs: &[CircuitProgram]) -> Result<Vec<Vec<f64>>> {
        programs.iter().map(|p| self.run(p)).collect()
    }

    /// Check if the evaluator is ready to accept programs
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varq_core::RotationAxis;

    struct ConstantEvaluator;

    impl ForwardEvaluator for ConstantEvaluator {
        fn name(&self) -> &str {
            "constant"
        }

        fn mode(&self) -> ExecutionMode {
            ExecutionMode::Simulator
        }

        fn run(&self, program: &CircuitProgram) -> Result<Vec<f64>> {
            Ok(vec![1.0; program.num_wires()])
        }
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", ExecutionMode::Simulator), "simulator");
        assert_eq!(format!("{}", ExecutionMode::Processor), "processor");
    }

    #[test]
    fn test_default_run_batch() {
        let evaluator = ConstantEvaluator;
        let mut program = CircuitProgram::new(2).unwrap();
        program.rotation(RotationAxis::Y, 0, 0.1).unwrap();

        let outputs = evaluator
            .run_batch(&[program.clone(), program])
            .unwrap();
        assert_eq!(outputs, vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert!(evaluator.is_available());
    }
}
