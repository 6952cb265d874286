//! Local statevector evaluator
//!
//! Executes circuit programs in-process with zero network overhead. Batch
//! evaluation parallelizes over programs with rayon; each program is still
//! simulated sequentially, so results are deterministic regardless of the
//! parallel setting.

use crate::state_vector::StateVector;
use crate::{EvaluatorError, ExecutionMode, ForwardEvaluator, Result};
use rayon::prelude::*;
use varq_core::CircuitProgram;

/// Configuration for the local statevector evaluator
#[derive(Debug, Clone)]
pub struct StatevectorConfig {
    /// Maximum number of wires (default: 24, ~256 MiB of dense amplitudes)
    pub max_wires: usize,

    /// Parallelize batch evaluation over programs
    pub parallel: bool,
}

impl Default for StatevectorConfig {
    fn default() -> Self {
        Self {
            max_wires: 24,
            parallel: true,
        }
    }
}

/// Local forward evaluator backed by dense statevector simulation
///
/// # Example
/// ```
/// use varq_backend::{ForwardEvaluator, StatevectorEvaluator};
/// use varq_core::{CircuitProgram, RotationAxis};
///
/// let evaluator = StatevectorEvaluator::new();
/// let mut program = CircuitProgram::new(1).unwrap();
/// program.rotation(RotationAxis::Y, 0, 0.3).unwrap();
///
/// let expectations = evaluator.run(&program).unwrap();
/// assert!((expectations[0] - 0.3_f64.cos()).abs() < 1e-12);
/// ```
pub struct StatevectorEvaluator {
    name: String,
    config: StatevectorConfig,
}

impl StatevectorEvaluator {
    /// Create an evaluator with default configuration
    pub fn new() -> Self {
        Self::with_config(StatevectorConfig::default())
    }

    /// Create an evaluator with custom configuration
    pub fn with_config(config: StatevectorConfig) -> Self {
        Self {
            name: "statevector".to_string(),
            config,
        }
    }

    /// Set the evaluator name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &StatevectorConfig {
        &self.config
    }

    fn execute(&self, program: &CircuitProgram) -> Result<Vec<f64>> {
        if program.num_wires() > self.config.max_wires {
            return Err(EvaluatorError::TooManyWires {
                requested: program.num_wires(),
                max: self.config.max_wires,
            });
        }
        let mut state = StateVector::new(program.num_wires())?;
        state.apply_program(program)?;
        Ok(state.z_expectations())
    }
}

impl Default for StatevectorEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardEvaluator for StatevectorEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Simulator
    }

    fn run(&self, program: &CircuitProgram) -> Result<Vec<f64>> {
        self.execute(program)
    }

    fn run_batch(&self, programs: &[CircuitProgram]) -> Result<Vec<Vec<f64>>> {
        if self.config.parallel {
            programs.par_iter().map(|p| self.execute(p)).collect()
        } else {
            programs.iter().map(|p| self.execute(p)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use varq_core::RotationAxis;

    fn single_ry_program(theta: f64) -> CircuitProgram {
        let mut program = CircuitProgram::new(1).unwrap();
        program.rotation(RotationAxis::Y, 0, theta).unwrap();
        program
    }

    #[test]
    fn test_run_single_program() {
        let evaluator = StatevectorEvaluator::new();
        let expectations = evaluator.run(&single_ry_program(0.7)).unwrap();
        assert_eq!(expectations.len(), 1);
        assert_relative_eq!(expectations[0], 0.7_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_batch_matches_sequential() {
        let parallel = StatevectorEvaluator::new();
        let sequential = StatevectorEvaluator::with_config(StatevectorConfig {
            parallel: false,
            ..Default::default()
        });

        let programs: Vec<CircuitProgram> =
            [0.1, 0.5, 1.2, -0.4].iter().map(|&t| single_ry_program(t)).collect();

        let a = parallel.run_batch(&programs).unwrap();
        let b = sequential.run_batch(&programs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wire_limit_enforced() {
        let evaluator = StatevectorEvaluator::with_config(StatevectorConfig {
            max_wires: 4,
            parallel: false,
        });
        let program = CircuitProgram::new(5).unwrap();
        let err = evaluator.run(&program).unwrap_err();
        assert!(matches!(err, EvaluatorError::TooManyWires { requested: 5, max: 4 }));
    }

    #[test]
    fn test_determinism() {
        let evaluator = StatevectorEvaluator::new();
        let program = single_ry_program(0.3);
        let first = evaluator.run(&program).unwrap();
        let second = evaluator.run(&program).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluator_metadata() {
        let evaluator = StatevectorEvaluator::new().with_name("local");
        assert_eq!(evaluator.name(), "local");
        assert_eq!(evaluator.mode(), ExecutionMode::Simulator);
        assert!(evaluator.is_available());
    }
}
