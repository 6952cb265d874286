//! The quantum classifier model

use crate::encoder::AngleEncoder;
use crate::layer::{EntanglingLayer, LayerArch};
use varq_backend::{
    EvaluatorError, ExecutionMode, ForwardEvaluator, ProcessorEvaluator, Result,
    StatevectorEvaluator, VariationalModel,
};
use varq_core::{CircuitProgram, InputBatch, OutputBatch, ParameterRegistry};

/// A parameterized quantum classifier over a fixed number of wires
///
/// Forward pass per input row: encode the row's features as rotation angles,
/// apply the trainable entangling layers at the current parameter values,
/// and measure the Pauli-Z expectation of every wire. Output dimension
/// equals the wire count.
///
/// # Example
/// ```
/// use varq_backend::{ExecutionMode, VariationalModel};
/// use varq_core::InputBatch;
/// use varq_model::{LayerArch, QuantumClassifier};
///
/// let model = QuantumClassifier::new(LayerArch::default());
/// let inputs = InputBatch::from_rows(vec![vec![0.0; model.feature_dim()]]).unwrap();
/// let output = model.evaluate(&inputs, ExecutionMode::Simulator).unwrap();
/// assert_eq!(output.output_dim(), 4);
/// ```
pub struct QuantumClassifier {
    registry: ParameterRegistry,
    encoder: AngleEncoder,
    layer: EntanglingLayer,
    simulator: StatevectorEvaluator,
    processor: Option<ProcessorEvaluator>,
}

impl QuantumClassifier {
    /// Build a classifier with the given layer architecture
    ///
    /// All trainable angles start at zero; use
    /// [`parameters_mut`](VariationalModel::parameters_mut) to initialize
    /// them.
    pub fn new(arch: LayerArch) -> Self {
        let mut registry = ParameterRegistry::with_capacity(arch.num_parameters());
        let layer = EntanglingLayer::new(arch, &mut registry);
        Self {
            registry,
            encoder: AngleEncoder::new(arch.num_wires),
            layer,
            simulator: StatevectorEvaluator::new(),
            processor: None,
        }
    }

    /// Attach a remote processor evaluator for
    /// [`ExecutionMode::Processor`]
    pub fn with_processor(mut self, processor: ProcessorEvaluator) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Replace the local evaluator
    pub fn with_simulator(mut self, simulator: StatevectorEvaluator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Number of wires (also the output dimension)
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.encoder.num_wires()
    }

    /// Number of input features consumed per row
    #[inline]
    pub fn feature_dim(&self) -> usize {
        self.encoder.feature_dim()
    }

    /// Build the full circuit program for one input row at the current
    /// parameter values
    pub fn build_program(&self, features: &[f64]) -> Result<CircuitProgram> {
        let capacity = self.feature_dim() + self.layer.arch().num_parameters();
        let mut program = CircuitProgram::with_capacity(self.num_wires(), capacity)?;
        self.encoder.encode(features, &mut program)?;
        self.layer.apply(&self.registry, &mut program)?;
        Ok(program)
    }

    fn evaluator(&self, mode: ExecutionMode) -> Result<&dyn ForwardEvaluator> {
        match mode {
            ExecutionMode::Simulator => Ok(&self.simulator),
            ExecutionMode::Processor => self
                .processor
                .as_ref()
                .map(|p| p as &dyn ForwardEvaluator)
                .ok_or_else(|| {
                    EvaluatorError::BackendUnavailable(
                        "No processor evaluator configured".to_string(),
                    )
                }),
        }
    }
}

impl VariationalModel for QuantumClassifier {
    fn parameters(&self) -> &ParameterRegistry {
        &self.registry
    }

    fn parameters_mut(&mut self) -> &mut ParameterRegistry {
        &mut self.registry
    }

    fn evaluate(&self, inputs: &InputBatch, mode: ExecutionMode) -> Result<OutputBatch> {
        let evaluator = self.evaluator(mode)?;
        let programs: Result<Vec<CircuitProgram>> =
            inputs.rows().map(|row| self.build_program(row)).collect();
        let rows = evaluator.run_batch(&programs?)?;
        Ok(OutputBatch::from_rows(rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_arch() -> LayerArch {
        LayerArch {
            num_wires: 2,
            num_blocks: 1,
            layers_per_block: 2,
        }
    }

    #[test]
    fn test_output_shape() {
        let model = QuantumClassifier::new(small_arch());
        let inputs =
            InputBatch::from_rows(vec![vec![0.1; 8], vec![0.2; 8], vec![0.3; 8]]).unwrap();

        let output = model.evaluate(&inputs, ExecutionMode::Simulator).unwrap();
        assert_eq!(output.batch_size(), 3);
        assert_eq!(output.output_dim(), 2);
    }

    #[test]
    fn test_zero_model_on_zero_input() {
        // All angles zero: the program is the identity, every wire reads +1
        let model = QuantumClassifier::new(small_arch());
        let inputs = InputBatch::from_rows(vec![vec![0.0; 8]]).unwrap();

        let output = model.evaluate(&inputs, ExecutionMode::Simulator).unwrap();
        for &z in output.row(0).unwrap() {
            assert_relative_eq!(z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_wrong_feature_dim_rejected() {
        let model = QuantumClassifier::new(small_arch());
        let inputs = InputBatch::from_rows(vec![vec![0.0; 5]]).unwrap();
        assert!(model.evaluate(&inputs, ExecutionMode::Simulator).is_err());
    }

    #[test]
    fn test_processor_mode_unconfigured() {
        let model = QuantumClassifier::new(small_arch());
        let inputs = InputBatch::from_rows(vec![vec![0.0; 8]]).unwrap();

        let err = model
            .evaluate(&inputs, ExecutionMode::Processor)
            .unwrap_err();
        assert!(matches!(err, EvaluatorError::BackendUnavailable(_)));
    }

    #[test]
    fn test_evaluate_reads_current_parameters() {
        let mut model = QuantumClassifier::new(LayerArch {
            num_wires: 1,
            num_blocks: 1,
            layers_per_block: 1,
        });
        let inputs = InputBatch::from_rows(vec![vec![0.0; 4]]).unwrap();

        // Single RY(theta) on |0>: <Z> = cos(theta)
        model.parameters_mut().set_values(&[0.7]).unwrap();
        let output = model.evaluate(&inputs, ExecutionMode::Simulator).unwrap();
        assert_relative_eq!(output.row(0).unwrap()[0], 0.7_f64.cos(), epsilon = 1e-12);

        model.parameters_mut().set_values(&[1.4]).unwrap();
        let output = model.evaluate(&inputs, ExecutionMode::Simulator).unwrap();
        assert_relative_eq!(output.row(0).unwrap()[0], 1.4_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_program_structure() {
        let model = QuantumClassifier::new(small_arch());
        let program = model.build_program(&[0.0; 8]).unwrap();
        // 8 encoding rotations + 4 trainable rotations + 2 ring CNOTs
        assert_eq!(program.len(), 14);
        assert_eq!(program.num_wires(), 2);
    }
}
