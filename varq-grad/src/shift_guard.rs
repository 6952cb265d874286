//! Scoped restore guard for transiently shifted parameters

use crate::Result;
use varq_backend::{ExecutionMode, VariationalModel};
use varq_core::{InputBatch, OutputBatch, ParameterId};

/// Exclusive transient write access to one parameter during its shift cycle
///
/// On entry the scope snapshots the parameter's current value; on exit,
/// whether a normal drop or unwinding past a failed evaluation, it writes that
/// snapshot back by direct assignment. This guarantees the restoration
/// invariant bit-exactly on every path, where the bare additive sequence
/// (+s, −2s, +s) could leave the parameter permanently offset after a
/// mid-cycle failure or accumulate rounding.
///
/// All model access during the cycle goes through the scope, so no other
/// parameter can be touched while one is shifted.
pub struct ShiftScope<'a, M: VariationalModel> {
    model: &'a mut M,
    id: ParameterId,
    original: f64,
}

impl<'a, M: VariationalModel> ShiftScope<'a, M> {
    /// Enter a shift cycle for one parameter
    ///
    /// # Errors
    /// Returns an error if `id` is not registered on the model.
    pub fn enter(model: &'a mut M, id: ParameterId) -> Result<Self> {
        let original = model.parameters().get(id)?.value();
        Ok(Self {
            model,
            id,
            original,
        })
    }

    /// The snapshotted original value
    #[inline]
    pub fn original(&self) -> f64 {
        self.original
    }

    /// Perturb the guarded parameter in place by `delta`
    pub fn shift(&mut self, delta: f64) -> Result<()> {
        self.model.parameters_mut().shift_value(self.id, delta)?;
        Ok(())
    }

    /// Run one forward pass at the current (shifted) parameter state
    pub fn evaluate(&self, inputs: &InputBatch, mode: ExecutionMode) -> Result<OutputBatch> {
        Ok(self.model.evaluate(inputs, mode)?)
    }
}

impl<M: VariationalModel> Drop for ShiftScope<'_, M> {
    fn drop(&mut self) {
        self.model
            .parameters_mut()
            .restore_value(self.id, self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use varq_backend::{EvaluatorError, ExecutionMode};
    use varq_core::ParameterRegistry;

    struct StubModel {
        registry: ParameterRegistry,
    }

    impl VariationalModel for StubModel {
        fn parameters(&self) -> &ParameterRegistry {
            &self.registry
        }

        fn parameters_mut(&mut self) -> &mut ParameterRegistry {
            &mut self.registry
        }

        fn evaluate(
            &self,
            _inputs: &InputBatch,
            _mode: ExecutionMode,
        ) -> varq_backend::Result<OutputBatch> {
            Err(EvaluatorError::BackendUnavailable("stub".to_string()))
        }
    }

    #[test]
    fn test_scope_restores_on_drop() {
        let mut registry = ParameterRegistry::new();
        let id = registry.add_named("theta", 0.3);
        let mut model = StubModel { registry };

        {
            let mut scope = ShiftScope::enter(&mut model, id).unwrap();
            scope.shift(FRAC_PI_2).unwrap();
            assert_eq!(scope.original(), 0.3);
        }
        assert_eq!(
            model.parameters().get(id).unwrap().value().to_bits(),
            0.3_f64.to_bits()
        );
    }

    #[test]
    fn test_scope_restores_after_partial_cycle() {
        let mut registry = ParameterRegistry::new();
        let id = registry.add_named("theta", -1.2);
        let mut model = StubModel { registry };

        {
            let mut scope = ShiftScope::enter(&mut model, id).unwrap();
            scope.shift(FRAC_PI_2).unwrap();
            // Evaluation fails; the cycle never reaches the -2s step
            let inputs = InputBatch::from_rows(vec![]).unwrap();
            assert!(scope.evaluate(&inputs, ExecutionMode::Simulator).is_err());
        }
        assert_eq!(
            model.parameters().get(id).unwrap().value().to_bits(),
            (-1.2_f64).to_bits()
        );
    }

    #[test]
    fn test_enter_rejects_unknown_id() {
        let mut model = StubModel {
            registry: ParameterRegistry::new(),
        };
        assert!(ShiftScope::enter(&mut model, ParameterId::new(0)).is_err());
    }
}
