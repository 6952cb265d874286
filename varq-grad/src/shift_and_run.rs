//! The shift-and-run gradient estimator

use crate::shift_guard::ShiftScope;
use crate::Result;
use std::time::{Duration, Instant};
use varq_backend::{ExecutionMode, VariationalModel};
use varq_core::{InputBatch, OutputBatch, ParameterId};

/// Configuration for the two-term parameter-shift rule
///
/// The shift magnitude and gradient scale are coupled: the general scale is
/// `1 / (2 sin s)`, which reduces to `0.5` at the canonical s = π/2. This is
/// not a finite-difference step size: changing the shift does not trade
/// accuracy for stability, it selects a different (still exact) evaluation
/// pair for Pauli-rotation generators.
#[derive(Debug, Clone)]
pub struct ShiftRuleConfig {
    /// Shift magnitude (default: π/2)
    pub shift: f64,
}

impl Default for ShiftRuleConfig {
    fn default() -> Self {
        Self {
            shift: std::f64::consts::FRAC_PI_2,
        }
    }
}

impl ShiftRuleConfig {
    /// Create a configuration with a custom shift magnitude
    pub fn with_shift(shift: f64) -> Self {
        Self { shift }
    }

    /// The gradient scale paired with this shift
    pub fn scale(&self) -> f64 {
        if (self.shift - std::f64::consts::FRAC_PI_2).abs() < 1e-10 {
            0.5
        } else {
            1.0 / (2.0 * self.shift.sin())
        }
    }
}

/// Result of one shift-and-run estimation
#[derive(Debug, Clone)]
pub struct ShiftAndRunResult {
    /// Output of the final unperturbed forward pass
    pub nominal: OutputBatch,

    /// One output-shaped gradient estimate per trainable parameter,
    /// positionally aligned with `parameter_ids`
    pub gradients: Vec<OutputBatch>,

    /// Ids of the swept parameters, in sweep (insertion) order
    pub parameter_ids: Vec<ParameterId>,

    /// Number of forward evaluations performed (2 per parameter + 1 nominal)
    pub num_evaluations: usize,

    /// Wall-clock time of the whole estimation
    pub computation_time: Duration,
}

impl ShiftAndRunResult {
    /// Number of estimated gradients
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Check if no parameters were swept
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Gradient estimate for the parameter at sweep position `index`
    pub fn gradient(&self, index: usize) -> Option<&OutputBatch> {
        self.gradients.get(index)
    }
}

/// Estimate gradients of a model's output with respect to every trainable
/// parameter using the two-term parameter-shift rule
///
/// For each trainable parameter, in the registry's insertion order and
/// strictly sequentially:
/// 1. shift the parameter by +s and evaluate the full forward pass,
/// 2. shift by −2s (the parameter now sits at original − s) and evaluate,
/// 3. restore the original value and combine: `scale · (out₊ − out₋)`.
///
/// Restoration is handled by a [`ShiftScope`] guard, so a failing
/// evaluation can never leak a shifted parameter into subsequent calls.
/// After the sweep one final unperturbed evaluation produces the nominal
/// output; intermediate steps never evaluate at the unshifted point, so it
/// is not reconstructed from them.
///
/// An empty trainable collection is not an error: the gradient sequence is
/// empty and the nominal output is still computed.
///
/// # Errors
/// Propagates evaluator failures and rejected parameter shifts without
/// retry; the whole estimation aborts, with all parameters restored.
pub fn shift_and_run<M: VariationalModel>(
    model: &mut M,
    inputs: &InputBatch,
    mode: ExecutionMode,
    config: &ShiftRuleConfig,
) -> Result<ShiftAndRunResult> {
    let start = Instant::now();
    let parameter_ids = model.parameters().trainable_ids();
    let scale = config.scale();

    let mut gradients = Vec::with_capacity(parameter_ids.len());
    for &id in &parameter_ids {
        let mut scope = ShiftScope::enter(model, id)?;
        scope.shift(config.shift)?;
        let out_plus = scope.evaluate(inputs, mode)?;
        scope.shift(-2.0 * config.shift)?;
        let out_minus = scope.evaluate(inputs, mode)?;
        drop(scope); // restores the parameter before the next cycle

        gradients.push(out_plus.sub(&out_minus)?.scale(scale));
    }

    // Fresh forward pass at the restored parameter values
    let nominal = model.evaluate(inputs, mode)?;
    let num_evaluations = 2 * parameter_ids.len() + 1;

    Ok(ShiftAndRunResult {
        nominal,
        gradients,
        parameter_ids,
        num_evaluations,
        computation_time: start.elapsed(),
    })
}
