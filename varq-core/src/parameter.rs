//! Trainable parameter type for variational quantum models

use crate::{CoreError, Result};

/// A trainable rotation angle belonging to a variational model
///
/// Parameters are mutated in place during gradient estimation: the
/// shift-and-run sweep perturbs each one by a fixed offset, evaluates the
/// model, and restores the original value before moving on. They support:
/// - Optional naming for debugging and error reporting
/// - Value bounds
/// - Freezing to exclude from the gradient sweep
///
/// # Example
/// ```
/// use varq_core::Parameter;
///
/// let mut theta = Parameter::named("theta_0", 0.3);
/// theta.apply_shift(std::f64::consts::FRAC_PI_2).unwrap();
/// theta.restore(0.3);
/// assert_eq!(theta.value(), 0.3);
/// ```
#[derive(Clone, Debug)]
pub struct Parameter {
    name: Option<String>,
    value: f64,
    bounds: Option<(f64, f64)>,
    frozen: bool,
}

impl Parameter {
    /// Create a new parameter with a value
    pub fn new(value: f64) -> Self {
        Self {
            name: None,
            value,
            bounds: None,
            frozen: false,
        }
    }

    /// Create a named parameter
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value,
            bounds: None,
            frozen: false,
        }
    }

    /// Get parameter name
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get parameter value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Set parameter value
    ///
    /// # Errors
    /// Returns an error if the parameter is frozen or the value violates
    /// its bounds.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if self.frozen {
            return Err(CoreError::FrozenParameter(self.label()));
        }
        if let Some((min, max)) = self.bounds {
            if value < min || value > max {
                return Err(CoreError::BoundsViolation {
                    name: self.label(),
                    value,
                    min,
                    max,
                });
            }
        }
        self.value = value;
        Ok(())
    }

    /// Perturb the value in place by `delta`
    ///
    /// This is the in-place additive update used by the shift-and-run
    /// gradient sweep. The same frozen/bounds checks as [`set_value`] apply;
    /// a bounded parameter whose transient shifted value would leave its
    /// bounds aborts the update.
    ///
    /// [`set_value`]: Parameter::set_value
    pub fn apply_shift(&mut self, delta: f64) -> Result<()> {
        self.set_value(self.value + delta)
    }

    /// Write a value directly, bypassing frozen and bounds checks
    ///
    /// Exists so the gradient estimator's restore guard can always put a
    /// transiently shifted parameter back to its snapshotted original value,
    /// even on a failure path. Not intended for general mutation; use
    /// [`set_value`] instead.
    ///
    /// [`set_value`]: Parameter::set_value
    #[inline]
    pub fn restore(&mut self, value: f64) {
        self.value = value;
    }

    /// Get parameter bounds
    #[inline]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Set parameter bounds (builder pattern)
    ///
    /// # Errors
    /// Returns an error if `min > max` or the current value lies outside
    /// the new bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Result<Self> {
        if min > max {
            return Err(CoreError::ValidationError(format!(
                "Invalid bounds: min ({}) > max ({})",
                min, max
            )));
        }
        if self.value < min || self.value > max {
            return Err(CoreError::BoundsViolation {
                name: self.label(),
                value: self.value,
                min,
                max,
            });
        }
        self.bounds = Some((min, max));
        Ok(self)
    }

    /// Freeze parameter (exclude from the gradient sweep)
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze parameter
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Check if parameter is frozen
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Builder pattern: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder pattern: set as frozen
    pub fn as_frozen(mut self) -> Self {
        self.frozen = true;
        self
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}={}", name, self.value)?;
        } else {
            write!(f, "{}", self.value)?;
        }
        if self.frozen {
            write!(f, " (frozen)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_parameter_creation() {
        let param = Parameter::new(1.5);
        assert_eq!(param.value(), 1.5);
        assert!(param.name().is_none());
        assert!(param.bounds().is_none());
        assert!(!param.is_frozen());
    }

    #[test]
    fn test_named_parameter() {
        let param = Parameter::named("theta", 2.0);
        assert_eq!(param.name(), Some("theta"));
        assert_eq!(param.value(), 2.0);
    }

    #[test]
    fn test_apply_shift() {
        let mut param = Parameter::new(0.3);
        param.apply_shift(FRAC_PI_2).unwrap();
        assert_eq!(param.value(), 0.3 + FRAC_PI_2);
        param.apply_shift(-2.0 * FRAC_PI_2).unwrap();
        assert_eq!(param.value(), 0.3 + FRAC_PI_2 - 2.0 * FRAC_PI_2);
    }

    #[test]
    fn test_restore_is_bit_exact() {
        let mut param = Parameter::new(0.3);
        param.apply_shift(FRAC_PI_2).unwrap();
        param.restore(0.3);
        assert_eq!(param.value().to_bits(), 0.3_f64.to_bits());
    }

    #[test]
    fn test_restore_bypasses_frozen_and_bounds() {
        let mut param = Parameter::new(1.0).with_bounds(0.0, 2.0).unwrap();
        param.freeze();
        param.restore(5.0);
        assert_eq!(param.value(), 5.0);
    }

    #[test]
    fn test_frozen_parameter_rejects_writes() {
        let mut param = Parameter::new(1.0);
        param.freeze();
        assert!(param.set_value(2.0).is_err());
        assert!(param.apply_shift(0.1).is_err());
    }

    #[test]
    fn test_shift_respects_bounds() {
        let mut param = Parameter::new(1.0).with_bounds(0.0, 2.0).unwrap();
        param.apply_shift(0.5).unwrap();
        assert_eq!(param.value(), 1.5);
        assert!(param.apply_shift(1.0).is_err());
        // Value untouched by the failed shift
        assert_eq!(param.value(), 1.5);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(Parameter::new(1.0).with_bounds(2.0, 0.0).is_err());
        assert!(Parameter::new(5.0).with_bounds(0.0, 2.0).is_err());
    }

    #[test]
    fn test_display() {
        let param = Parameter::named("theta", 2.0);
        assert_eq!(format!("{}", param), "theta=2");

        let frozen = Parameter::new(1.0).as_frozen();
        assert!(format!("{}", frozen).contains("frozen"));
    }
}
