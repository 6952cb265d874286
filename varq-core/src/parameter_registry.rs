//! Ordered storage for the trainable parameters of a variational model

use crate::parameter::Parameter;
use crate::parameter_id::ParameterId;
use crate::{CoreError, Result};
use std::collections::HashMap;

/// Insertion-ordered registry of model parameters
///
/// The registry is the "parameter collection" the gradient estimator sweeps:
/// iteration order is the order parameters were added, and that order is
/// stable across calls, so gradient sequences can be positionally aligned
/// to it.
///
/// # Example
/// ```
/// use varq_core::ParameterRegistry;
///
/// let mut registry = ParameterRegistry::new();
/// let theta = registry.add_named("theta", 0.5);
/// let beta = registry.add_named("beta", 1.0);
///
/// assert_eq!(registry.trainable_ids(), vec![theta, beta]);
/// registry.shift_value(theta, 0.1).unwrap();
/// assert_eq!(registry.get(theta).unwrap().value(), 0.6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParameterRegistry {
    parameters: Vec<Parameter>,
    name_to_id: HashMap<String, ParameterId>,
}

impl ParameterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parameters: Vec::with_capacity(capacity),
            name_to_id: HashMap::with_capacity(capacity),
        }
    }

    /// Add a parameter, returning its id
    pub fn add(&mut self, param: Parameter) -> ParameterId {
        let id = ParameterId::new(self.parameters.len());
        if let Some(name) = param.name() {
            self.name_to_id.insert(name.to_string(), id);
        }
        self.parameters.push(param);
        id
    }

    /// Add a named parameter
    pub fn add_named(&mut self, name: impl Into<String>, value: f64) -> ParameterId {
        self.add(Parameter::named(name, value))
    }

    /// Add multiple unnamed parameters at once
    pub fn add_many(&mut self, values: &[f64]) -> Vec<ParameterId> {
        values
            .iter()
            .map(|&value| self.add(Parameter::new(value)))
            .collect()
    }

    /// Get a parameter by id
    ///
    /// # Errors
    /// Returns an error if the id is invalid.
    pub fn get(&self, id: ParameterId) -> Result<&Parameter> {
        self.parameters
            .get(id.index())
            .ok_or(CoreError::InvalidParameterId(
                id.index(),
                self.parameters.len(),
            ))
    }

    /// Get a mutable reference to a parameter by id
    pub fn get_mut(&mut self, id: ParameterId) -> Result<&mut Parameter> {
        let len = self.parameters.len();
        self.parameters
            .get_mut(id.index())
            .ok_or(CoreError::InvalidParameterId(id.index(), len))
    }

    /// Get a parameter by name
    pub fn get_by_name(&self, name: &str) -> Result<&Parameter> {
        let id = self
            .name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::ValidationError(format!("Parameter '{}' not found", name)))?;
        self.get(id)
    }

    /// Perturb a parameter in place by `delta`
    ///
    /// # Errors
    /// Returns an error if the id is invalid, the parameter is frozen, or
    /// the shifted value violates its bounds.
    pub fn shift_value(&mut self, id: ParameterId, delta: f64) -> Result<()> {
        self.get_mut(id)?.apply_shift(delta)
    }

    /// Write a parameter value directly, bypassing frozen and bounds checks
    ///
    /// Used by the gradient estimator's restore guard; a no-op for an
    /// invalid id so it is safe to call from a destructor.
    pub fn restore_value(&mut self, id: ParameterId, value: f64) {
        if let Some(param) = self.parameters.get_mut(id.index()) {
            param.restore(value);
        }
    }

    /// Get all parameter values in insertion order
    pub fn values(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.value()).collect()
    }

    /// Set all parameter values from a slice, in insertion order
    ///
    /// # Errors
    /// Returns an error if the slice length does not match the parameter
    /// count, or any write is rejected.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.parameters.len() {
            return Err(CoreError::shape_mismatch(
                format!("{} values", self.parameters.len()),
                format!("{} values", values.len()),
            ));
        }
        for (param, &value) in self.parameters.iter_mut().zip(values.iter()) {
            param.set_value(value)?;
        }
        Ok(())
    }

    /// Ids of all unfrozen parameters, in insertion order
    ///
    /// This is the ordered collection the shift-and-run sweep iterates.
    pub fn trainable_ids(&self) -> Vec<ParameterId> {
        self.parameters
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_frozen())
            .map(|(i, _)| ParameterId::new(i))
            .collect()
    }

    /// Ids of all parameters, in insertion order
    pub fn all_ids(&self) -> Vec<ParameterId> {
        (0..self.parameters.len()).map(ParameterId::new).collect()
    }

    /// Number of registered parameters
    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate over all parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, &Parameter)> {
        self.parameters
            .iter()
            .enumerate()
            .map(|(i, p)| (ParameterId::new(i), p))
    }
}
