//! Parameter identification

use std::fmt;

/// A unique identifier for a parameter in a [`ParameterRegistry`]
///
/// `ParameterId` is a lightweight, copyable handle referencing a parameter
/// by its insertion position. Gradient sequences returned by the estimator
/// are positionally aligned to these ids.
///
/// [`ParameterRegistry`]: crate::ParameterRegistry
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterId {
    index: usize,
}

impl ParameterId {
    /// Create a new parameter id
    ///
    /// Typically called by `ParameterRegistry`, not by users directly.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Get the internal index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "param_{}", self.index)
    }
}

impl From<usize> for ParameterId {
    fn from(index: usize) -> Self {
        Self { index }
    }
}

impl From<ParameterId> for usize {
    fn from(id: ParameterId) -> Self {
        id.index
    }
}
