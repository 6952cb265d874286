//! Error types for gradient estimation

use thiserror::Error;
use varq_backend::EvaluatorError;
use varq_core::CoreError;

/// Result type for gradient estimation
pub type Result<T> = std::result::Result<T, GradientError>;

/// Errors that can occur during shift-and-run estimation
///
/// There is no retry and no partial-result recovery: a failed evaluation or
/// rejected parameter shift aborts the whole estimation. Parameters are
/// still restored to their original values on every failure path.
#[derive(Debug, Error)]
pub enum GradientError {
    /// A forward evaluation failed
    #[error("Forward evaluation failed: {0}")]
    Evaluator(#[from] EvaluatorError),

    /// A parameter shift or lookup was rejected
    #[error(transparent)]
    Parameter(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_error_conversion() {
        let err: GradientError =
            EvaluatorError::BackendUnavailable("no processor".to_string()).into();
        assert!(format!("{}", err).contains("no processor"));
    }

    #[test]
    fn test_parameter_error_is_transparent() {
        let err: GradientError = CoreError::InvalidParameterId(3, 1).into();
        assert!(format!("{}", err).contains("Invalid parameter id 3"));
    }
}
