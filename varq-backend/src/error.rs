//! Error types for evaluator operations

use thiserror::Error;
use varq_core::CoreError;

/// Result type for evaluator operations
pub type Result<T> = std::result::Result<T, EvaluatorError>;

/// Errors that can occur during forward evaluation
#[derive(Debug, Error)]
pub enum EvaluatorError {
    /// Program cannot be executed by this evaluator
    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    /// Program wire count exceeds the evaluator's limit
    #[error("Program requires {requested} wires, evaluator supports max {max}")]
    TooManyWires { requested: usize, max: usize },

    /// Requested execution path is not configured
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Transport-level failure talking to a remote backend
    #[error("Backend communication error: {0}")]
    CommunicationError(String),

    /// Remote job submission was rejected
    #[error("Job submission failed: {0}")]
    JobSubmissionFailed(String),

    /// Remote job ran but ended in failure
    #[error("Job execution failed: {0}")]
    JobExecutionFailed(String),

    /// Remote job did not complete within the polling budget
    #[error("Job still pending after {attempts} polling attempts")]
    JobTimeout { attempts: usize },

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Evaluator produced or received output of the wrong shape
    #[error("Output shape mismatch: expected {expected} values, got {actual}")]
    OutputShapeMismatch { expected: usize, actual: usize },

    /// Error from core parameter or program operations
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<serde_json::Error> for EvaluatorError {
    fn from(err: serde_json::Error) -> Self {
        EvaluatorError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for EvaluatorError {
    fn from(err: reqwest::Error) -> Self {
        EvaluatorError::CommunicationError(err.to_string())
    }
}
