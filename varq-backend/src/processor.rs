//! Remote processor evaluator
//!
//! Hardware-interfacing execution path: programs are serialized to JSON and
//! submitted as jobs to a processor service, then polled until completion.
//! The service is expected to return per-wire Pauli-Z expectation values.

use crate::{EvaluatorError, ExecutionMode, ForwardEvaluator, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use varq_core::CircuitProgram;

/// Configuration for the remote processor evaluator
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Base URL of the processor service
    pub endpoint: String,

    /// API token for bearer authentication
    pub api_token: String,

    /// Maximum polling attempts for job status
    pub max_polling_attempts: usize,

    /// Polling interval in milliseconds
    pub polling_interval_ms: u64,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ProcessorConfig {
    /// Create a configuration with endpoint and token
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: api_token.into(),
            max_polling_attempts: 300,
            polling_interval_ms: 2000,
            request_timeout_secs: 30,
        }
    }

    /// Set polling configuration
    pub fn with_polling(mut self, max_attempts: usize, interval_ms: u64) -> Self {
        self.max_polling_attempts = max_attempts;
        self.polling_interval_ms = interval_ms;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

/// Status of a remote job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
}

#[derive(Serialize)]
struct JobRequest<'a> {
    program: &'a CircuitProgram,
}

#[derive(Deserialize)]
struct JobSubmitted {
    job_id: String,
}

#[derive(Deserialize)]
struct JobState {
    status: JobStatus,
    expectations: Option<Vec<f64>>,
    error: Option<String>,
}

/// Forward evaluator backed by a remote processor service
pub struct ProcessorEvaluator {
    name: String,
    config: ProcessorConfig,
    client: reqwest::blocking::Client,
}

impl ProcessorEvaluator {
    /// Create an evaluator from a configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            name: "processor".to_string(),
            config,
            client,
        })
    }

    /// Set the evaluator name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    fn submit(&self, program: &CircuitProgram) -> Result<String> {
        let url = format!("{}/jobs", self.config.endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&JobRequest { program })
            .send()?;

        if !response.status().is_success() {
            return Err(EvaluatorError::JobSubmissionFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let submitted: JobSubmitted = response.json()?;
        Ok(submitted.job_id)
    }

    fn poll(&self, job_id: &str) -> Result<JobState> {
        let url = format!("{}/jobs/{}", self.config.endpoint, job_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .send()?;

        if !response.status().is_success() {
            return Err(EvaluatorError::CommunicationError(format!(
                "Job status query returned HTTP {}",
                response.status()
            )));
        }

        Ok(response.json()?)
    }

    fn wait_for_result(&self, job_id: &str, expected_wires: usize) -> Result<Vec<f64>> {
        for attempt in 0..self.config.max_polling_attempts {
            let state = self.poll(job_id)?;
            match state.status {
                JobStatus::Completed => {
                    let expectations = state.expectations.ok_or_else(|| {
                        EvaluatorError::JobExecutionFailed(format!(
                            "Job {} completed without expectation values",
                            job_id
                        ))
                    })?;
                    if expectations.len() != expected_wires {
                        return Err(EvaluatorError::OutputShapeMismatch {
                            expected: expected_wires,
                            actual: expectations.len(),
                        });
                    }
                    return Ok(expectations);
                }
                JobStatus::Failed | JobStatus::Cancelled => {
                    return Err(EvaluatorError::JobExecutionFailed(format!(
                        "Job {} ended with status {:?}: {}",
                        job_id,
                        state.status,
                        state.error.unwrap_or_default()
                    )));
                }
                JobStatus::Queued | JobStatus::Running => {
                    if attempt + 1 < self.config.max_polling_attempts {
                        std::thread::sleep(Duration::from_millis(
                            self.config.polling_interval_ms,
                        ));
                    }
                }
            }
        }
        Err(EvaluatorError::JobTimeout {
            attempts: self.config.max_polling_attempts,
        })
    }
}

impl ForwardEvaluator for ProcessorEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Processor
    }

    fn run(&self, program: &CircuitProgram) -> Result<Vec<f64>> {
        let job_id = self.submit(program)?;
        self.wait_for_result(&job_id, program.num_wires())
    }
}
