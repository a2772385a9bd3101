//! Error types for form generation

use thiserror::Error;

use crate::llm::LlmError;

/// Why the LLM path could not produce a form.
///
/// These never reach the HTTP caller: the orchestrator absorbs them by
/// falling back to the template generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Backend unreachable, non-success status, empty output or timeout
    #[error("Backend unavailable: {0}")]
    Backend(#[from] LlmError),

    /// No JSON object in the output, or malformed JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON parsed but is not a usable form
    #[error("Validation error: {0}")]
    Validation(String),
}

impl GenerationError {
    /// Short label for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            GenerationError::Backend(LlmError::Timeout) => "timeout",
            GenerationError::Backend(_) => "backend",
            GenerationError::Parse(_) => "parse",
            GenerationError::Validation(_) => "validation",
        }
    }
}

/// Failures visible to the caller of the orchestrator
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Prompt missing, not a string, or empty
    #[error("Prompt is required")]
    MissingPrompt,

    /// Unexpected fault while orchestrating
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for OrchestratorError {
    fn from(err: tokio::task::JoinError) -> Self {
        OrchestratorError::Internal(err.to_string())
    }
}

/// Result type alias for generator operations
pub type GenerationResult<T> = Result<T, GenerationError>;
