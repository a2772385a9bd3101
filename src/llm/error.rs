//! Error types for text-completion backends

use thiserror::Error;

/// Errors that can occur while talking to a completion backend
#[derive(Debug, Error)]
pub enum LlmError {
    /// Backend returned a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Backend rejected the request (hosted API error payload)
    #[error("Backend rejected request: {0}")]
    Rejected(String),

    /// Missing or unusable credentials
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Connection refused, DNS failure, broken body, ...
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend answered but produced no text
    #[error("No response content from {0}")]
    EmptyResponse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Network(format!("Connection error: {}", err))
        } else if err.is_decode() {
            LlmError::Parse(err.to_string())
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<async_openai::error::OpenAIError> for LlmError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;

        match err {
            OpenAIError::ApiError(api_error) => LlmError::Rejected(api_error.message),
            OpenAIError::JSONDeserialize(e) => LlmError::Parse(e.to_string()),
            OpenAIError::InvalidArgument(message) => LlmError::InvalidRequest(message),
            other => LlmError::Network(other.to_string()),
        }
    }
}

/// Result type alias for backend operations
pub type LlmResult<T> = Result<T, LlmError>;
