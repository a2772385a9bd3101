use thiserror::Error;

use crate::config::{RateLimitConfig, ServerSettings, Settings};
use crate::llm::LlmSettings;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    fn invalid(field: &str, reason: &str) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Check every section, collecting all errors rather than stopping at the first
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&settings.server, &mut errors);
        Self::validate_llm(&settings.llm, &mut errors);
        if let Some(rate_limit) = &settings.rate_limit {
            Self::validate_rate_limit(rate_limit, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings, errors: &mut Vec<ValidationError>) {
        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::invalid(
                "server.port",
                "Port must be greater than 0",
            ));
        }
    }

    fn validate_llm(llm: &LlmSettings, errors: &mut Vec<ValidationError>) {
        if llm.model().trim().is_empty() {
            errors.push(ValidationError::MissingField("llm.model".to_string()));
        }

        if !(0.0..=2.0).contains(&llm.temperature) {
            errors.push(ValidationError::invalid(
                "llm.temperature",
                "Temperature must be between 0.0 and 2.0",
            ));
        }

        if !(llm.top_p > 0.0 && llm.top_p <= 1.0) {
            errors.push(ValidationError::invalid(
                "llm.top_p",
                "top_p must be greater than 0.0 and at most 1.0",
            ));
        }

        if llm.max_tokens == 0 {
            errors.push(ValidationError::invalid(
                "llm.max_tokens",
                "max_tokens must be greater than 0",
            ));
        }

        if llm.timeout_seconds == 0 {
            errors.push(ValidationError::invalid(
                "llm.timeout_seconds",
                "Timeout must be greater than 0",
            ));
        }
    }

    fn validate_rate_limit(rate_limit: &RateLimitConfig, errors: &mut Vec<ValidationError>) {
        if rate_limit.enabled && rate_limit.requests_per_second == 0 {
            errors.push(ValidationError::invalid(
                "rate_limit.requests_per_second",
                "Must be greater than 0 when rate limiting is enabled",
            ));
        }
    }
}
