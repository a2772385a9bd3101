//! Text-completion backends
//!
//! Form generation only needs "prompt in, text out". Two backends provide
//! that capability:
//! - Ollama (local `/api/generate` endpoint)
//! - OpenAI (hosted chat completion)
//!
//! The concrete backend is picked from [`LlmSettings`] by [`create_backend`].

mod config;
mod error;
mod message;
mod ollama;
mod openai;

pub use config::{BackendKind, LlmSettings};
pub use error::{LlmError, LlmResult};
pub use message::{flatten_prompt, Message, Role};
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Trait for text-completion backends
#[async_trait]
pub trait TextCompletionBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;

    /// Complete a request (non-streaming)
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse>;
}

/// Request for a completion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System and user messages, in order
    pub messages: Vec<Message>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Apply the sampling parameters from settings
    pub fn with_sampling(mut self, settings: &LlmSettings) -> Self {
        self.temperature = Some(settings.temperature);
        self.top_p = Some(settings.top_p);
        self.max_tokens = Some(settings.max_tokens);
        self
    }
}

/// Response from a completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Raw generated text
    pub content: String,
    /// Token usage, when the backend reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Create a completion backend from configuration
pub fn create_backend(settings: &LlmSettings) -> LlmResult<Arc<dyn TextCompletionBackend>> {
    match settings.backend {
        BackendKind::Ollama => {
            let backend = OllamaBackend::new(settings)?;
            Ok(Arc::new(backend))
        }
        BackendKind::OpenAI => {
            let backend = OpenAiBackend::new(settings)?;
            Ok(Arc::new(backend))
        }
    }
}
