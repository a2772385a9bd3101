//! Ollama backend (local `/api/generate` endpoint)

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{
    flatten_prompt, CompletionRequest, CompletionResponse, LlmSettings, TextCompletionBackend,
    TokenUsage,
};
use crate::llm::error::{LlmError, LlmResult};

/// Ollama backend (for local models)
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend from configuration
    pub fn new(settings: &LlmSettings) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url(),
            model: settings.model().to_string(),
        })
    }
}

#[async_trait]
impl TextCompletionBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        // `max_tokens` mirrors the documented request shape; `num_predict`
        // is the key Ollama actually enforces.
        let body = json!({
            "model": self.model,
            "prompt": flatten_prompt(&request.messages),
            "stream": false,
            "options": {
                "temperature": request.temperature,
                "top_p": request.top_p,
                "max_tokens": request.max_tokens,
                "num_predict": request.max_tokens,
            }
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let generated: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(format!("Failed to parse response: {}", e)))?;

        let content = generated.response.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse(self.name().to_string()));
        }

        let usage = match (generated.prompt_eval_count, generated.eval_count) {
            (None, None) => None,
            (prompt, completion) => Some(TokenUsage::new(
                prompt.unwrap_or(0),
                completion.unwrap_or(0),
            )),
        };

        tracing::debug!(
            model = %self.model,
            done = generated.done,
            chars = content.len(),
            "Ollama completion received"
        );

        Ok(CompletionResponse { content, usage })
    }
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    done: bool,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}
