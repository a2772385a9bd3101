//! LLM-backed form generation

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::error::{GenerationError, GenerationResult};
use super::extract::parse_response;
use super::sanitize::{sanitize_form_value, validate_shape};
use crate::domain::{Form, FormGeneratorPort};
use crate::llm::{CompletionRequest, LlmError, LlmSettings, Message, TextCompletionBackend};

/// Fixed instruction describing the exact JSON shape expected back
pub const SYSTEM_PROMPT: &str = r#"You are a form builder AI. Generate a comprehensive form structure in JSON format.

The response MUST be a valid JSON object with this EXACT structure:
{
  "title": "Form Title",
  "description": "Optional form description",
  "sections": [
    {
      "id": "section-1",
      "title": "Section Title",
      "description": "Optional section description",
      "fields": [
        {
          "id": "field-1",
          "type": "text",
          "label": "Field Label",
          "placeholder": "Optional placeholder text",
          "required": true,
          "options": [],
          "validation": {
            "minLength": 2,
            "maxLength": 100
          },
          "description": "Optional field description"
        }
      ]
    }
  ]
}

Field types available: text, email, tel, number, password, textarea, select, checkbox, radio, date, file

IMPORTANT: Return ONLY the JSON object. Do not include any markdown, explanations, or extra text."#;

/// Per-request instruction wrapping the user's description
pub fn user_prompt(prompt: &str) -> String {
    format!(
        "Create a form for: {}\n\nReturn only valid JSON following the exact structure above.",
        prompt
    )
}

/// Generates forms by asking a completion backend for JSON
pub struct LlmFormGenerator {
    backend: Arc<dyn TextCompletionBackend>,
    settings: LlmSettings,
}

impl LlmFormGenerator {
    pub fn new(backend: Arc<dyn TextCompletionBackend>, settings: LlmSettings) -> Self {
        Self { backend, settings }
    }

    /// Build the completion request for a prompt
    pub fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest::new(vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(user_prompt(prompt)),
        ])
        .with_sampling(&self.settings)
    }

    /// Turn raw model output into a validated [`Form`]
    pub fn parse_form(raw: &str) -> GenerationResult<Form> {
        let value = parse_response(raw)?;
        validate_shape(&value)?;

        let form: Form = serde_json::from_value(sanitize_form_value(value))
            .map_err(|e| GenerationError::Validation(e.to_string()))?;

        if form.sections.is_empty() {
            return Err(GenerationError::Validation(
                "Form has no sections".to_string(),
            ));
        }

        Ok(form)
    }

    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        let request = self.build_request(prompt);
        let timeout: Duration = self.settings.timeout();

        let response = tokio::time::timeout(timeout, self.backend.complete(request))
            .await
            .map_err(|_| LlmError::Timeout)??;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                backend = self.backend.name(),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        Ok(response.content)
    }
}

#[async_trait]
impl FormGeneratorPort for LlmFormGenerator {
    fn name(&self) -> &str {
        self.backend.name()
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<Form> {
        let raw = self.complete(prompt).await?;
        Self::parse_form(&raw)
    }
}
