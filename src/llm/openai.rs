//! OpenAI backend (hosted chat completion)

use async_openai::{config::OpenAIConfig, types::*, Client};
use async_trait::async_trait;
use std::env;

use super::{CompletionRequest, CompletionResponse, LlmSettings, Role, TextCompletionBackend, TokenUsage};
use crate::llm::error::{LlmError, LlmResult};

/// OpenAI chat-completion backend
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiBackend {
    /// Create a new OpenAI backend from configuration.
    ///
    /// The API key is read from the environment variable named by
    /// `llm.api_key_env` (default `OPENAI_API_KEY`).
    pub fn new(settings: &LlmSettings) -> LlmResult<Self> {
        let env_var = settings.api_key_env();
        let api_key = env::var(env_var).map_err(|_| {
            LlmError::Authentication(format!("Environment variable {} not set", env_var))
        })?;

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(settings.base_url());

        Ok(Self {
            client: Client::with_config(config),
            model: settings.model().to_string(),
        })
    }

    fn convert_messages(
        &self,
        request: &CompletionRequest,
    ) -> LlmResult<Vec<ChatCompletionRequestMessage>> {
        request
            .messages
            .iter()
            .map(|m| {
                let message = match m.role {
                    Role::System => ChatCompletionRequestMessage::System(
                        ChatCompletionRequestSystemMessageArgs::default()
                            .content(m.content.clone())
                            .build()?,
                    ),
                    Role::User => ChatCompletionRequestMessage::User(
                        ChatCompletionRequestUserMessageArgs::default()
                            .content(m.content.clone())
                            .build()?,
                    ),
                };
                Ok(message)
            })
            .collect()
    }
}

#[async_trait]
impl TextCompletionBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        let messages = self.convert_messages(&request)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        if let Some(top_p) = request.top_p {
            request_builder.top_p(top_p);
        }

        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_tokens(max_tokens.min(u16::MAX as u32) as u16);
        }

        let chat_request = request_builder.build()?;
        let response = self.client.chat().create(chat_request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmError::EmptyResponse(self.name().to_string()))?;

        let usage = response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens));

        Ok(CompletionResponse { content, usage })
    }
}
