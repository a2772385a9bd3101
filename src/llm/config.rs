//! Configuration for the text-completion backend

use serde::{Deserialize, Serialize};

/// Backend settings, the `[llm]` table of `formforge.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmSettings {
    /// Which backend implementation to use
    #[serde(default)]
    pub backend: BackendKind,
    /// Model name/identifier (defaults per backend)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Custom base URL (for self-hosted or proxied endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Environment variable containing the API key (hosted backend only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on a single generation call
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_temperature() -> f32 {
    0.3
}

fn default_top_p() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    1500
}

fn default_timeout() -> u64 {
    30
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            model: None,
            base_url: None,
            api_key_env: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl LlmSettings {
    /// Configured model, or the backend's default
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.backend.default_model())
    }

    /// Configured base URL without a trailing slash, or the backend's default
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.backend.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Environment variable holding the API key
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or("OPENAI_API_KEY")
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}

/// Supported completion backends
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Local text-generation endpoint (`/api/generate`)
    #[default]
    Ollama,
    /// Hosted chat-completion API
    #[value(name = "openai")]
    OpenAI,
}

impl BackendKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            BackendKind::Ollama => "llama3.2:3b",
            BackendKind::OpenAI => "gpt-4o",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            BackendKind::Ollama => "http://localhost:11434",
            BackendKind::OpenAI => "https://api.openai.com/v1",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Ollama => write!(f, "ollama"),
            BackendKind::OpenAI => write!(f, "openai"),
        }
    }
}
