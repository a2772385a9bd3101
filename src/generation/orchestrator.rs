//! LLM-first generation with template fallback

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::error::OrchestratorError;
use super::llm_form::LlmFormGenerator;
use super::template::TemplateGenerator;
use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::{Form, FormGeneratorPort};
use crate::llm::{create_backend, LlmSettings};

/// Which generator produced a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPath {
    Llm,
    Template,
}

impl GenerationPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPath::Llm => "llm",
            GenerationPath::Template => "template",
        }
    }
}

/// A generated form and the path that served it
#[derive(Debug, Clone)]
pub struct Generated {
    pub form: Form,
    pub path: GenerationPath,
}

/// Tries the LLM generator and falls back to the template generator on any
/// failure, so a valid prompt always yields a form.
pub struct FormOrchestrator {
    primary: Option<Arc<dyn FormGeneratorPort>>,
    fallback: TemplateGenerator,
    metrics: Option<Arc<MetricsCollector>>,
}

impl FormOrchestrator {
    pub fn new(primary: Option<Arc<dyn FormGeneratorPort>>) -> Self {
        Self {
            primary,
            fallback: TemplateGenerator::new(),
            metrics: None,
        }
    }

    /// Template-only orchestrator (LLM disabled)
    pub fn template_only() -> Self {
        Self::new(None)
    }

    /// Build from backend settings.
    ///
    /// A backend that cannot be constructed (e.g. missing API key) is logged
    /// and the orchestrator runs template-only rather than refusing to start.
    pub fn from_settings(settings: &LlmSettings, llm_enabled: bool) -> Self {
        if !llm_enabled {
            info!("LLM generation disabled, serving template forms only");
            return Self::template_only();
        }

        match create_backend(settings) {
            Ok(backend) => {
                info!(
                    backend = backend.name(),
                    model = backend.model(),
                    "LLM backend configured"
                );
                let generator = LlmFormGenerator::new(backend, settings.clone());
                Self::new(Some(Arc::new(generator)))
            }
            Err(e) => {
                warn!("Failed to create LLM backend, using templates only: {}", e);
                Self::template_only()
            }
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn has_llm(&self) -> bool {
        self.primary.is_some()
    }

    /// Generate a form for a prompt.
    ///
    /// Only an empty prompt is an error; every generator failure is
    /// absorbed by the template fallback.
    pub async fn handle_generate(&self, prompt: &str) -> Result<Generated, OrchestratorError> {
        if prompt.is_empty() {
            return Err(OrchestratorError::MissingPrompt);
        }

        let started = Instant::now();

        if let Some(primary) = &self.primary {
            info!(generator = primary.name(), "Attempting LLM generation");
            match primary.generate(prompt).await {
                Ok(form) => {
                    info!(
                        title = %form.title,
                        sections = form.sections.len(),
                        "LLM generation successful"
                    );
                    return Ok(self.finish(form, GenerationPath::Llm, started));
                }
                Err(e) => {
                    warn!("LLM generation failed, using template: {}", e);
                    if let Some(metrics) = &self.metrics {
                        metrics.llm_failures.with_label_values(&[e.reason()]).inc();
                    }
                }
            }
        }

        let form = self.fallback.generate(prompt);
        Ok(self.finish(form, GenerationPath::Template, started))
    }

    fn finish(&self, form: Form, path: GenerationPath, started: Instant) -> Generated {
        if let Some(metrics) = &self.metrics {
            metrics
                .generations_total
                .with_label_values(&[path.as_str()])
                .inc();
            metrics
                .generation_duration
                .with_label_values(&[path.as_str()])
                .observe(started.elapsed().as_secs_f64());
        }
        Generated { form, path }
    }
}
