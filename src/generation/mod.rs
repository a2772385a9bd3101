//! Form generation
//!
//! Two generators produce a [`crate::domain::Form`] from a natural-language
//! prompt:
//! - [`LlmFormGenerator`] asks a completion backend for JSON and validates it
//! - [`TemplateGenerator`] routes on keywords to a fixed template
//!
//! [`FormOrchestrator`] tries the first and falls back to the second.

pub mod error;
pub mod extract;
pub mod llm_form;
pub mod orchestrator;
pub mod sanitize;
pub mod template;

pub use error::{GenerationError, GenerationResult, OrchestratorError};
pub use llm_form::{LlmFormGenerator, SYSTEM_PROMPT};
pub use orchestrator::{FormOrchestrator, GenerationPath, Generated};
pub use template::{TemplateGenerator, TemplateKind};
