use async_trait::async_trait;

pub mod form;

pub use form::{Field, FieldType, Form, Section, ValidationRules};

use crate::generation::GenerationResult;

/// Anything that turns a natural-language prompt into a [`Form`]
#[async_trait]
pub trait FormGeneratorPort: Send + Sync {
    /// Short name used in logs and metrics
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> GenerationResult<Form>;
}
