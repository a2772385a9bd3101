//! Form renderers
//!
//! - [`preview`]: widget tree for an interactive preview
//! - [`json`]: pretty-printed JSON export and import
//! - [`html`]: standalone HTML document
//! - [`slug`]: option values and export filenames

pub mod html;
pub mod json;
pub mod preview;
pub mod slug;

pub use html::{export_html, HtmlExporter};
pub use json::{export_json, import_json};
pub use preview::{preview, PreviewField, PreviewForm, PreviewSection, SectionHeader, Widget};
pub use slug::{export_filename, slugify};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Form;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Export target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

/// One choice of a select, radio or checkbox group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    /// Slugified option text
    pub value: String,
    /// Option text as written
    pub label: String,
}

impl Choice {
    pub fn from_option(option: &str) -> Self {
        Self {
            value: slugify(option),
            label: option.to_string(),
        }
    }
}

/// Rendered export ready for download
#[derive(Debug, Clone, Serialize)]
pub struct Export {
    pub filename: String,
    pub content: String,
}

/// Render a form in the given format
pub fn export(form: &Form, format: ExportFormat) -> RenderResult<Export> {
    let content = match format {
        ExportFormat::Json => export_json(form)?,
        ExportFormat::Html => export_html(form)?,
    };
    Ok(Export {
        filename: export_filename(form, format),
        content,
    })
}
