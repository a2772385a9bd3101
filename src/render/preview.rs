//! Preview projection
//!
//! Maps each field to the widget a preview should draw. Nothing here
//! submits or validates; the submit button is inert.

use serde::Serialize;

use super::Choice;
use crate::domain::{Field, FieldType, Form, Section};

pub const SUBMIT_LABEL: &str = "Submit Form";
const TOGGLE_FALLBACK: &str = "I agree";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Input { input_type: String },
    TextArea,
    Select { placeholder: String, choices: Vec<Choice> },
    RadioGroup { choices: Vec<Choice> },
    CheckboxGroup { choices: Vec<Choice> },
    Toggle { label: String },
    FilePicker,
}

impl Widget {
    pub fn for_field(field: &Field) -> Self {
        let choices = || -> Vec<Choice> {
            field.options().iter().map(|o| Choice::from_option(o)).collect()
        };

        match field.field_type {
            FieldType::Text
            | FieldType::Email
            | FieldType::Tel
            | FieldType::Number
            | FieldType::Password
            | FieldType::Date => Widget::Input {
                input_type: field.field_type.as_str().to_string(),
            },
            FieldType::Textarea => Widget::TextArea,
            FieldType::Select => Widget::Select {
                placeholder: select_placeholder(field),
                choices: choices(),
            },
            FieldType::Radio => Widget::RadioGroup { choices: choices() },
            FieldType::Checkbox if field.options().len() > 1 => {
                Widget::CheckboxGroup { choices: choices() }
            }
            FieldType::Checkbox => Widget::Toggle {
                label: toggle_label(field),
            },
            FieldType::File => Widget::FilePicker,
        }
    }
}

/// Select prompt text: the placeholder, or `Select <label lowercased>`
pub fn select_placeholder(field: &Field) -> String {
    match field.placeholder.as_deref() {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => format!("Select {}", field.label.to_lowercase()),
    }
}

/// Label of a single checkbox: its first option, or "I agree"
pub fn toggle_label(field: &Field) -> String {
    field
        .options()
        .first()
        .filter(|o| !o.is_empty())
        .cloned()
        .unwrap_or_else(|| TOGGLE_FALLBACK.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewField {
    /// `<sectionIndex>-<fieldIndex>`
    pub control_id: String,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeader {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Divider drawn above every section after the first
    pub separator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSection {
    pub id: String,
    /// Only present when the form has more than one section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<SectionHeader>,
    pub fields: Vec<PreviewField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewForm {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<PreviewSection>,
    pub submit_label: String,
}

/// Project a form into its preview tree
pub fn preview(form: &Form) -> PreviewForm {
    let show_headers = form.sections.len() > 1;

    PreviewForm {
        title: form.title.clone(),
        description: non_empty(&form.description),
        sections: form
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| preview_section(index, section, show_headers))
            .collect(),
        submit_label: SUBMIT_LABEL.to_string(),
    }
}

fn preview_section(index: usize, section: &Section, show_header: bool) -> PreviewSection {
    let header = show_header.then(|| SectionHeader {
        title: section.title.clone(),
        description: non_empty(&section.description),
        separator: index > 0,
    });

    PreviewSection {
        id: section.id.clone(),
        header,
        fields: section
            .fields
            .iter()
            .enumerate()
            .map(|(field_index, field)| PreviewField {
                control_id: format!("{}-{}", index, field_index),
                label: field.label.clone(),
                required: field.required,
                placeholder: non_empty(&field.placeholder),
                description: non_empty(&field.description),
                widget: Widget::for_field(field),
            })
            .collect(),
    }
}

fn non_empty(text: &Option<String>) -> Option<String> {
    text.as_ref().filter(|t| !t.is_empty()).cloned()
}
