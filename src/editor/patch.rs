//! Partial updates for forms, sections and fields
//!
//! Every attribute is optional; `None` leaves the target untouched.

use serde::{Deserialize, Serialize};

use crate::domain::{Field, FieldType, Form, Section, ValidationRules};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldPatch {
    pub fn apply_to(self, field: &mut Field) {
        if let Some(id) = self.id {
            field.id = id;
        }
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(label) = self.label {
            field.label = label;
        }
        if self.placeholder.is_some() {
            field.placeholder = self.placeholder;
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if self.options.is_some() {
            field.options = self.options;
        }
        if self.validation.is_some() {
            field.validation = self.validation;
        }
        if self.description.is_some() {
            field.description = self.description;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SectionPatch {
    pub fn apply_to(self, section: &mut Section) {
        if let Some(id) = self.id {
            section.id = id;
        }
        if let Some(title) = self.title {
            section.title = title;
        }
        if self.description.is_some() {
            section.description = self.description;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormPatch {
    pub fn apply_to(self, form: &mut Form) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if self.description.is_some() {
            form.description = self.description;
        }
    }
}

/// Split editor text into options, one per line, skipping blank lines
pub fn options_from_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
