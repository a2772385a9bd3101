//! Form definition types
//!
//! A [`Form`] is an ordered list of [`Section`]s, each holding an ordered list
//! of [`Field`]s. The JSON shape (camelCase keys, `type` for the field kind)
//! is the wire contract shared by the generators, the editor and the
//! exporters.

use serde::{Deserialize, Serialize};

/// Input control kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    Password,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
}

impl FieldType {
    /// Every field type, in editor display order
    pub const ALL: [FieldType; 11] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Tel,
        FieldType::Number,
        FieldType::Password,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
        FieldType::File,
    ];

    /// Wire name, also used as the HTML `type` attribute for plain inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Number => "number",
            FieldType::Password => "password",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::File => "file",
        }
    }

    /// Human-readable name shown in the editor's type picker
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Email => "Email",
            FieldType::Tel => "Phone",
            FieldType::Number => "Number",
            FieldType::Password => "Password",
            FieldType::Textarea => "Textarea",
            FieldType::Select => "Select",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio",
            FieldType::Date => "Date",
            FieldType::File => "File Upload",
        }
    }

    /// Whether the field is driven by its `options` list
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Checkbox | FieldType::Radio)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional constraints attached to a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ValidationRules {
    pub fn length(min: u64, max: u64) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..Default::default()
        }
    }

    pub fn max_length(max: u64) -> Self {
        Self {
            max_length: Some(max),
            ..Default::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One input control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Choices for select, radio and checkbox fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Field {
    /// Create a bare field with no placeholder, options or validation
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            required: false,
            options: None,
            validation: None,
            description: None,
        }
    }

    /// Options as a slice, empty when absent
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// Named, ordered group of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }
}

/// Root form definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

impl Form {
    /// Total number of fields across all sections
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Iterate over every field in section order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_wire_names() {
        for field_type in FieldType::ALL {
            let encoded = serde_json::to_value(field_type).unwrap();
            assert_eq!(encoded, json!(field_type.as_str()));
        }
        assert!(serde_json::from_value::<FieldType>(json!("slider")).is_err());
    }

    #[test]
    fn test_field_uses_camel_case_validation_keys() {
        let field: Field = serde_json::from_value(json!({
            "id": "bio",
            "type": "textarea",
            "label": "Bio",
            "required": true,
            "validation": { "minLength": 10, "maxLength": 200 }
        }))
        .unwrap();

        assert_eq!(field.field_type, FieldType::Textarea);
        assert_eq!(field.validation, Some(ValidationRules::length(10, 200)));

        let encoded = serde_json::to_value(&field).unwrap();
        assert_eq!(encoded["validation"]["minLength"], json!(10));
        assert!(encoded.get("placeholder").is_none());
        assert!(encoded.get("options").is_none());
    }

    #[test]
    fn test_required_defaults_to_false() {
        let field: Field = serde_json::from_value(json!({
            "id": "nickname",
            "type": "text",
            "label": "Nickname"
        }))
        .unwrap();
        assert!(!field.required);
        assert!(field.options().is_empty());
    }

    #[test]
    fn test_empty_options_and_validation_survive() {
        let value = json!({
            "id": "resume",
            "type": "file",
            "label": "Upload Resume",
            "placeholder": "",
            "required": true,
            "options": [],
            "validation": {}
        });
        let field: Field = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&field).unwrap(), value);
    }

    #[test]
    fn test_choice_types() {
        let choices: Vec<_> = FieldType::ALL.iter().filter(|t| t.is_choice()).collect();
        assert_eq!(choices, [&FieldType::Select, &FieldType::Checkbox, &FieldType::Radio]);
        assert_eq!(FieldType::Tel.display_name(), "Phone");
        assert_eq!(FieldType::File.display_name(), "File Upload");
    }

    #[test]
    fn test_field_count() {
        let mut first = Section::new("a", "A");
        first.fields.push(Field::new("x", FieldType::Text, "X"));
        first.fields.push(Field::new("y", FieldType::Email, "Y"));
        let mut second = Section::new("b", "B");
        second.fields.push(Field::new("z", FieldType::Date, "Z"));

        let form = Form {
            title: "T".to_string(),
            description: None,
            sections: vec![first, second],
        };
        assert_eq!(form.field_count(), 3);
        assert_eq!(
            form.fields().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            ["x", "y", "z"]
        );
    }
}
