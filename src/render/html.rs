//! Standalone HTML export
//!
//! The document is rendered with Tera under autoescaping, so titles, labels,
//! options and descriptions can never inject markup.

use serde::Serialize;
use tera::{Context, Tera};

use super::preview::{select_placeholder, toggle_label};
use super::{Choice, RenderResult};
use crate::domain::{Field, FieldType, Form};

const TEMPLATE_NAME: &str = "form.html";

const FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; }
    .field-group { margin-bottom: 20px; }
    label { display: block; margin-bottom: 5px; font-weight: bold; }
    input, textarea, select { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; }
    textarea { min-height: 100px; }
    fieldset { border: 1px solid #ddd; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
    legend { font-weight: bold; padding: 0 10px; }
    button { background: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }
    small { color: #666; font-size: 0.9em; }
  </style>
</head>
<body>
  <form>
    <h1>{{ title }}</h1>
{%- if description %}
    <p>{{ description }}</p>
{%- endif %}
{% for section in sections %}
  <fieldset>
    <legend>{{ section.title }}</legend>
{%- if section.description %}
    <p>{{ section.description }}</p>
{%- endif %}
{%- for field in section.fields %}
  <div class="field-group">
    <label for="{{ field.id }}">{{ field.label }}{% if field.required %} *{% endif %}</label>
{%- if field.kind == "textarea" %}
    <textarea id="{{ field.id }}" name="{{ field.id }}"{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% if field.required %} required{% endif %}></textarea>
{%- elif field.kind == "select" %}
    <select id="{{ field.id }}" name="{{ field.id }}"{% if field.required %} required{% endif %}>
      <option value="">{{ field.prompt }}</option>
{%- for choice in field.choices %}
      <option value="{{ choice.value }}">{{ choice.label }}</option>
{%- endfor %}
    </select>
{%- elif field.kind == "checkbox_group" %}
{%- for choice in field.choices %}
    <label><input type="checkbox" name="{{ field.id }}[]" value="{{ choice.value }}"> {{ choice.label }}</label>
{%- endfor %}
{%- elif field.kind == "checkbox" %}
    <label><input type="checkbox" id="{{ field.id }}" name="{{ field.id }}"> {{ field.prompt }}</label>
{%- elif field.kind == "radio" %}
{%- for choice in field.choices %}
    <label><input type="radio" name="{{ field.id }}" value="{{ choice.value }}"> {{ choice.label }}</label>
{%- endfor %}
{%- else %}
    <input type="{{ field.kind }}" id="{{ field.id }}" name="{{ field.id }}"{% if field.placeholder %} placeholder="{{ field.placeholder }}"{% endif %}{% if field.required %} required{% endif %}>
{%- endif %}
{%- if field.description %}
    <small>{{ field.description }}</small>
{%- endif %}
  </div>
{%- endfor %}
  </fieldset>
{% endfor %}
    <button type="submit">Submit</button>
  </form>
</body>
</html>
"#;

/// Flattened field data the template needs
#[derive(Debug, Serialize)]
struct FieldView<'a> {
    id: &'a str,
    label: &'a str,
    required: bool,
    /// `textarea`, `select`, `checkbox_group`, `checkbox`, `radio`, or the
    /// input type for everything else
    kind: &'static str,
    placeholder: &'a str,
    /// Select prompt or single-checkbox label
    prompt: String,
    choices: Vec<Choice>,
    description: &'a str,
}

impl<'a> FieldView<'a> {
    fn new(field: &'a Field) -> Self {
        let choices: Vec<Choice> = field
            .options()
            .iter()
            .map(|o| Choice::from_option(o))
            .collect();

        let (kind, prompt) = match field.field_type {
            FieldType::Textarea => ("textarea", String::new()),
            FieldType::Select => ("select", select_placeholder(field)),
            FieldType::Checkbox if choices.len() > 1 => ("checkbox_group", String::new()),
            FieldType::Checkbox => ("checkbox", toggle_label(field)),
            FieldType::Radio => ("radio", String::new()),
            other => (other.as_str(), String::new()),
        };

        Self {
            id: &field.id,
            label: &field.label,
            required: field.required,
            kind,
            placeholder: field.placeholder.as_deref().unwrap_or(""),
            prompt,
            choices,
            description: field.description.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Serialize)]
struct SectionView<'a> {
    title: &'a str,
    description: &'a str,
    fields: Vec<FieldView<'a>>,
}

#[derive(Debug, Serialize)]
struct FormView<'a> {
    title: &'a str,
    description: &'a str,
    sections: Vec<SectionView<'a>>,
}

impl<'a> FormView<'a> {
    fn new(form: &'a Form) -> Self {
        Self {
            title: &form.title,
            description: form.description.as_deref().unwrap_or(""),
            sections: form
                .sections
                .iter()
                .map(|section| SectionView {
                    title: &section.title,
                    description: section.description.as_deref().unwrap_or(""),
                    fields: section.fields.iter().map(FieldView::new).collect(),
                })
                .collect(),
        }
    }
}

/// HTML exporter holding the compiled template
pub struct HtmlExporter {
    tera: Tera,
}

impl HtmlExporter {
    pub fn new() -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, FORM_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, form: &Form) -> RenderResult<String> {
        let context = Context::from_serialize(FormView::new(form))?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Render a form as a standalone HTML document
pub fn export_html(form: &Form) -> RenderResult<String> {
    HtmlExporter::new()?.render(form)
}
