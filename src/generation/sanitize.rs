//! Normalisation of untrusted form JSON
//!
//! Models sometimes emit numbers, booleans or nulls as choice options.
//! [`sanitize_form_value`] coerces every `options` entry to a string so the
//! result deserializes into [`crate::domain::Form`].

use serde_json::Value;

use super::error::{GenerationError, GenerationResult};

/// Check the minimum shape: a non-empty string `title` and an array `sections`
pub fn validate_shape(value: &Value) -> GenerationResult<()> {
    let title_ok = value
        .get("title")
        .and_then(Value::as_str)
        .map(|t| !t.is_empty())
        .unwrap_or(false);
    let sections_ok = value.get("sections").map(Value::is_array).unwrap_or(false);

    if title_ok && sections_ok {
        Ok(())
    } else {
        Err(GenerationError::Validation(
            "Invalid form structure".to_string(),
        ))
    }
}

/// Coerce every field's `options` entries to strings.
///
/// Fields, sections and their order are never touched; running it twice is a
/// no-op the second time.
pub fn sanitize_form_value(mut value: Value) -> Value {
    let sections = value
        .get_mut("sections")
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten();

    for section in sections {
        let fields = section
            .get_mut("fields")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten();

        for field in fields {
            if let Some(options) = field.get_mut("options").and_then(Value::as_array_mut) {
                for option in options.iter_mut() {
                    if !option.is_string() {
                        *option = Value::String(stringify_option(option));
                    }
                }
            }
        }
    }

    value
}

/// Stringify one option value; falsy values (null, false, 0, "") become ""
pub fn stringify_option(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i == 0 {
                    String::new()
                } else {
                    i.to_string()
                }
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f == 0.0 || f.is_nan() {
                    String::new()
                } else if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form_with_options(options: Value) -> Value {
        json!({
            "title": "Poll",
            "sections": [{
                "id": "s1",
                "title": "Vote",
                "fields": [
                    { "id": "choice", "type": "radio", "label": "Pick", "options": options },
                    { "id": "note", "type": "text", "label": "Note" }
                ]
            }]
        })
    }

    #[test]
    fn test_numbers_and_booleans_become_strings() {
        let sanitized = sanitize_form_value(form_with_options(json!([1, 2.5, true, "Four"])));
        assert_eq!(
            sanitized["sections"][0]["fields"][0]["options"],
            json!(["1", "2.5", "true", "Four"])
        );
    }

    #[test]
    fn test_falsy_values_become_empty() {
        let sanitized = sanitize_form_value(form_with_options(json!([null, false, 0, ""])));
        assert_eq!(
            sanitized["sections"][0]["fields"][0]["options"],
            json!(["", "", "", ""])
        );
    }

    #[test]
    fn test_whole_float_prints_without_fraction() {
        assert_eq!(stringify_option(&json!(3.0)), "3");
        assert_eq!(stringify_option(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_nested_options_become_json_text() {
        let sanitized = sanitize_form_value(form_with_options(json!([[], [1, 2], {}, {"k": "v"}])));
        assert_eq!(
            sanitized["sections"][0]["fields"][0]["options"],
            json!(["[]", "[1,2]", "{}", "{\"k\":\"v\"}"])
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_form_value(form_with_options(json!([7, null, "x", false, 1.5])));
        let twice = sanitize_form_value(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_preserves_structure() {
        let input = form_with_options(json!(["a", "b"]));
        assert_eq!(sanitize_form_value(input.clone()), input);
    }

    #[test]
    fn test_non_array_options_left_alone() {
        let input = form_with_options(json!("a,b"));
        assert_eq!(sanitize_form_value(input.clone()), input);
    }

    #[test]
    fn test_validate_shape() {
        assert!(validate_shape(&json!({"title": "T", "sections": []})).is_ok());
        assert!(validate_shape(&json!({"title": "", "sections": []})).is_err());
        assert!(validate_shape(&json!({"title": 5, "sections": []})).is_err());
        assert!(validate_shape(&json!({"title": "T", "sections": {}})).is_err());
        assert!(validate_shape(&json!({"sections": []})).is_err());
    }
}
