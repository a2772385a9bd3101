//! Pull a JSON object out of free-form model output
//!
//! Models wrap JSON in markdown fences or prose despite instructions, so the
//! raw text goes through a strip-then-extract pipeline before parsing.

use serde_json::Value;

use super::error::{GenerationError, GenerationResult};

const FENCE: &str = "```";

/// Strip surrounding whitespace, code fences and any leading prose
pub fn clean_response(raw: &str) -> &str {
    let mut content = raw.trim();

    if let Some(rest) = content.strip_prefix(FENCE) {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        content = rest.trim_start();
    }

    if let Some(rest) = content.trim_end().strip_suffix(FENCE) {
        content = rest;
    }

    match content.find('{') {
        Some(start) => content[start..].trim(),
        None => "",
    }
}

/// Greedy span from the first `{` to the last `}`.
///
/// Two separate objects in one response are returned as a single span,
/// which then fails to parse.
pub fn extract_json_object(content: &str) -> GenerationResult<&str> {
    let start = content.find('{');
    let end = content.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(&content[start..=end]),
        _ => Err(GenerationError::Parse(
            "No valid JSON found in response".to_string(),
        )),
    }
}

/// Clean, extract and parse the model output into a JSON value
pub fn parse_response(raw: &str) -> GenerationResult<Value> {
    let span = extract_json_object(clean_response(raw))?;
    serde_json::from_str(span).map_err(|e| GenerationError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json_untouched() {
        let raw = r#"{"title": "A", "sections": []}"#;
        assert_eq!(clean_response(raw), raw);
        assert_eq!(parse_response(raw).unwrap(), json!({"title": "A", "sections": []}));
    }

    #[test]
    fn test_json_fence_stripped() {
        let raw = "```json\n{\"title\": \"A\"}\n```";
        assert_eq!(clean_response(raw), "{\"title\": \"A\"}");
    }

    #[test]
    fn test_fence_tag_is_case_insensitive() {
        let raw = "  ```JSON\n{\"title\": \"A\"}\n```  \n";
        assert_eq!(parse_response(raw).unwrap(), json!({"title": "A"}));
    }

    #[test]
    fn test_untagged_fence_stripped() {
        let raw = "```\n{\"title\": \"A\"}\n```";
        assert_eq!(parse_response(raw).unwrap(), json!({"title": "A"}));
    }

    #[test]
    fn test_leading_and_trailing_prose() {
        let raw = "Sure! Here is your form:\n{\"title\": \"A\"}\nLet me know if you need changes.";
        assert_eq!(parse_response(raw).unwrap(), json!({"title": "A"}));
    }

    #[test]
    fn test_no_braces_is_parse_error() {
        let err = parse_response("I cannot help with that request.").unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
        assert_eq!(clean_response("no json here"), "");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_response("{\"title\": \"A\",, }").unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_greedy_span_covers_two_objects() {
        let content = "{\"a\": 1} and {\"b\": 2}";
        assert_eq!(extract_json_object(content).unwrap(), content);
        assert!(parse_response(content).is_err());
    }

    #[test]
    fn test_nested_braces_kept_whole() {
        let raw = "```json\n{\"sections\": [{\"fields\": [{\"id\": \"x\"}]}]}\n```";
        assert_eq!(
            parse_response(raw).unwrap(),
            json!({"sections": [{"fields": [{"id": "x"}]}]})
        );
    }
}
