use super::RenderResult;
use crate::domain::Form;

/// Pretty-printed (2-space) JSON document
pub fn export_json(form: &Form) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(form)?)
}

/// Parse a previously exported document
pub fn import_json(content: &str) -> RenderResult<Form> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::TemplateGenerator;

    #[test]
    fn test_export_is_pretty_printed() {
        let form = TemplateGenerator::new().generate("contact");
        let content = export_json(&form).unwrap();

        assert!(content.starts_with("{\n  \"title\": \"Contact Form\""));
        assert!(content.contains("\n    {\n      \"id\": \"contact-section\""));
    }

    #[test]
    fn test_export_import_export_is_fixed_point() {
        for prompt in ["job application", "contact", "feedback", "pizza"] {
            let form = TemplateGenerator::new().generate(prompt);
            let first = export_json(&form).unwrap();
            let imported = import_json(&first).unwrap();
            assert_eq!(imported, form);
            assert_eq!(export_json(&imported).unwrap(), first);
        }
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(import_json("not json").is_err());
        assert!(import_json("{\"title\": \"No sections\"}").is_err());
    }
}
