//! Fresh ids for editor-created fields and sections

use chrono::Utc;

use crate::domain::Form;

/// Wall-clock millisecond ids that never repeat or go backwards.
///
/// Two calls in the same millisecond, or a clock step backwards, get the
/// previous value plus one.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that continues past every `field-<n>` and `section-<n>`
    /// id already in the form
    pub fn seeded_from(form: &Form) -> Self {
        let section_ids = form.sections.iter().map(|s| s.id.as_str());
        let field_ids = form
            .sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.id.as_str()));

        let last = section_ids
            .filter_map(|id| id.strip_prefix("section-"))
            .chain(field_ids.filter_map(|id| id.strip_prefix("field-")))
            .filter_map(|suffix| suffix.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self { last }
    }

    /// Next raw counter value
    pub fn next_value(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }

    /// Next id of the form `<prefix>-<n>`
    pub fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_value())
    }
}
