use super::ExportFormat;
use crate::domain::Form;

/// Lowercase and replace each run of whitespace with a single `-`.
///
/// Punctuation is kept as-is: `"Job Application (2024)"` becomes
/// `"job-application-(2024)"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }

    slug
}

/// Download filename for an export, e.g. `contact-form.html`
pub fn export_filename(form: &Form, format: ExportFormat) -> String {
    format!("{}.{}", slugify(&form.title), format.extension())
}
