//! Keyword-routed template forms
//!
//! The template generator is total: every prompt maps to one of four
//! hand-written forms. It serves as the fallback whenever the LLM path
//! fails, and as the only generator when the LLM is disabled.

use async_trait::async_trait;

use super::error::GenerationResult;
use crate::domain::{Field, FieldType, Form, FormGeneratorPort, Section, ValidationRules};

const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";
const PHONE_PATTERN: &str = r"^[+]?[1-9]?[0-9]{7,15}$";

/// Which template a prompt routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    JobApplication,
    Contact,
    FeedbackSurvey,
    Generic,
}

/// Ordered routing table. The first entry with any keyword contained in the
/// lowercased prompt wins; no match means [`TemplateKind::Generic`].
pub const ROUTES: &[(&[&str], TemplateKind)] = &[
    (&["job", "application"], TemplateKind::JobApplication),
    (&["contact"], TemplateKind::Contact),
    (&["survey", "feedback"], TemplateKind::FeedbackSurvey),
];

/// Deterministic fallback generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Route a prompt to a template kind (case-insensitive substring match)
    pub fn classify(prompt: &str) -> TemplateKind {
        let lowered = prompt.to_lowercase();
        ROUTES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, kind)| *kind)
            .unwrap_or(TemplateKind::Generic)
    }

    /// Build the form for a prompt. Never fails.
    pub fn generate(&self, prompt: &str) -> Form {
        let kind = Self::classify(prompt);
        tracing::debug!(?kind, "Using template form");
        kind.build()
    }
}

#[async_trait]
impl FormGeneratorPort for TemplateGenerator {
    fn name(&self) -> &str {
        "template"
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<Form> {
        Ok(TemplateGenerator::generate(self, prompt))
    }
}

impl TemplateKind {
    /// Materialize the template
    pub fn build(self) -> Form {
        match self {
            TemplateKind::JobApplication => job_application(),
            TemplateKind::Contact => contact(),
            TemplateKind::FeedbackSurvey => feedback_survey(),
            TemplateKind::Generic => generic(),
        }
    }
}

/// Template fields always carry explicit `options` and `validation`, even
/// when empty, matching what the generated forms look like.
struct FieldSpec<'a> {
    id: &'a str,
    field_type: FieldType,
    label: &'a str,
    placeholder: &'a str,
    required: bool,
    options: &'a [&'a str],
    validation: ValidationRules,
    description: &'a str,
}

impl From<FieldSpec<'_>> for Field {
    fn from(spec: FieldSpec<'_>) -> Self {
        Field {
            id: spec.id.to_string(),
            field_type: spec.field_type,
            label: spec.label.to_string(),
            placeholder: Some(spec.placeholder.to_string()),
            required: spec.required,
            options: Some(spec.options.iter().map(|o| o.to_string()).collect()),
            validation: Some(spec.validation),
            description: Some(spec.description.to_string()),
        }
    }
}

fn section(id: &str, title: &str, description: &str, fields: Vec<FieldSpec<'_>>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        fields: fields.into_iter().map(Field::from).collect(),
    }
}

fn form(title: &str, description: &str, sections: Vec<Section>) -> Form {
    Form {
        title: title.to_string(),
        description: Some(description.to_string()),
        sections,
    }
}

fn job_application() -> Form {
    form(
        "Job Application Form",
        "Apply for a position with our company",
        vec![
            section(
                "personal-info",
                "Personal Information",
                "Please provide your basic information",
                vec![
                    FieldSpec {
                        id: "name",
                        field_type: FieldType::Text,
                        label: "Full Name",
                        placeholder: "Enter your full name",
                        required: true,
                        options: &[],
                        validation: ValidationRules::length(2, 100),
                        description: "Your legal full name",
                    },
                    FieldSpec {
                        id: "email",
                        field_type: FieldType::Email,
                        label: "Email Address",
                        placeholder: "your.email@example.com",
                        required: true,
                        options: &[],
                        validation: ValidationRules::pattern(EMAIL_PATTERN),
                        description: "A valid email address",
                    },
                    FieldSpec {
                        id: "phone",
                        field_type: FieldType::Tel,
                        label: "Phone Number",
                        placeholder: "+1 (555) 123-4567",
                        required: true,
                        options: &[],
                        validation: ValidationRules::pattern(PHONE_PATTERN),
                        description: "Your contact phone number",
                    },
                ],
            ),
            section(
                "experience",
                "Work Experience",
                "Tell us about your professional background",
                vec![
                    FieldSpec {
                        id: "resume",
                        field_type: FieldType::File,
                        label: "Upload Resume",
                        placeholder: "",
                        required: true,
                        options: &[],
                        validation: ValidationRules::default(),
                        description: "Upload your resume (PDF, DOC, or DOCX)",
                    },
                    FieldSpec {
                        id: "experience",
                        field_type: FieldType::Textarea,
                        label: "Work Experience",
                        placeholder: "Describe your relevant work experience...",
                        required: true,
                        options: &[],
                        validation: ValidationRules::length(50, 1000),
                        description: "Briefly describe your work experience",
                    },
                ],
            ),
        ],
    )
}

fn contact() -> Form {
    form(
        "Contact Form",
        "Get in touch with us",
        vec![section(
            "contact-section",
            "Contact Information",
            "How can we help you?",
            vec![
                FieldSpec {
                    id: "name",
                    field_type: FieldType::Text,
                    label: "Full Name",
                    placeholder: "Enter your full name",
                    required: true,
                    options: &[],
                    validation: ValidationRules::length(2, 50),
                    description: "Your first and last name",
                },
                FieldSpec {
                    id: "email",
                    field_type: FieldType::Email,
                    label: "Email Address",
                    placeholder: "Enter your email",
                    required: true,
                    options: &[],
                    validation: ValidationRules::pattern(EMAIL_PATTERN),
                    description: "A valid email address",
                },
                FieldSpec {
                    id: "subject",
                    field_type: FieldType::Select,
                    label: "Subject",
                    placeholder: "Select a subject",
                    required: true,
                    options: &["General Inquiry", "Support", "Sales", "Feedback"],
                    validation: ValidationRules::default(),
                    description: "What is this about?",
                },
                FieldSpec {
                    id: "message",
                    field_type: FieldType::Textarea,
                    label: "Message",
                    placeholder: "Enter your message",
                    required: true,
                    options: &[],
                    validation: ValidationRules::length(10, 500),
                    description: "Your message or inquiry",
                },
            ],
        )],
    )
}

fn feedback_survey() -> Form {
    form(
        "Customer Feedback Survey",
        "Help us improve our service",
        vec![section(
            "feedback-section",
            "Your Feedback",
            "We value your opinion",
            vec![
                FieldSpec {
                    id: "name",
                    field_type: FieldType::Text,
                    label: "Name (Optional)",
                    placeholder: "Your name",
                    required: false,
                    options: &[],
                    validation: ValidationRules::max_length(50),
                    description: "Optional: Tell us your name",
                },
                FieldSpec {
                    id: "rating",
                    field_type: FieldType::Radio,
                    label: "Overall Rating",
                    placeholder: "",
                    required: true,
                    options: &["Excellent", "Good", "Fair", "Poor"],
                    validation: ValidationRules::default(),
                    description: "How would you rate our service?",
                },
                FieldSpec {
                    id: "feedback",
                    field_type: FieldType::Textarea,
                    label: "Additional Comments",
                    placeholder: "Tell us more about your experience...",
                    required: false,
                    options: &[],
                    validation: ValidationRules::max_length(1000),
                    description: "Any additional feedback you'd like to share",
                },
            ],
        )],
    )
}

fn generic() -> Form {
    form(
        "Contact Form",
        "Please fill out this form",
        vec![section(
            "default-section",
            "Information",
            "Please provide your details",
            vec![
                FieldSpec {
                    id: "name",
                    field_type: FieldType::Text,
                    label: "Name",
                    placeholder: "Enter your name",
                    required: true,
                    options: &[],
                    validation: ValidationRules::length(2, 50),
                    description: "Your name",
                },
                FieldSpec {
                    id: "email",
                    field_type: FieldType::Email,
                    label: "Email",
                    placeholder: "Enter your email",
                    required: true,
                    options: &[],
                    validation: ValidationRules::pattern(EMAIL_PATTERN),
                    description: "Your email address",
                },
            ],
        )],
    )
}
