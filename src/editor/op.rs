//! Serializable edit operations

use serde::{Deserialize, Serialize};

use super::patch::{FieldPatch, FormPatch, SectionPatch};
use super::state::{FormState, Transition};

/// One editor action, as sent over the wire
///
/// ```json
/// {"type": "update_field", "section": 0, "field": 2, "patch": {"label": "Email"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditOp {
    AddField {
        section: usize,
    },
    RemoveField {
        section: usize,
        field: usize,
    },
    AddSection,
    RemoveSection {
        section: usize,
    },
    UpdateField {
        section: usize,
        field: usize,
        patch: FieldPatch,
    },
    UpdateSection {
        section: usize,
        patch: SectionPatch,
    },
    UpdateForm {
        patch: FormPatch,
    },
}

impl EditOp {
    pub fn name(&self) -> &'static str {
        match self {
            EditOp::AddField { .. } => "add_field",
            EditOp::RemoveField { .. } => "remove_field",
            EditOp::AddSection => "add_section",
            EditOp::RemoveSection { .. } => "remove_section",
            EditOp::UpdateField { .. } => "update_field",
            EditOp::UpdateSection { .. } => "update_section",
            EditOp::UpdateForm { .. } => "update_form",
        }
    }

    /// Run the operation against a state
    pub fn apply(self, state: FormState) -> Transition {
        match self {
            EditOp::AddField { section } => state.add_field(section),
            EditOp::RemoveField { section, field } => state.remove_field(section, field),
            EditOp::AddSection => state.add_section(),
            EditOp::RemoveSection { section } => state.remove_section(section),
            EditOp::UpdateField {
                section,
                field,
                patch,
            } => state.update_field(section, field, patch),
            EditOp::UpdateSection { section, patch } => state.update_section(section, patch),
            EditOp::UpdateForm { patch } => state.update_form(patch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditNotice;
    use crate::generation::TemplateGenerator;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let op: EditOp = serde_json::from_value(json!({
            "type": "update_field",
            "section": 0,
            "field": 1,
            "patch": {"label": "Work Email", "required": false}
        }))
        .unwrap();

        assert_eq!(op.name(), "update_field");
        assert_eq!(
            op,
            EditOp::UpdateField {
                section: 0,
                field: 1,
                patch: FieldPatch {
                    label: Some("Work Email".to_string()),
                    required: Some(false),
                    ..Default::default()
                },
            }
        );

        let add: EditOp = serde_json::from_value(json!({"type": "add_section"})).unwrap();
        assert_eq!(add, EditOp::AddSection);
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result = serde_json::from_value::<EditOp>(json!({"type": "reorder"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_dispatches() {
        let state = FormState::new(TemplateGenerator::new().generate("contact"));
        let t = EditOp::RemoveSection { section: 0 }.apply(state);
        assert_eq!(t.notice(), Some(EditNotice::LastSection));

        let t = EditOp::AddField { section: 0 }.apply(t.state);
        assert_eq!(t.notice(), Some(EditNotice::FieldAdded));
        assert_eq!(t.state.form().sections[0].fields.len(), 5);
    }
}
