//! Owned form state with pure transitions
//!
//! Every operation consumes a [`FormState`] and returns a [`Transition`]
//! holding the next state, so no two versions of a form ever share storage.

use serde::Serialize;

use super::ids::IdGenerator;
use super::patch::{FieldPatch, FormPatch, SectionPatch};
use crate::domain::{Field, FieldType, Form, Section};

/// User-facing message attached to an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditNotice {
    FieldAdded,
    FieldRemoved,
    SectionAdded,
    SectionRemoved,
    LastSection,
}

impl EditNotice {
    pub fn message(&self) -> &'static str {
        match self {
            EditNotice::FieldAdded => "Field added successfully",
            EditNotice::FieldRemoved => "Field removed successfully",
            EditNotice::SectionAdded => "Section added successfully",
            EditNotice::SectionRemoved => "Section removed successfully",
            EditNotice::LastSection => "Cannot remove the last section",
        }
    }
}

impl std::fmt::Display for EditNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// What an operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The form changed; structural edits carry a notice
    Applied(Option<EditNotice>),
    /// Index out of range, nothing to do
    NoOp,
    /// Refused; the form is unchanged
    Rejected(EditNotice),
}

impl EditOutcome {
    pub fn notice(&self) -> Option<EditNotice> {
        match self {
            EditOutcome::Applied(notice) => *notice,
            EditOutcome::NoOp => None,
            EditOutcome::Rejected(notice) => Some(*notice),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected(_))
    }

    /// Label for metrics and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EditOutcome::Applied(_) => "applied",
            EditOutcome::NoOp => "noop",
            EditOutcome::Rejected(_) => "rejected",
        }
    }
}

/// Result of one edit
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: FormState,
    pub outcome: EditOutcome,
}

impl Transition {
    fn applied(state: FormState, notice: Option<EditNotice>) -> Self {
        Self {
            state,
            outcome: EditOutcome::Applied(notice),
        }
    }

    fn noop(state: FormState) -> Self {
        Self {
            state,
            outcome: EditOutcome::NoOp,
        }
    }

    pub fn notice(&self) -> Option<EditNotice> {
        self.outcome.notice()
    }
}

/// The form being edited plus its id source
#[derive(Debug, Clone)]
pub struct FormState {
    form: Form,
    ids: IdGenerator,
}

impl FormState {
    /// Wrap a form; fresh ids continue past any editor ids already in it
    pub fn new(form: Form) -> Self {
        let ids = IdGenerator::seeded_from(&form);
        Self { form, ids }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }

    /// Append a blank text field to a section
    pub fn add_field(mut self, section: usize) -> Transition {
        if section >= self.form.sections.len() {
            return Transition::noop(self);
        }
        let field = Field::new(self.ids.next_id("field"), FieldType::Text, "New Field");
        self.form.sections[section].fields.push(field);
        Transition::applied(self, Some(EditNotice::FieldAdded))
    }

    pub fn remove_field(mut self, section: usize, field: usize) -> Transition {
        let in_range = self
            .form
            .sections
            .get(section)
            .is_some_and(|s| field < s.fields.len());
        if !in_range {
            return Transition::noop(self);
        }
        self.form.sections[section].fields.remove(field);
        Transition::applied(self, Some(EditNotice::FieldRemoved))
    }

    /// Append an empty section
    pub fn add_section(mut self) -> Transition {
        let section = Section::new(self.ids.next_id("section"), "New Section");
        self.form.sections.push(section);
        Transition::applied(self, Some(EditNotice::SectionAdded))
    }

    /// Remove a section, refusing to remove the only one
    pub fn remove_section(mut self, section: usize) -> Transition {
        if self.form.sections.len() == 1 {
            return Transition {
                state: self,
                outcome: EditOutcome::Rejected(EditNotice::LastSection),
            };
        }
        if section >= self.form.sections.len() {
            return Transition::noop(self);
        }
        self.form.sections.remove(section);
        Transition::applied(self, Some(EditNotice::SectionRemoved))
    }

    pub fn update_field(mut self, section: usize, field: usize, patch: FieldPatch) -> Transition {
        let target = self
            .form
            .sections
            .get_mut(section)
            .and_then(|s| s.fields.get_mut(field));
        match target {
            Some(target) => {
                patch.apply_to(target);
                Transition::applied(self, None)
            }
            None => Transition::noop(self),
        }
    }

    pub fn update_section(mut self, section: usize, patch: SectionPatch) -> Transition {
        match self.form.sections.get_mut(section) {
            Some(target) => {
                patch.apply_to(target);
                Transition::applied(self, None)
            }
            None => Transition::noop(self),
        }
    }

    pub fn update_form(mut self, patch: FormPatch) -> Transition {
        patch.apply_to(&mut self.form);
        Transition::applied(self, None)
    }
}
