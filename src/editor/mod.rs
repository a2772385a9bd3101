//! Form editing
//!
//! [`FormState`] owns a form and applies structural and attribute edits as
//! pure transitions. [`EditOp`] is the serializable form of those edits used
//! by the HTTP edit endpoint.

mod ids;
mod op;
mod patch;
mod state;

pub use ids::IdGenerator;
pub use op::EditOp;
pub use patch::{options_from_lines, FieldPatch, FormPatch, SectionPatch};
pub use state::{EditNotice, EditOutcome, FormState, Transition};
