//! Draft edits as values.
//!
//! Every mutation the form editor performs is expressed as a [`FormEvent`]
//! and folded into the draft by [`apply`]. The reducer is deterministic
//! and synchronous, does no I/O, and knows nothing about rendering, so the
//! same event stream always produces the same draft.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::FormDraft;
use crate::question::{OptionField, QuestionPatch, QuestionType};
use crate::types::{ImageRef, QuestionId};

/// A single edit to a form draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormEvent {
    SetTitle(String),
    SetDescription(String),
    SetHeaderImage(Option<ImageRef>),
    AddQuestion(QuestionType),
    UpdateQuestion {
        id: QuestionId,
        patch: QuestionPatch,
    },
    AppendOption {
        id: QuestionId,
        field: OptionField,
        value: String,
    },
    EditOption {
        id: QuestionId,
        field: OptionField,
        index: usize,
        value: String,
    },
    RemoveQuestion {
        id: QuestionId,
    },
    /// Return the draft to its initial empty state.
    Reset,
}

/// Fold one event into the draft.
///
/// Events addressing an id no question carries are silent no-ops, as are
/// sequence operations aimed at a type that does not have that sequence.
/// The only failure is [`FormEvent::EditOption`] with an index past the end
/// of its sequence; on failure the draft is left exactly as it was.
pub fn apply(draft: &mut FormDraft, event: FormEvent) -> Result<(), CoreError> {
    match event {
        FormEvent::SetTitle(title) => draft.set_title(title),
        FormEvent::SetDescription(description) => draft.set_description(description),
        FormEvent::SetHeaderImage(image) => draft.set_header_image(image),
        FormEvent::AddQuestion(question_type) => {
            draft.add_question(question_type);
        }
        FormEvent::UpdateQuestion { id, patch } => {
            draft.update_question(id, patch);
        }
        FormEvent::AppendOption { id, field, value } => {
            draft.append_option(id, field, value);
        }
        FormEvent::EditOption {
            id,
            field,
            index,
            value,
        } => {
            draft.edit_option(id, field, index, value)?;
        }
        FormEvent::RemoveQuestion { id } => {
            draft.remove_question(id);
        }
        FormEvent::Reset => draft.reset(),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
