//! Question records and the per-type field model.
//!
//! A form is an ordered collection of heterogeneous questions. Every
//! question carries the fields all types share (title, description,
//! required flag, attached image) plus a [`QuestionKind`] payload exposing
//! only the sequence fields its type actually has, so a mutation aimed at
//! a field another type owns has nowhere to land.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{ImageRef, QuestionId};

// ---------------------------------------------------------------------------
// Question type discriminant
// ---------------------------------------------------------------------------

/// The type tag a question is created with.
///
/// Serializes as the wire `type` field: `"Text"`, `"Grid"`, `"CheckBox"`.
/// The set is closed; parsing any other string fails at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Text,
    Grid,
    CheckBox,
}

// ---------------------------------------------------------------------------
// Per-type data
// ---------------------------------------------------------------------------

/// Type-specific fields of a question.
///
/// The variant is fixed at creation; changing a question's type means
/// removing it and adding a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Free-text answer. No additional fields.
    Text,
    /// Grid of rows and columns with a shared option list.
    Grid {
        options: Vec<String>,
        rows: Vec<String>,
        columns: Vec<String>,
    },
    /// Multiple-choice checkboxes.
    CheckBox { boxes: Vec<String> },
}

impl QuestionKind {
    /// Initial per-type data for a freshly created question.
    ///
    /// Grid options and checkbox entries seed with a single empty slot
    /// (the editor fills slot 0 in place); grid rows and columns start
    /// empty and only ever grow by appending.
    pub fn seeded(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Text => Self::Text,
            QuestionType::Grid => Self::Grid {
                options: vec![String::new()],
                rows: Vec::new(),
                columns: Vec::new(),
            },
            QuestionType::CheckBox => Self::CheckBox {
                boxes: vec![String::new()],
            },
        }
    }

    /// The discriminant this payload belongs to.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Text => QuestionType::Text,
            Self::Grid { .. } => QuestionType::Grid,
            Self::CheckBox { .. } => QuestionType::CheckBox,
        }
    }
}

// ---------------------------------------------------------------------------
// Mutation selectors
// ---------------------------------------------------------------------------

/// Selects one of the appendable sequence fields on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionField {
    Options,
    GridRows,
    GridColumns,
    CheckBoxes,
}

impl OptionField {
    /// Wire name of the field, as it appears in the submission payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::GridRows => "gridRows",
            Self::GridColumns => "gridColumns",
            Self::CheckBoxes => "checkBoxes",
        }
    }
}

/// A single-field update applied to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionPatch {
    Title(String),
    Description(String),
    Required(bool),
    Image(Option<ImageRef>),
    /// Replace an entire sequence field wholesale.
    Sequence {
        field: OptionField,
        values: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Question record
// ---------------------------------------------------------------------------

/// A single question within a form draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the owning draft, stable for the record's lifetime.
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub required: bool,
    /// Optional image attached to this question.
    pub image: Option<ImageRef>,
    /// Type-specific fields.
    pub kind: QuestionKind,
}

impl Question {
    /// Create a question of the given type with default content: empty
    /// title and description, not required, no image, per-type seeds.
    pub fn new(id: QuestionId, question_type: QuestionType) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            required: false,
            image: None,
            kind: QuestionKind::seeded(question_type),
        }
    }

    /// The type tag this question was created with.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Read the named sequence, when this question's type carries it.
    pub fn sequence(&self, field: OptionField) -> Option<&[String]> {
        match (&self.kind, field) {
            (QuestionKind::Grid { options, .. }, OptionField::Options) => Some(options),
            (QuestionKind::Grid { rows, .. }, OptionField::GridRows) => Some(rows),
            (QuestionKind::Grid { columns, .. }, OptionField::GridColumns) => Some(columns),
            (QuestionKind::CheckBox { boxes }, OptionField::CheckBoxes) => Some(boxes),
            _ => None,
        }
    }

    /// Apply a single-field patch.
    ///
    /// Returns `false`, leaving the record untouched, when the patch names
    /// a sequence this question's type does not carry.
    pub(crate) fn apply_patch(&mut self, patch: QuestionPatch) -> bool {
        match patch {
            QuestionPatch::Title(title) => {
                self.title = title;
                true
            }
            QuestionPatch::Description(description) => {
                self.description = description;
                true
            }
            QuestionPatch::Required(required) => {
                self.required = required;
                true
            }
            QuestionPatch::Image(image) => {
                self.image = image;
                true
            }
            QuestionPatch::Sequence { field, values } => match self.sequence_mut(field) {
                Some(entries) => {
                    *entries = values;
                    true
                }
                None => false,
            },
        }
    }

    /// Append one entry to the named sequence. `false` when the type does
    /// not carry that sequence.
    pub(crate) fn append_to(&mut self, field: OptionField, value: String) -> bool {
        match self.sequence_mut(field) {
            Some(entries) => {
                entries.push(value);
                true
            }
            None => false,
        }
    }

    /// Replace the entry at `index` in the named sequence.
    ///
    /// `Ok(false)` when the type does not carry the sequence (nothing to
    /// edit); an out-of-bounds index is an error and changes nothing.
    pub(crate) fn edit_at(
        &mut self,
        field: OptionField,
        index: usize,
        value: String,
    ) -> Result<bool, CoreError> {
        let Some(entries) = self.sequence_mut(field) else {
            return Ok(false);
        };
        let len = entries.len();
        match entries.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(true)
            }
            None => Err(CoreError::OptionIndexOutOfBounds {
                field: field.wire_name(),
                index,
                len,
            }),
        }
    }

    fn sequence_mut(&mut self, field: OptionField) -> Option<&mut Vec<String>> {
        match (&mut self.kind, field) {
            (QuestionKind::Grid { options, .. }, OptionField::Options) => Some(options),
            (QuestionKind::Grid { rows, .. }, OptionField::GridRows) => Some(rows),
            (QuestionKind::Grid { columns, .. }, OptionField::GridColumns) => Some(columns),
            (QuestionKind::CheckBox { boxes }, OptionField::CheckBoxes) => Some(boxes),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
