//! The form draft: an ordered, mutable collection of typed questions
//! assembled into a submission payload.
//!
//! A draft lives entirely in client memory and is exclusively owned by the
//! editing session that created it. All mutations are synchronous and run
//! to completion; question order is insertion order and carries through to
//! rendering and submission.
//!
//! Mutations addressed at a question id the draft does not hold are silent
//! no-ops by contract, not errors: the UI may race a removal against an
//! in-flight edit, and the edit simply lands on nothing.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::payload::FormPayload;
use crate::question::{OptionField, Question, QuestionPatch, QuestionType};
use crate::types::{ImageRef, QuestionId};

/// Message shown when submitting a draft without a title.
pub const MISSING_TITLE_MESSAGE: &str = "Form title is required";

/// An in-progress form being assembled on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    title: String,
    description: String,
    header_image: Option<ImageRef>,
    questions: Vec<Question>,
    /// Id watermark: the next id handed out is at least this value. Seeded
    /// from the creation time in epoch milliseconds and bumped past every
    /// allocation, so ids stay unique even within one millisecond and are
    /// never reused after a removal or reset.
    next_id: QuestionId,
}

impl FormDraft {
    /// Create an empty draft: no title, no description, no header image,
    /// no questions.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            header_image: None,
            questions: Vec::new(),
            next_id: Utc::now().timestamp_millis(),
        }
    }

    /// Create a draft from explicit parts.
    ///
    /// The supplied questions must already have distinct ids; the watermark
    /// is bumped past the largest of them so future allocations stay unique.
    pub fn with_content(
        title: impl Into<String>,
        description: impl Into<String>,
        header_image: Option<ImageRef>,
        questions: Vec<Question>,
    ) -> Self {
        let max_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            title: title.into(),
            description: description.into(),
            header_image,
            questions,
            next_id: Utc::now().timestamp_millis().max(max_id + 1),
        }
    }

    // -- Form-level fields --

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn header_image(&self) -> Option<&ImageRef> {
        self.header_image.as_ref()
    }

    /// Replace the header image reference. No validation is performed on
    /// the reference and the previous one is discarded.
    pub fn set_header_image(&mut self, image: Option<ImageRef>) {
        self.header_image = image;
    }

    // -- Question collection --

    /// Questions in insertion order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append a question of the given type with default content and a
    /// fresh unique id. Existing questions and their identities are
    /// untouched.
    pub fn add_question(&mut self, question_type: QuestionType) -> QuestionId {
        let id = self.allocate_id();
        self.questions.push(Question::new(id, question_type));
        id
    }

    /// Apply a single-field patch to the question with the given id.
    ///
    /// Exactly one field of exactly one record changes; order is preserved.
    /// Returns `false` without touching anything when no question has the
    /// id, or when the patch names a sequence the question's type does not
    /// carry.
    pub fn update_question(&mut self, id: QuestionId, patch: QuestionPatch) -> bool {
        match self.question_mut(id) {
            Some(question) => question.apply_patch(patch),
            None => false,
        }
    }

    /// Append one entry to a question's named sequence, preserving the
    /// order and values of everything already there. Returns `false` on an
    /// unmatched id or a sequence the question's type does not carry.
    pub fn append_option(
        &mut self,
        id: QuestionId,
        field: OptionField,
        value: impl Into<String>,
    ) -> bool {
        match self.question_mut(id) {
            Some(question) => question.append_to(field, value.into()),
            None => false,
        }
    }

    /// Replace the entry at `index` in a question's named sequence.
    ///
    /// An index past the end of the sequence is an error and changes
    /// nothing. An unmatched id or a sequence the question's type does not
    /// carry is a tolerated `Ok(false)` no-op, same as the other mutations.
    pub fn edit_option(
        &mut self,
        id: QuestionId,
        field: OptionField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<bool, CoreError> {
        match self.question_mut(id) {
            Some(question) => question.edit_at(field, index, value.into()),
            None => Ok(false),
        }
    }

    /// Remove the question with the given id, keeping the relative order
    /// of the rest. Returns `false` when no question has the id. The
    /// removed id is never handed out again.
    pub fn remove_question(&mut self, id: QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        self.questions.len() < before
    }

    // -- Submission --

    /// Check the draft is submittable: the title must be non-empty after
    /// trimming. Mutation operations never validate; this is the only
    /// record-level check and it runs before anything touches the network.
    pub fn validate_for_submission(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(MISSING_TITLE_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Snapshot the draft into its wire form.
    ///
    /// The payload owns its data outright: mutating the draft afterwards
    /// does not affect a payload already built.
    pub fn submission_payload(&self) -> FormPayload {
        FormPayload::from(self)
    }

    /// Return the draft to its initial empty state. The id watermark is
    /// kept, so ids from the previous contents are not reused.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.header_image = None;
        self.questions.clear();
    }

    fn question_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    fn allocate_id(&mut self) -> QuestionId {
        let id = Utc::now().timestamp_millis().max(self.next_id);
        self.next_id = id + 1;
        id
    }
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
