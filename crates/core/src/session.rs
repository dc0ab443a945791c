//! Editing session: one draft plus the single visible error slot.
//!
//! The session owns the draft for its whole lifetime and tracks at most
//! one error at a time. A new error overwrites whatever was showing; the
//! user dismisses it explicitly, or a successful submission clears it
//! implicitly along with the draft. Silent no-ops (edits addressed at a
//! removed question) are not errors and never touch the slot.

use serde::{Deserialize, Serialize};

use crate::event::{apply, FormEvent};
use crate::form::FormDraft;
use crate::types::ImageRef;

/// Outcome of asking the platform image picker for a header image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSelection {
    /// The user backed out of the picker. Not an error.
    Cancelled,
    /// The picker itself failed.
    Failed(String),
    /// The user picked an image.
    Selected(ImageRef),
}

/// A form-editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSession {
    draft: FormDraft,
    error: Option<String>,
}

impl EditorSession {
    /// Start a session over a fresh empty draft.
    pub fn new() -> Self {
        Self {
            draft: FormDraft::new(),
            error: None,
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    /// The error currently shown to the user, if any.
    pub fn current_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply one edit to the draft.
    ///
    /// A failed edit lands its message in the error slot, overwriting any
    /// previous error, and leaves the draft untouched. Returns whether the
    /// edit went through. Successful edits never clear the slot; only
    /// dismissal or a completed submission does.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        match apply(&mut self.draft, event) {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Record an error from an operation outside the draft, such as a
    /// failed submission. Overwrites any previous error.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// The user dismissed the error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Feed the result of an image-picker round trip into the session.
    pub fn apply_image_selection(&mut self, selection: ImageSelection) {
        match selection {
            ImageSelection::Cancelled => {
                tracing::debug!("Image selection cancelled by user");
            }
            ImageSelection::Failed(reason) => {
                self.error = Some(reason);
            }
            ImageSelection::Selected(uri) => {
                self.draft.set_header_image(Some(uri));
            }
        }
    }

    /// Submission succeeded: empty the draft and clear any visible error,
    /// so a retry that went through wipes the failure it is retrying.
    pub fn complete_submission(&mut self) {
        self.draft.reset();
        self.error = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{OptionField, QuestionType};

    fn session_with_grid() -> (EditorSession, crate::types::QuestionId) {
        let mut session = EditorSession::new();
        session.apply(FormEvent::AddQuestion(QuestionType::Grid));
        let id = session.draft().questions()[0].id;
        (session, id)
    }

    // -- Error slot --

    #[test]
    fn failed_edit_fills_the_error_slot() {
        let (mut session, id) = session_with_grid();

        let applied = session.apply(FormEvent::EditOption {
            id,
            field: OptionField::GridRows,
            index: 9,
            value: "Row".into(),
        });

        assert!(!applied);
        let error = session.current_error().unwrap();
        assert!(error.contains("out of bounds"), "unexpected message: {error}");
    }

    #[test]
    fn newer_error_overwrites_older() {
        let (mut session, id) = session_with_grid();

        session.report_error("first failure");
        session.apply(FormEvent::EditOption {
            id,
            field: OptionField::GridColumns,
            index: 3,
            value: "Col".into(),
        });

        assert!(session.current_error().unwrap().contains("gridColumns"));
    }

    #[test]
    fn dismissal_clears_the_slot() {
        let mut session = EditorSession::new();
        session.report_error("submission failed");
        session.dismiss_error();
        assert!(session.current_error().is_none());
    }

    #[test]
    fn successful_edits_do_not_clear_an_existing_error() {
        let mut session = EditorSession::new();
        session.report_error("still relevant");
        assert!(session.apply(FormEvent::SetTitle("T".into())));
        assert_eq!(session.current_error(), Some("still relevant"));
    }

    #[test]
    fn silent_no_op_is_not_an_error() {
        let mut session = EditorSession::new();
        assert!(session.apply(FormEvent::RemoveQuestion { id: -1 }));
        assert!(session.current_error().is_none());
    }

    // -- Image selection --

    #[test]
    fn cancelled_selection_changes_nothing() {
        let mut session = EditorSession::new();
        session.apply_image_selection(ImageSelection::Cancelled);
        assert!(session.draft().header_image().is_none());
        assert!(session.current_error().is_none());
    }

    #[test]
    fn failed_selection_reports_the_reason() {
        let mut session = EditorSession::new();
        session.apply_image_selection(ImageSelection::Failed("permission denied".into()));
        assert_eq!(session.current_error(), Some("permission denied"));
    }

    #[test]
    fn selected_image_becomes_the_header() {
        let mut session = EditorSession::new();
        session.apply_image_selection(ImageSelection::Selected("file:///pick.png".into()));
        assert_eq!(
            session.draft().header_image().map(String::as_str),
            Some("file:///pick.png")
        );
    }

    // -- Submission lifecycle --

    #[test]
    fn completed_submission_resets_draft_and_clears_error() {
        let (mut session, _) = session_with_grid();
        session.apply(FormEvent::SetTitle("Survey".into()));
        session.report_error("previous attempt failed");

        session.complete_submission();

        assert!(session.draft().is_empty());
        assert!(session.draft().title().is_empty());
        assert!(session.current_error().is_none());
    }
}
