//! Form submission flow.
//!
//! Bridges an [`EditorSession`] and the [`ApiClient`]: validates the
//! draft, posts it, and routes every failure into the session's error
//! slot so the editor can show it.

use taskform_core::{CoreError, EditorSession};

use crate::api::ApiClient;
use crate::error::ApiError;

/// Validate and submit the session's draft.
///
/// The draft is checked locally first; an invalid draft never reaches
/// the network. On acceptance the session is reset for the next form.
/// Every failure lands in the session's error slot, and the draft is
/// left untouched so the user can correct and resubmit.
///
/// Returns `true` when the backend accepted the form.
pub async fn submit_form(session: &mut EditorSession, api: &ApiClient) -> bool {
    if let Err(err) = session.draft().validate_for_submission() {
        let message = match err {
            CoreError::Validation(message) => message,
            other => other.to_string(),
        };
        tracing::debug!(reason = %message, "Form submission blocked before sending");
        session.report_error(message);
        return false;
    }

    let payload = session.draft().submission_payload();
    tracing::info!(questions = payload.questions.len(), "Submitting form");

    match api.create_form(&payload).await {
        Ok(()) => {
            tracing::info!("Form accepted");
            session.complete_submission();
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Form submission failed");
            let message = match err {
                ApiError::Api { status, body } => {
                    format!("Form creation failed: {status} {body}")
                }
                other => other.to_string(),
            };
            session.report_error(message);
            false
        }
    }
}
