//! Wire-format snapshot of a draft for submission.
//!
//! The backend expects every question as a flat record carrying all four
//! sequence fields regardless of type, with empty collections where the
//! type has none. Keys are camelCase.

use serde::{Deserialize, Serialize};

use crate::form::FormDraft;
use crate::question::{Question, QuestionKind, QuestionType};
use crate::types::{ImageRef, QuestionId};

/// JSON body for `POST /api/forms/create`.
///
/// Built by [`FormDraft::submission_payload`]; owns its data outright, so
/// a payload is a stable snapshot no later draft edit can reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub title: String,
    pub description: String,
    pub header_image: Option<ImageRef>,
    pub questions: Vec<QuestionPayload>,
}

/// One question in the submission body, flattened to the full record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub description: String,
    pub required: bool,
    pub image: Option<ImageRef>,
    pub options: Vec<String>,
    pub grid_rows: Vec<String>,
    pub grid_columns: Vec<String>,
    pub check_boxes: Vec<String>,
}

impl From<&Question> for QuestionPayload {
    fn from(question: &Question) -> Self {
        let (options, grid_rows, grid_columns, check_boxes) = match &question.kind {
            QuestionKind::Text => (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
            QuestionKind::Grid {
                options,
                rows,
                columns,
            } => (options.clone(), rows.clone(), columns.clone(), Vec::new()),
            QuestionKind::CheckBox { boxes } => {
                (Vec::new(), Vec::new(), Vec::new(), boxes.clone())
            }
        };

        Self {
            id: question.id,
            question_type: question.question_type(),
            title: question.title.clone(),
            description: question.description.clone(),
            required: question.required,
            image: question.image.clone(),
            options,
            grid_rows,
            grid_columns,
            check_boxes,
        }
    }
}

impl From<&FormDraft> for FormPayload {
    fn from(draft: &FormDraft) -> Self {
        Self {
            title: draft.title().to_string(),
            description: draft.description().to_string(),
            header_image: draft.header_image().cloned(),
            questions: draft.questions().iter().map(QuestionPayload::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::OptionField;

    #[test]
    fn text_question_serializes_with_all_sequences_empty() {
        let mut draft = FormDraft::new();
        draft.set_title("Survey");
        let id = draft.add_question(QuestionType::Text);

        let json = serde_json::to_value(draft.submission_payload()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Survey",
                "description": "",
                "headerImage": null,
                "questions": [{
                    "id": id,
                    "type": "Text",
                    "title": "",
                    "description": "",
                    "required": false,
                    "image": null,
                    "options": [],
                    "gridRows": [],
                    "gridColumns": [],
                    "checkBoxes": [],
                }],
            })
        );
    }

    #[test]
    fn checkbox_entries_flow_into_check_boxes_key() {
        let mut draft = FormDraft::new();
        let id = draft.add_question(QuestionType::CheckBox);
        draft.append_option(id, OptionField::CheckBoxes, "Yes");

        let payload = draft.submission_payload();
        assert_eq!(payload.questions[0].check_boxes, vec!["", "Yes"]);
        assert!(payload.questions[0].options.is_empty());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["questions"][0]["checkBoxes"], serde_json::json!(["", "Yes"]));
        assert_eq!(json["questions"][0]["type"], "CheckBox");
    }

    #[test]
    fn grid_sequences_flow_into_camel_case_keys() {
        let mut draft = FormDraft::new();
        let id = draft.add_question(QuestionType::Grid);
        draft.append_option(id, OptionField::GridRows, "Row1");
        draft.append_option(id, OptionField::GridColumns, "Col1");

        let json = serde_json::to_value(draft.submission_payload()).unwrap();
        let question = &json["questions"][0];

        assert_eq!(question["gridRows"], serde_json::json!(["Row1"]));
        assert_eq!(question["gridColumns"], serde_json::json!(["Col1"]));
        assert_eq!(question["options"], serde_json::json!([""]));
        assert_eq!(question["checkBoxes"], serde_json::json!([]));
    }

    #[test]
    fn header_image_serializes_under_camel_case_key() {
        let mut draft = FormDraft::new();
        draft.set_title("T");
        draft.set_header_image(Some("file:///banner.png".into()));

        let json = serde_json::to_value(draft.submission_payload()).unwrap();
        assert_eq!(json["headerImage"], "file:///banner.png");
    }

    #[test]
    fn payload_round_trips_through_json() {
        let mut draft = FormDraft::new();
        draft.set_title("Round trip");
        draft.add_question(QuestionType::Grid);

        let payload = draft.submission_payload();
        let text = serde_json::to_string(&payload).unwrap();
        let back: FormPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(back, payload);
    }
}
