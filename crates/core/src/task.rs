//! Task records and the list-view deadline filter.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Message shown when a new task is missing its title or description.
pub const MISSING_TASK_FIELDS_MESSAGE: &str = "Please fill details! Fields can't be empty";

/// A task as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: Timestamp,
    #[serde(default)]
    pub completed: bool,
}

/// Input for `POST /api/addTask`. The deadline serializes as an ISO-8601
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub deadline: Timestamp,
}

/// Validate a new task: title and description must both be present.
pub fn validate_new_task(task: &NewTask) -> Result<(), CoreError> {
    if task.title.is_empty() || task.description.is_empty() {
        return Err(CoreError::Validation(
            MISSING_TASK_FIELDS_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Keep tasks whose deadline has not already passed, comparing calendar
/// dates in UTC so a task due earlier today still shows. Completion status
/// does not matter here; completed tasks stay visible until their date
/// goes by.
pub fn filter_current(tasks: Vec<Task>, today: chrono::NaiveDate) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.deadline.date_naive() >= today)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
