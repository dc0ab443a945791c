//! REST API client for the form and task backend endpoints.
//!
//! Wraps the backend HTTP API (form submission, task CRUD,
//! authentication) using [`reqwest`].

use chrono::Utc;
use serde::Deserialize;
use taskform_core::task::filter_current;
use taskform_core::{Credentials, FormPayload, NewTask, Registration, Task};

use crate::error::ApiError;

/// HTTP client for the form and task backend.
pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
}

/// Success-flag envelope returned by the task and auth endpoints.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Envelope returned by the task listing endpoint.
#[derive(Debug, Deserialize)]
struct TaskListResponse {
    success: bool,
    /// The backend capitalizes this one field.
    #[serde(default, rename = "Data")]
    data: Vec<Task>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Create a new API client for the backend.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple clients).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Submit a finished form.
    ///
    /// Sends a `POST /api/forms/create` request with the form payload.
    /// The backend acknowledges creation with status 200 exactly; any
    /// other status is surfaced as [`ApiError::Api`] with the raw body.
    pub async fn create_form(&self, payload: &FormPayload) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/forms/create", self.api_url))
            .json(payload)
            .send()
            .await?;

        Self::expect_status(response, reqwest::StatusCode::OK).await
    }

    /// Create a new task.
    ///
    /// Sends a `POST /api/addTask` request. The backend reports the
    /// outcome through a `success` flag in the response body.
    pub async fn add_task(&self, task: &NewTask) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/addTask", self.api_url))
            .json(task)
            .send()
            .await?;

        Self::check_flag(response, "Failed to add task").await
    }

    /// Retrieve every stored task.
    ///
    /// Sends a `GET /api/getTasks` request and unwraps the task list
    /// from the response envelope.
    pub async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/getTasks", self.api_url))
            .send()
            .await?;

        let envelope: TaskListResponse = Self::parse_response(response).await?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope
                    .message
                    .unwrap_or_else(|| "Failed to fetch tasks".to_string()),
            });
        }
        Ok(envelope.data)
    }

    /// Retrieve the tasks still worth showing: everything whose
    /// deadline falls today or later. Tasks with earlier deadlines are
    /// dropped client-side; the backend keeps them.
    pub async fn get_current_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let tasks = self.get_tasks().await?;
        Ok(filter_current(tasks, Utc::now().date_naive()))
    }

    /// Mark a task as completed.
    ///
    /// Sends a `PATCH /api/completeTask/{id}` request with no body.
    pub async fn complete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(format!("{}/api/completeTask/{}", self.api_url, task_id))
            .send()
            .await?;

        Self::check_flag(response, "Failed to complete task").await
    }

    /// Delete a task permanently.
    ///
    /// Sends a `DELETE /api/deleteTask/{id}` request. The backend
    /// acknowledges deletion with status 204 exactly.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/deleteTask/{}", self.api_url, task_id))
            .send()
            .await?;

        Self::expect_status(response, reqwest::StatusCode::NO_CONTENT).await
    }

    /// Authenticate with an email and password.
    ///
    /// Sends a `POST /api/login` request. The backend reports the
    /// outcome through a `success` flag in the response body.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/login", self.api_url))
            .json(credentials)
            .send()
            .await?;

        Self::check_flag(response, "Login failed").await
    }

    /// Register a new account.
    ///
    /// Sends a `POST /api/register` request. Only the email and
    /// password travel over the wire; the confirmation field is a
    /// client-side check.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/api/register", self.api_url))
            .json(registration)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Ensure the response has one exact status code, discarding the body.
    async fn expect_status(
        response: reqwest::Response,
        expected: reqwest::StatusCode,
    ) -> Result<(), ApiError> {
        let status = response.status();
        if status != expected {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Parse the success-flag envelope and reject when the backend says
    /// the operation did not go through.
    async fn check_flag(
        response: reqwest::Response,
        fallback: &'static str,
    ) -> Result<(), ApiError> {
        let envelope: StatusResponse = Self::parse_response(response).await?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope.message.unwrap_or_else(|| fallback.to_string()),
            });
        }
        Ok(())
    }
}
