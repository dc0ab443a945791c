//! HTTP client for the form and task backend.
//!
//! This crate carries everything that talks to the network:
//!
//! - [`ApiClient`] — typed wrapper over the backend REST endpoints
//!   (form creation, task CRUD, authentication).
//! - [`ApiConfig`] — environment-driven backend location.
//! - [`submit_form`] — the full form submission flow, wiring an
//!   editor session from `taskform-core` to the API.

pub mod api;
pub mod config;
pub mod error;
pub mod submit;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use submit::submit_form;
