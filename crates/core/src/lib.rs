//! Taskform domain logic: the form-authoring model, task records, and
//! account request validation.
//!
//! Everything in this crate is purely in-memory and synchronous; the HTTP
//! boundary lives in `taskform-client`. The building blocks:
//!
//! - [`FormDraft`] — ordered collection of typed questions, mutated
//!   field-by-field and snapshotted into a [`FormPayload`] for submission.
//! - [`FormEvent`] and [`event::apply`] — every draft edit as a value,
//!   folded in by a pure reducer.
//! - [`EditorSession`] — a draft plus the single visible error slot.
//! - [`task`] — task records, input validation, and the list-view
//!   deadline filter.
//! - [`auth`] — login and registration input checks.

pub mod auth;
pub mod error;
pub mod event;
pub mod form;
pub mod payload;
pub mod question;
pub mod session;
pub mod task;
pub mod types;

pub use auth::{Credentials, Registration};
pub use error::CoreError;
pub use event::FormEvent;
pub use form::FormDraft;
pub use payload::{FormPayload, QuestionPayload};
pub use question::{OptionField, Question, QuestionKind, QuestionPatch, QuestionType};
pub use session::{EditorSession, ImageSelection};
pub use task::{NewTask, Task};
pub use types::{ImageRef, QuestionId, Timestamp};
