/// Question identifiers are epoch-millisecond values, unique within their
/// owning draft and never reused after removal.
pub type QuestionId = i64;

/// Opaque URI reference to a device image. Only the reference is stored;
/// asset bytes never pass through this crate.
pub type ImageRef = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
