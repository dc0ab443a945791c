/// Error type for draft mutations and input validation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// User input failed a pre-submission check. The message is exactly
    /// what the UI shows.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An in-place sequence edit addressed an index past the end. The
    /// field is named by its wire name.
    #[error("Option index {index} out of bounds for {field} (length {len})")]
    OptionIndexOutOfBounds {
        field: &'static str,
        index: usize,
        len: usize,
    },
}
