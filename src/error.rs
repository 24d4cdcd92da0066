use thiserror::Error;

/// Errors produced while parsing a dialog document. Layout itself never
/// fails; malformed nodes degrade to empty boundaries instead.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("invalid dialog JSON: {message}")]
    Json { message: String },

    #[error("dialog root must be a JSON object")]
    NotAnObject,
}
