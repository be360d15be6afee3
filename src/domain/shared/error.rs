//! Domain errors

use thiserror::Error;

/// Domain result type
pub type Result<T> = std::result::Result<T, DomainError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported event: {0}")]
    UnsupportedEvent(String),

    #[error("Action failed: {error_type}: {message}")]
    ActionFailed { error_type: String, message: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Expected {expected} participants, found {found}")]
    UnexpectedParticipantCount { expected: usize, found: usize },

    #[error("Unrecognized action result: {0}")]
    UnrecognizedActionResult(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
