//! Error types for the parts inventory.

use thiserror::Error;

/// Errors that can occur during part operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PartError {
    /// A required field was missing or blank.
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// A part with the same id is already in the inventory.
    #[error("Part already exists: {0}")]
    DuplicateId(String),

    /// The requested part was not found.
    #[error("Part not found: {0}")]
    NotFound(String),

    /// A quantity or price was not a usable number.
    #[error("Invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The category label is not one of the known categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// An error occurred while communicating with the session actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
