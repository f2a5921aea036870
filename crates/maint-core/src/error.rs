//! Error types for maint core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for maint operations.
pub type Result<T> = std::result::Result<T, MaintError>;

/// Core error type for maint operations.
#[derive(Debug, Error)]
pub enum MaintError {
    /// Vehicle file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Vehicle document could not be parsed or serialized
    #[error("Document error: {0}")]
    Document(String),

    /// List edit targeted an index outside the list
    #[error("{list} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for MaintError {
    fn from(err: std::io::Error) -> Self {
        MaintError::Storage(err.to_string())
    }
}

impl From<serde_yaml::Error> for MaintError {
    fn from(err: serde_yaml::Error) -> Self {
        MaintError::Document(err.to_string())
    }
}
