//! Plaudit error types

use crate::types::ComplimentType;

/// Plaudit error types
#[derive(Debug, thiserror::Error)]
pub enum PlauditError {
    // Storage errors
    #[error("store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("no store configured")]
    NoStore,

    #[error("configuration error: {0}")]
    Configuration(String),

    /// The content bank has nothing to draw from.
    ///
    /// This is a defect in the bank itself, never an environment fault.
    #[error("content bank has no {what} for '{kind}'")]
    EmptyBank {
        kind: ComplimentType,
        what: &'static str,
    },
}

impl PlauditError {
    /// Whether this error came from the storage layer (I/O or backend).
    ///
    /// Storage errors are absorbed by the cache; everything else is not.
    pub fn is_storage(&self) -> bool {
        matches!(self, PlauditError::Store(_) | PlauditError::Io(_))
    }
}

/// Result type alias for Plaudit operations
pub type Result<T> = std::result::Result<T, PlauditError>;
