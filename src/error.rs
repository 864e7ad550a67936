//! Custom error types for the household ledger
//!
//! Defines the crate error hierarchy using thiserror for ergonomic
//! error definitions.

use thiserror::Error;

use crate::import::ImportError;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage layer errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Statement import failed structurally (header/columns/source)
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
