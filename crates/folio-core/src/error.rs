//! Error types for folio-core

use thiserror::Error;

use crate::models::PageId;

/// Result type alias using folio-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration rejected during validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Note content was edited while the notes are locked
    #[error("Notes are locked")]
    NotesLocked,

    /// No note region exists for the page
    #[error("Unknown page: {0}")]
    UnknownPage(PageId),

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
