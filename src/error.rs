//! Error types for stash operations.
//!
//! These errors travel between the backends and the store internals. The
//! public [`Store`](crate::Store) API folds every one of them into a failure
//! [`Outcome`](crate::Outcome) rather than returning `Err` to the caller.

use thiserror::Error;

/// All stash errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Serializing or deserializing a stored value failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backend rejected or failed an operation (quota, corrupt state).
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error from a file-backed backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stash operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
