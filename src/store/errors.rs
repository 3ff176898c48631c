//! Storage error types
//!
//! Every store failure carries the file path it happened on. Callers do not
//! recover: read and write failures propagate up to the HTTP layer, which
//! maps them to a generic server error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the user store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read
    #[error("failed to read user store at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file exists but does not contain a valid user collection
    #[error("user store at {path} contains invalid JSON: {source}")]
    InvalidData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store file could not be written or replaced
    #[error("failed to write user store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
