//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them to stderr and exits non-zero.

use std::io;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The user store file already exists
    #[error("User store already initialized. Remove the users file to start over.")]
    AlreadyInitialized,

    /// Server boot failure
    #[error("Boot failed: {0}")]
    Boot(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
