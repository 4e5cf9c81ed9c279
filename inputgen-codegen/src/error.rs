//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Asset parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] inputgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] inputgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the generated module failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A scope was closed more often than it was opened.
    #[error("indentation underflow: scope closed at depth 0")]
    IndentUnderflow,

    /// Invalid generator configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
