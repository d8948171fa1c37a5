//! Error handling module for the foit CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the foit CLI application.
#[derive(Error, Debug)]
pub enum FoitError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading input or writing output fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a source offset cannot be mapped to a line and column.
    #[error("Source map error: {0}")]
    SourceMap(#[from] foic_util::SourceMapError),
}

/// Result type alias using FoitError.
pub type Result<T> = std::result::Result<T, FoitError>;
