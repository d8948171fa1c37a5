//! Core error types for foic-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Offset past the last character of the file
    #[error("Offset out of bounds: offset {offset}, file has {len} characters")]
    OffsetOutOfBounds {
        /// The requested character offset
        offset: usize,
        /// Number of characters in the file
        len: usize,
    },

    /// Span whose start lies after its end
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// First offset of the span
        start: usize,
        /// Last offset of the span
        end: usize,
    },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
