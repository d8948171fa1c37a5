//! foic-util - Shared foundation types for the Foi toolchain.
//!
//! The lexer reports positions as zero-based *character* offsets, inclusive
//! on both ends. This crate holds the types that make those offsets useful
//! to front ends:
//!
//! - [`span::Span`] - an inclusive offset range
//! - [`span::SourceFile`] - a source text with precomputed line starts, for
//!   turning offsets into 1-based line/column pairs
//! - [`error`] - error types for checked lookups
//!
//! # Example
//!
//! ```
//! use foic_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new("main.foi", "def x: 1;\nlog(x);");
//! let span = Span::new(10, 12);
//!
//! assert_eq!(file.line_col(span.start), (2, 1));
//! assert_eq!(file.snippet(span).unwrap(), "log");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
