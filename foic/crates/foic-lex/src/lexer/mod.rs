//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the character dispatcher
//! - `state` - Lexer states, the state stack and the handler protocol
//! - `assembler` - Pending-token merging and emission
//! - `operator` - Base state: punctuation, escapes, quotes, plain text
//! - `string` - Plain strings, escaped strings and interpolated regions
//! - `number` - Escaped number literals
//! - `comment` - Line, block and doc-block comments

mod assembler;
mod comment;
mod core;
mod number;
mod operator;
pub mod state;
mod string;

pub use core::{tokenize, Lexer};
pub use number::is_digit_in_radix;
