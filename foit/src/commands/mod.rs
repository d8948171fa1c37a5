//! Command modules for the foit CLI.
//!
//! Each subcommand is implemented in its own file: an args struct, a handler
//! implementing [`traits::Command`], and a `run_*` entry point.

pub mod common;
pub mod traits;

pub mod highlight;
pub mod tokens;

pub use highlight::{run_highlight, HighlightArgs};
pub use tokens::{run_tokens, TokensArgs};
