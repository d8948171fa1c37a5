//! Command trait for the foit CLI.

use crate::error::Result;

/// Standard command trait that all foit commands implement.
///
/// A command turns its arguments into rendered text; where that text goes
/// (stdout or a file) is decided by the caller.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
