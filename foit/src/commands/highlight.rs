//! Highlight command implementation.
//!
//! Renders the input as HTML fragments, optionally wrapped in a `<pre>`.

use std::path::PathBuf;

use foic_hl::{escape_html, highlight};
use foic_lex::Lexer;

use crate::commands::common::{read_input, write_output};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Source file; `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Class of the wrapping `<pre>`; `None` leaves the fragments bare.
    pub wrap: Option<String>,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Highlights `source`.
    pub fn render(&self, source: &str) -> String {
        let body: String = highlight(Lexer::new(source)).collect();
        match &self.args.wrap {
            Some(class) => format!("<pre class=\"{}\">{}</pre>\n", escape_html(class), body),
            None => body,
        }
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let input = read_input(self.args.input.as_deref())?;
        tracing::debug!("highlighting {}", input.name);
        Ok(self.render(&input.text))
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    let output = args.output.clone();
    let command = HighlightCommand::new(args);
    tracing::debug!("running {}", HighlightCommand::name());
    let html = command.execute()?;
    write_output(output.as_deref(), &html)
}
