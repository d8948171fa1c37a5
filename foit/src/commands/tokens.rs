//! Tokens command implementation.
//!
//! Lexes the input and lists every token, either as one JSON array or as an
//! aligned table with 1-based `line:column` positions.

use std::path::PathBuf;
use std::time::Instant;

use foic_lex::{Lexer, Token, TokenKind};
use foic_util::SourceFile;

use crate::commands::common::{read_input, write_output, Input, OutputFormat};
use crate::commands::traits::Command;
use crate::error::{FoitError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file; `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Hide WHITESPACE tokens.
    pub skip_whitespace: bool,
}

impl Default for TokensArgs {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::Json,
            skip_whitespace: false,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lexes `input` and renders the listing.
    pub fn render(&self, input: &Input) -> Result<String> {
        let start_time = Instant::now();
        let tokens: Vec<Token> = Lexer::new(&input.text)
            .filter(|t| !(self.args.skip_whitespace && t.kind == TokenKind::Whitespace))
            .collect();
        tracing::debug!(
            "lexed {} tokens from {} in {:.2?}",
            tokens.len(),
            input.name,
            start_time.elapsed()
        );

        match self.args.format {
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&tokens)?;
                json.push('\n');
                Ok(json)
            },
            OutputFormat::Table => render_table(input, &tokens),
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let input = read_input(self.args.input.as_deref())?;
        self.render(&input)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Renders `POSITION  KIND  VALUE` columns; values are shown escaped.
fn render_table(input: &Input, tokens: &[Token]) -> Result<String> {
    let file = SourceFile::new(input.name.as_str(), input.text.as_str());
    tracing::debug!(
        "listing {} ({} characters, {} lines)",
        file.name(),
        file.char_len(),
        file.line_count()
    );

    let mut rows = Vec::with_capacity(tokens.len());
    for token in tokens {
        let (line, col) = file.try_line_col(token.start)?;
        let text = file.snippet(token.span())?;
        if text != token.value {
            return Err(FoitError::Validation(format!(
                "token {} does not match the source text {:?}",
                token, text
            )));
        }
        rows.push((format!("{line}:{col}"), token.kind.as_str(), format!("{:?}", text)));
    }

    let pos_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max("POSITION".len());
    let kind_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max("KIND".len());

    let mut out = format!("{:<pos_width$}  {:<kind_width$}  VALUE\n", "POSITION", "KIND");
    for (pos, kind, value) in rows {
        out.push_str(&format!("{pos:<pos_width$}  {kind:<kind_width$}  {value}\n"));
    }
    Ok(out)
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    tracing::debug!("running {}", TokensCommand::name());
    let listing = command.execute()?;
    write_output(None, &listing)
}
