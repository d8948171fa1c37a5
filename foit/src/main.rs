//! Foit CLI - A command-line front end for the Foi lexer.
//!
//! This is the main entry point for the foit CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_highlight, run_tokens, HighlightArgs, TokensArgs};
use config::Config;
use error::{FoitError, Result};

/// Foit - Foi source inspection tool
///
/// Foit lexes Foi source files and prints their tokens or renders them as
/// highlighted HTML.
#[derive(Parser, Debug)]
#[command(name = "foit")]
#[command(author = "Foi Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex and highlight Foi source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FOIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FOIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "FOIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the foit CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a source file
    ///
    /// Lexes FILE (or stdin) and prints every token with its kind, text and
    /// character offsets.
    Tokens(TokensCommand),

    /// Render a source file as highlighted HTML
    ///
    /// Each token becomes an `<i>` element whose class selects its color;
    /// whitespace is copied through unchanged.
    Highlight(HighlightCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file (default: stdin; `-` also reads stdin)
    input: Option<PathBuf>,

    /// Output format (default: from config, else json)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Hide whitespace tokens
    #[arg(long)]
    skip_whitespace: bool,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Source file (default: stdin; `-` also reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the output in a `<pre>` element
    #[arg(short, long)]
    wrap: bool,

    /// Class of the wrapping `<pre>` (default: from config)
    #[arg(long)]
    pre_class: Option<String>,
}

/// Main entry point for the foit CLI.
///
/// Errors are reported with their display text and a non-zero exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads configuration and dispatches.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system. Logs go to stderr so stdout carries only
/// command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| FoitError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Highlight(args) => execute_highlight(args, config),
    }
}

/// Execute the tokens command. Flags override the configuration.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        input: args.input,
        format: args.format.unwrap_or(config.tokens.format),
        skip_whitespace: args.skip_whitespace || config.tokens.skip_whitespace,
    };
    run_tokens(tokens_args)
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, config: Config) -> Result<()> {
    let highlight_args = highlight_args(args, config);
    run_highlight(highlight_args)
}

fn highlight_args(args: HighlightCommand, config: Config) -> HighlightArgs {
    // An explicit class implies wrapping.
    let wrap = args.wrap || args.pre_class.is_some() || config.highlight.wrap;
    HighlightArgs {
        input: args.input,
        output: args.output,
        wrap: wrap.then(|| args.pre_class.unwrap_or(config.highlight.pre_class)),
    }
}
