//! Common types and utilities for foit commands.
//!
//! Input is read from a file or, when no file (or `-`) is given, from stdin.
//! Output goes to stdout unless a destination file is named.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FoitError, Result};

/// Display name used for stdin in listings and logs.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON array of `{type, value, start, end}` objects
    Json,
    /// Aligned columns with line:column positions
    Table,
}

impl OutputFormat {
    /// Lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input and Output
// ============================================================================

/// Source text together with the name it was read under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// File path, or [`STDIN_NAME`]
    pub name: String,
    /// Full text
    pub text: String,
}

/// `None` and `-` both mean stdin.
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Reads the whole input.
pub fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) if !is_stdin(Some(path)) => read_file(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text).map_err(|e| {
                FoitError::FileOperation(format!("Failed to read {}: {}", STDIN_NAME, e))
            })?;
            Ok(Input {
                name: STDIN_NAME.to_string(),
                text,
            })
        },
    }
}

fn read_file(path: &Path) -> Result<Input> {
    if path.is_dir() {
        return Err(FoitError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        FoitError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })?;
    tracing::debug!("read {} characters from {}", text.chars().count(), path.display());

    Ok(Input {
        name: path.display().to_string(),
        text,
    })
}

/// Writes `content` to `path`, or to stdout when `path` is `None` or `-`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdin(Some(path)) => write_file(path, content),
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        },
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| {
        FoitError::FileOperation(format!("Failed to write {}: {}", path.display(), e))
    })?;
    tracing::info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
