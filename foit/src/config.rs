//! Configuration module for the foit CLI.
//!
//! This module handles loading `foit.toml`. Every field has a
//! default, so a partial file (or none at all) is always valid; command-line
//! flags take precedence over whatever is loaded here.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{FoitError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "foit.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Settings for `foit tokens`.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Settings for `foit highlight`.
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Token listing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format (`json` or `table`).
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Hide WHITESPACE tokens.
    #[serde(default)]
    pub skip_whitespace: bool,
}

/// Highlighting options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Wrap the output in a `<pre>` element.
    #[serde(default)]
    pub wrap: bool,

    /// Class attribute of the wrapping `<pre>`.
    #[serde(default = "default_pre_class")]
    pub pre_class: String,
}

fn default_format() -> OutputFormat {
    OutputFormat::Json
}

fn default_pre_class() -> String {
    "foi-code".to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_whitespace: false,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            pre_class: default_pre_class(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/foit/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FoitError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        tracing::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FoitError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("foit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("foit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
