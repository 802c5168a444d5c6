//! CLI command implementations for Fieldhand.

pub(crate) mod config;
pub(crate) mod decide;
pub(crate) mod play;

use clap::ValueEnum;
use fieldhand::BotConfig;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `decide` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Turn phase for the `decide` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Phase {
    /// Pick a destination.
    Move,
    /// Pick an action.
    Action,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {e}"))
    }
}

impl From<fieldhand::TransportError> for CliError {
    fn from(e: fieldhand::TransportError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load the configuration file if one was given, else the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or is invalid.
pub(crate) fn load_config(path: Option<&Path>) -> Result<BotConfig, CliError> {
    match path {
        Some(path) => BotConfig::load(path)
            .map_err(|e| CliError::new(format!("{}: {e}", path.display()))),
        None => Ok(BotConfig::default()),
    }
}
