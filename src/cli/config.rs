//! Config command implementation.

use super::CliError;
use fieldhand::BotConfig;

/// Print the effective configuration.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn execute(config: &BotConfig) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
