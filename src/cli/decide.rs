//! Decide command implementation.

use super::{CliError, OutputFormat, Phase};
use fieldhand::{Bot, BotConfig, Snapshot};
use std::fs;
use std::path::Path;

/// Execute the decide command for one snapshot file.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed.
pub(crate) fn execute(
    config: BotConfig,
    path: &Path,
    phase: Phase,
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
    let snapshot: Snapshot = serde_json::from_str(&text)
        .map_err(|e| CliError::new(format!("Invalid snapshot {}: {e}", path.display())))?;

    let mut bot = Bot::new(config);

    match (phase, format) {
        (Phase::Move, OutputFormat::Text) => println!("{}", bot.decide_move(&snapshot)),
        (Phase::Move, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&bot.decide_move(&snapshot))?);
        }
        (Phase::Action, OutputFormat::Text) => println!("{}", bot.decide_action(&snapshot)),
        (Phase::Action, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&bot.decide_action(&snapshot))?);
        }
    }

    Ok(())
}
