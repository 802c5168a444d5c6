//! Play command implementation.

use super::CliError;
use fieldhand::{Bot, BotConfig, JsonLinesLink, play};
use std::io;

/// Execute the play command over stdin and stdout.
///
/// # Errors
///
/// Returns an error if the server link fails.
pub(crate) fn execute(config: BotConfig) -> Result<(), CliError> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut link = JsonLinesLink::new(stdin, stdout);
    let mut bot = Bot::new(config);

    let summary = play(&mut link, &mut bot)?;
    eprintln!(
        "Played {} turns: {} plants, {} harvests, {} purchases",
        summary.turns, summary.plants, summary.harvests, summary.purchases
    );
    Ok(())
}
