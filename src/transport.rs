//! Link to the game server and the outer turn loop.
//!
//! The wire format is one JSON object per line in each direction. The server
//! sends a [`Snapshot`] before each phase; the bot answers with:
//!
//! ```text
//! {"loadout": {"item": "coffee_thermos", "upgrade": "scythe"}}   once, first
//! {"move": {"destination": {"x": 3, "y": 4}}}                     per turn
//! {"action": {"type": "harvest", "coords": [...]}}                per turn
//! ```

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::config::Loadout;
use crate::decision::{ActionDecision, MoveDecision};
use crate::error::TransportError;
use crate::game::Snapshot;
use crate::selector::Bot;

/// A connection to the game server.
pub trait GameLink {
    /// Announce the game-start loadout.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be sent.
    fn start(&mut self, loadout: &Loadout) -> Result<(), TransportError>;

    /// Wait for the next snapshot. `None` means the server closed the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the message is not a valid
    /// snapshot.
    fn next_snapshot(&mut self) -> Result<Option<Snapshot>, TransportError>;

    /// Send the move-phase decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be sent.
    fn send_move(&mut self, decision: &MoveDecision) -> Result<(), TransportError>;

    /// Send the action-phase decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be sent.
    fn send_action(&mut self, decision: &ActionDecision) -> Result<(), TransportError>;
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Outgoing<'a> {
    Loadout(&'a Loadout),
    Move(&'a MoveDecision),
    Action(&'a ActionDecision),
}

/// Newline-delimited JSON over any reader/writer pair, usually stdin and
/// stdout.
#[derive(Debug)]
pub struct JsonLinesLink<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> JsonLinesLink<R, W> {
    /// Wrap a reader and writer.
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Give back the writer, e.g. to inspect what was sent.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn send(&mut self, message: &Outgoing<'_>) -> Result<(), TransportError> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> GameLink for JsonLinesLink<R, W> {
    fn start(&mut self, loadout: &Loadout) -> Result<(), TransportError> {
        self.send(&Outgoing::Loadout(loadout))
    }

    fn next_snapshot(&mut self) -> Result<Option<Snapshot>, TransportError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let text = self.line.trim();
            if !text.is_empty() {
                return Ok(Some(serde_json::from_str(text)?));
            }
        }
    }

    fn send_move(&mut self, decision: &MoveDecision) -> Result<(), TransportError> {
        self.send(&Outgoing::Move(decision))
    }

    fn send_action(&mut self, decision: &ActionDecision) -> Result<(), TransportError> {
        self.send(&Outgoing::Action(decision))
    }
}

/// Counters for a finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    /// Turns with both phases decided.
    pub turns: u32,
    /// Plant actions sent.
    pub plants: u32,
    /// Harvest actions sent.
    pub harvests: u32,
    /// Buy actions sent.
    pub purchases: u32,
}

impl PlaySummary {
    fn record(&mut self, action: &ActionDecision) {
        match action {
            ActionDecision::Buy(_) => self.purchases += 1,
            ActionDecision::Harvest { .. } => self.harvests += 1,
            ActionDecision::Plant(_) => self.plants += 1,
            ActionDecision::Pass => {}
        }
    }
}

/// Play a full game over `link`.
///
/// Sends the loadout, then for each turn answers one snapshot with a move
/// and the next with an action. The game ends cleanly when the server closes
/// the stream before a move-phase snapshot.
///
/// # Errors
///
/// Returns [`TransportError::Closed`] if the stream ends between the two
/// phases of a turn, or any error raised by the link.
pub fn play<L: GameLink>(link: &mut L, bot: &mut Bot) -> Result<PlaySummary, TransportError> {
    let mut summary = PlaySummary::default();
    link.start(&bot.config().loadout)?;

    while let Some(before_move) = link.next_snapshot()? {
        let movement = bot.decide_move(&before_move);
        link.send_move(&movement)?;

        let Some(snapshot) = link.next_snapshot()? else {
            tracing::error!(turn = before_move.turn, "stream closed before the action phase");
            return Err(TransportError::Closed);
        };
        let action = bot.decide_action(&snapshot);
        link.send_action(&action)?;

        summary.record(&action);
        summary.turns += 1;
    }

    tracing::info!(
        turns = summary.turns,
        plants = summary.plants,
        harvests = summary.harvests,
        purchases = summary.purchases,
        "game over"
    );
    Ok(summary)
}
