//! Error types for the decision engine and its transport.

use std::fmt;
use std::io;

/// A snapshot that cannot be turned into a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// Width or height is zero.
    ZeroSize,
    /// The tile list does not cover the board exactly.
    TileCount {
        /// `width * height`.
        expected: usize,
        /// Number of tiles supplied.
        actual: usize,
    },
    /// A player position lies outside the board.
    PositionOutOfBounds {
        /// Offending x coordinate.
        x: u16,
        /// Offending y coordinate.
        y: u16,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::ZeroSize => write!(f, "board has a zero dimension"),
            SnapshotError::TileCount { expected, actual } => {
                write!(f, "expected {expected} tiles, got {actual}")
            }
            SnapshotError::PositionOutOfBounds { x, y } => {
                write!(f, "position ({x}, {y}) is outside the board")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Contract violations when building an action decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionError {
    /// Crop list and its paired list differ in length.
    LengthMismatch {
        /// Number of crop kinds.
        kinds: usize,
        /// Number of quantities or coordinates.
        paired: usize,
    },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionError::LengthMismatch { kinds, paired } => write!(
                f,
                "decision pairs {kinds} crop kinds with {paired} entries"
            ),
        }
    }
}

impl std::error::Error for DecisionError {}

/// Failure talking to the game server. Always fatal for the bot process.
#[derive(Debug)]
pub enum TransportError {
    /// Reading or writing the stream failed.
    Io(io::Error),
    /// A message could not be decoded or encoded.
    Malformed(serde_json::Error),
    /// The server closed the stream in the middle of a turn.
    Closed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Io(e) => write!(f, "transport I/O failed: {e}"),
            TransportError::Malformed(e) => write!(f, "malformed message: {e}"),
            TransportError::Closed => write!(f, "server closed the stream mid-turn"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Io(e) => Some(e),
            TransportError::Malformed(e) => Some(e),
            TransportError::Closed => None,
        }
    }
}

impl From<io::Error> for TransportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e)
    }
}

/// Failure loading a bot configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid configuration JSON.
    Parse(serde_json::Error),
    /// The configuration parsed but is unusable.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
