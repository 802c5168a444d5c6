// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Fieldhand: a turn decision engine for a two-phase grid farming game.
//!
//! Every turn the game server sends a snapshot of the board twice: once
//! before the move phase and once before the action phase. The engine
//! answers the first with a destination and the second with a single
//! action (buy, harvest, plant or pass).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Transport (JSON lines, play loop) │
//! ├─────────────────────────────────────┤
//! │   Selector (priority rule lists)    │
//! ├──────────────────┬──────────────────┤
//! │  Opportunity     │  Crop tracking   │
//! │  scorer          │  store           │
//! ├──────────────────┴──────────────────┤
//! │   Geometry and game model           │
//! └─────────────────────────────────────┘
//! ```
//!
//! All movement and radius checks use the combined-coordinate metric from
//! [`geometry`].

pub mod config;
pub mod decision;
pub mod error;
pub mod game;
pub mod geometry;
pub mod scorer;
pub mod selector;
pub mod tracking;
pub mod transport;

pub use config::{BotConfig, Loadout};
pub use decision::{ActionDecision, MoveDecision};
pub use error::{ConfigError, DecisionError, SnapshotError, TransportError};
pub use game::{Coord, Crop, CropKind, Map, Snapshot, Tile, TileType};
pub use selector::Bot;
pub use tracking::CropTracker;
pub use transport::{GameLink, JsonLinesLink, PlaySummary, play};
