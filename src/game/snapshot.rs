//! Per-turn state received from the game server.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::game::{Coord, Crop, CropKind, Map, Tile};

/// Default movement budget for a fresh player.
const DEFAULT_MAX_MOVEMENT: u32 = 10;

/// Default harvest and plant radius for a fresh player.
const DEFAULT_RADIUS: u32 = 1;

/// Default carrying capacity for a fresh player.
const DEFAULT_CARRYING_CAPACITY: u32 = 20;

/// This bot's view of itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current position.
    pub position: Coord,
    /// Movement budget per move phase.
    pub max_movement: u32,
    /// Radius around the player in which crops can be harvested.
    pub harvest_radius: u32,
    /// Radius around the player in which seeds can be planted.
    pub plant_radius: u32,
    /// Maximum number of harvested crops that can be carried.
    pub carrying_capacity: u32,
    /// Money on hand.
    pub money: u32,
    /// Seeds held, per crop kind.
    #[serde(default)]
    pub seed_inventory: BTreeMap<CropKind, u32>,
    /// Harvested crops not yet sold.
    #[serde(default)]
    pub harvested_inventory: Vec<Crop>,
}

impl PlayerState {
    /// Create a player at `position` with default budgets and no money.
    #[must_use]
    pub fn new(position: Coord) -> Self {
        Self {
            position,
            max_movement: DEFAULT_MAX_MOVEMENT,
            harvest_radius: DEFAULT_RADIUS,
            plant_radius: DEFAULT_RADIUS,
            carrying_capacity: DEFAULT_CARRYING_CAPACITY,
            money: 0,
            seed_inventory: BTreeMap::new(),
            harvested_inventory: Vec::new(),
        }
    }

    /// Total number of seeds held across all kinds.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.seed_inventory.values().sum()
    }

    /// Number of distinct crop kinds tracked in the seed inventory.
    #[must_use]
    pub fn seed_kinds(&self) -> usize {
        self.seed_inventory.len()
    }
}

/// What the bot knows about its opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentState {
    /// Opponent position.
    pub position: Coord,
    /// Radius around the opponent that the bot avoids.
    pub protection_radius: u32,
}

/// Wire shape of a snapshot before validation.
#[derive(Deserialize)]
struct RawSnapshot {
    turn: u32,
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
    player: PlayerState,
    opponent: OpponentState,
    #[serde(default)]
    feedback: Vec<String>,
}

/// Complete state for one phase of one turn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct Snapshot {
    /// Current turn number.
    pub turn: u32,
    /// The board.
    pub map: Map,
    /// This bot.
    pub player: PlayerState,
    /// The other bot.
    pub opponent: OpponentState,
    /// Feedback lines from the game engine about the previous decision.
    pub feedback: Vec<String>,
}

impl Snapshot {
    /// Assemble a snapshot, checking that both players stand on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if either position is outside `map`.
    pub fn new(
        turn: u32,
        map: Map,
        player: PlayerState,
        opponent: OpponentState,
    ) -> Result<Self, SnapshotError> {
        for position in [player.position, opponent.position] {
            if !map.in_bounds(position) {
                return Err(SnapshotError::PositionOutOfBounds {
                    x: position.x,
                    y: position.y,
                });
            }
        }

        Ok(Self {
            turn,
            map,
            player,
            opponent,
            feedback: Vec::new(),
        })
    }

    /// Check if this bot is standing on a market tile.
    #[must_use]
    pub fn on_market(&self) -> bool {
        self.map.is_market(self.player.position)
    }
}

impl TryFrom<RawSnapshot> for Snapshot {
    type Error = SnapshotError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let map = Map::new(raw.width, raw.height, raw.tiles)?;
        let mut snapshot = Snapshot::new(raw.turn, map, raw.player, raw.opponent)?;
        snapshot.feedback = raw.feedback;
        Ok(snapshot)
    }
}
