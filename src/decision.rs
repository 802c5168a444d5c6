//! Decisions sent back to the game server.
//!
//! Each turn produces one [`MoveDecision`] followed by one [`ActionDecision`].
//! Buy and plant orders pair a crop list with a second list of equal length;
//! the constructors refuse anything else.

use std::fmt;

use serde::Serialize;

use crate::error::DecisionError;
use crate::game::{Coord, CropKind};

/// Destination for the move phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveDecision {
    /// Tile to move to.
    pub destination: Coord,
}

impl MoveDecision {
    /// Create a move decision.
    #[must_use]
    pub const fn new(destination: Coord) -> Self {
        Self { destination }
    }
}

impl fmt::Display for MoveDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {}", self.destination)
    }
}

/// Seeds to buy, one quantity per crop kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyOrder {
    kinds: Vec<CropKind>,
    quantities: Vec<u32>,
}

impl BuyOrder {
    /// Crop kinds to buy.
    #[must_use]
    pub fn kinds(&self) -> &[CropKind] {
        &self.kinds
    }

    /// Quantity for each kind.
    #[must_use]
    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    /// Iterate over `(kind, quantity)` pairs.
    pub fn items(&self) -> impl Iterator<Item = (CropKind, u32)> + '_ {
        self.kinds.iter().copied().zip(self.quantities.iter().copied())
    }
}

/// Seeds to plant, one coordinate per crop kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantOrder {
    kinds: Vec<CropKind>,
    coords: Vec<Coord>,
}

impl PlantOrder {
    /// Crop kinds to plant.
    #[must_use]
    pub fn kinds(&self) -> &[CropKind] {
        &self.kinds
    }

    /// Target tile for each kind.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterate over `(kind, coord)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (CropKind, Coord)> + '_ {
        self.kinds.iter().copied().zip(self.coords.iter().copied())
    }
}

/// The single action taken in the action phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDecision {
    /// Buy seeds at a market tile.
    Buy(BuyOrder),
    /// Harvest the crops on these tiles.
    Harvest {
        /// Tiles to harvest.
        coords: Vec<Coord>,
    },
    /// Plant seeds.
    Plant(PlantOrder),
    /// Do nothing this phase.
    Pass,
}

impl ActionDecision {
    /// Build a buy decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length.
    pub fn buy(kinds: Vec<CropKind>, quantities: Vec<u32>) -> Result<Self, DecisionError> {
        if kinds.len() != quantities.len() {
            return Err(DecisionError::LengthMismatch {
                kinds: kinds.len(),
                paired: quantities.len(),
            });
        }
        Ok(Self::Buy(BuyOrder { kinds, quantities }))
    }

    /// Build a buy decision for a single crop kind.
    #[must_use]
    pub fn buy_one(kind: CropKind, quantity: u32) -> Self {
        Self::Buy(BuyOrder {
            kinds: vec![kind],
            quantities: vec![quantity],
        })
    }

    /// Build a harvest decision.
    #[must_use]
    pub fn harvest(coords: Vec<Coord>) -> Self {
        Self::Harvest { coords }
    }

    /// Build a plant decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length.
    pub fn plant(kinds: Vec<CropKind>, coords: Vec<Coord>) -> Result<Self, DecisionError> {
        if kinds.len() != coords.len() {
            return Err(DecisionError::LengthMismatch {
                kinds: kinds.len(),
                paired: coords.len(),
            });
        }
        Ok(Self::Plant(PlantOrder { kinds, coords }))
    }

    /// Build a plant decision from already-paired seeds and tiles.
    #[must_use]
    pub fn plant_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (CropKind, Coord)>,
    {
        let (kinds, coords) = pairs.into_iter().unzip();
        Self::Plant(PlantOrder { kinds, coords })
    }

    /// Check if this is the no-op decision.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for ActionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionDecision::Buy(order) => {
                write!(f, "buy")?;
                for (kind, quantity) in order.items() {
                    write!(f, " {kind} x{quantity}")?;
                }
                Ok(())
            }
            ActionDecision::Harvest { coords } => {
                write!(f, "harvest")?;
                for coord in coords {
                    write!(f, " {coord}")?;
                }
                Ok(())
            }
            ActionDecision::Plant(order) => {
                write!(f, "plant")?;
                for (kind, coord) in order.pairs() {
                    write!(f, " {kind} {coord}")?;
                }
                Ok(())
            }
            ActionDecision::Pass => write!(f, "pass"),
        }
    }
}
