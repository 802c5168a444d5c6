//! Board model for the farming game.
//!
//! Everything the engine knows about a turn arrives as a [`Snapshot`]:
//! - A row-major [`Map`] of tiles (terrain, crop, field effects)
//! - This bot's [`PlayerState`] (position, budgets, inventory, money)
//! - The opponent's position and protection radius

mod crop;
mod map;
mod snapshot;

pub use crop::{Crop, CropKind};
pub use map::{Coord, FieldEffects, Map, Tile, TileType};
pub use snapshot::{OpponentState, PlayerState, Snapshot};
