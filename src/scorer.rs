//! Opportunity scoring for harvest and planting targets.
//!
//! # Scoring Model
//!
//! ```text
//! score = value × (0.5 if out of reach) × (2 if fertility idol)
//! ```
//!
//! A tile scores zero, and is dropped from rankings, when its crop is not
//! mature, a scarecrow guards it, or it lies within the opponent's
//! protection radius.

use crate::game::{Coord, Map, Snapshot, Tile};
use crate::geometry::{distance, is_reachable, reachable_cells};
use crate::tracking::{CropOrigin, CropTracker};

/// Multiplier for tiles that cannot be reached this turn.
pub const NEXT_TURN_DISCOUNT: f64 = 0.5;

/// Multiplier for tiles under a fertility idol.
pub const FERTILITY_IDOL_BONUS: f64 = 2.0;

/// Inputs shared by every tile scored in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Where this bot stands.
    pub player: Coord,
    /// How far this bot can move this turn.
    pub movement_budget: u32,
    /// Extra reach on top of the movement budget (harvest radius for
    /// harvest scoring, zero otherwise).
    pub reach_bonus: u32,
    /// Where the opponent stands.
    pub opponent: Coord,
    /// Tiles this close to the opponent are left alone.
    pub avoidance_radius: u32,
}

impl ScoringContext {
    /// Context for the action phase: the bot has already moved, so reach is
    /// the harvest radius alone.
    #[must_use]
    pub fn for_harvest(snapshot: &Snapshot) -> Self {
        Self {
            player: snapshot.player.position,
            movement_budget: 0,
            reach_bonus: snapshot.player.harvest_radius,
            opponent: snapshot.opponent.position,
            avoidance_radius: snapshot.opponent.protection_radius,
        }
    }

    /// Total reach used for the next-turn discount.
    #[must_use]
    pub const fn reach(&self) -> u32 {
        self.movement_budget.saturating_add(self.reach_bonus)
    }
}

/// A tile with a positive score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredTile {
    /// Tile position.
    pub coord: Coord,
    /// Harvest value after discounts and bonuses.
    pub score: f64,
    /// Distance from the player.
    pub distance: u32,
    /// Who planted the crop, per the tracker.
    pub origin: CropOrigin,
}

/// Score one tile for harvesting.
#[must_use]
pub fn score_tile(tile: &Tile, coord: Coord, ctx: &ScoringContext) -> f64 {
    let crop = &tile.crop;
    let near_opponent = distance(coord, ctx.opponent) <= ctx.avoidance_radius;

    if !crop.is_mature() || tile.effects.scarecrow || near_opponent {
        return 0.0;
    }

    let mut score = crop.value;
    if !is_reachable(ctx.reach(), ctx.player, coord) {
        score *= NEXT_TURN_DISCOUNT;
    }
    if tile.effects.fertility_idol {
        score *= FERTILITY_IDOL_BONUS;
    }
    score
}

/// Rank tiles by descending score.
///
/// Ties go to the tile closer to the player, then to row-major order, so the
/// output is a total order. Zero-scored tiles are left out.
#[must_use]
pub fn rank<'a, I>(tiles: I, ctx: &ScoringContext, tracker: &CropTracker) -> Vec<ScoredTile>
where
    I: IntoIterator<Item = (Coord, &'a Tile)>,
{
    let mut ranked: Vec<ScoredTile> = tiles
        .into_iter()
        .filter_map(|(coord, tile)| {
            let score = score_tile(tile, coord, ctx);
            (score > 0.0).then(|| ScoredTile {
                coord,
                score,
                distance: distance(ctx.player, coord),
                origin: tracker.origin(coord),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.distance.cmp(&b.distance))
            .then(a.coord.row_major_key().cmp(&b.coord.row_major_key()))
    });
    ranked
}

/// Ranked harvest targets within the player's harvest radius.
#[must_use]
pub fn harvest_targets(snapshot: &Snapshot, tracker: &CropTracker) -> Vec<ScoredTile> {
    let ctx = ScoringContext::for_harvest(snapshot);
    let map = &snapshot.map;
    let cells = reachable_cells(ctx.player, ctx.reach_bonus, map.bounds());
    rank(
        cells
            .into_iter()
            .filter_map(|coord| map.get(coord).map(|tile| (coord, tile))),
        &ctx,
        tracker,
    )
}

/// Empty plantable cells within `radius` of `origin`, in row-major order.
#[must_use]
pub fn plantable_cells(map: &Map, origin: Coord, radius: u32) -> Vec<Coord> {
    reachable_cells(origin, radius, map.bounds())
        .into_iter()
        .filter(|&coord| {
            map.get(coord)
                .is_some_and(|tile| tile.tile_type.is_plantable() && tile.crop.is_none())
        })
        .collect()
}
