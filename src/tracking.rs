//! Crop tracking: who planted what, reconciled turn by turn.
//!
//! The server only reports what is growing on each tile, not who planted it.
//! The tracker keeps two board-sized grids:
//!
//! - `owned`: the last crop this bot believes it planted on a cell
//! - `contested`: the last crop seen on a cell this bot did not plant
//!
//! Both grids start as a copy of the first board, so crops already on the
//! map at game start count as owned. From the first reconciliation on, a
//! cell is claimed by at most one grid: planting or keeping an owned crop
//! clears the contested record, and losing an owned crop hands the cell to
//! the contested grid. [`CropTracker::origin`] gives the owned grid
//! precedence.

use crate::game::{Coord, Crop, Map};
use crate::geometry::Bounds;

/// Attribution of the crop on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOrigin {
    /// Planted by this bot.
    Ours,
    /// Planted by someone else.
    Theirs,
    /// Nothing known to be growing.
    Unclaimed,
}

/// Counters from one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Own crops that grew or changed value.
    pub grown: u32,
    /// Own crops that disappeared or were replaced.
    pub lost: u32,
    /// Cells where the contested record was rewritten.
    pub contested_updates: u32,
}

impl ReconcileReport {
    /// Check if the pass changed anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.grown == 0 && self.lost == 0 && self.contested_updates == 0
    }
}

/// Two parallel grids of last-known crops.
#[derive(Debug, Clone, PartialEq)]
pub struct CropTracker {
    bounds: Bounds,
    owned: Vec<Crop>,
    contested: Vec<Crop>,
}

impl CropTracker {
    /// Seed both grids from the first board of the game.
    #[must_use]
    pub fn initialize(map: &Map) -> Self {
        let crops: Vec<Crop> = map.tiles().iter().map(|tile| tile.crop).collect();
        Self {
            bounds: map.bounds(),
            owned: crops.clone(),
            contested: crops,
        }
    }

    /// Board dimensions the tracker was built for.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Fold a fresh board into the grids.
    ///
    /// A cell keeps its owned record while the observed kind matches it,
    /// following the crop as it grows, and its contested record is cleared.
    /// Any other observation is someone else's doing: the owned record is
    /// dropped and the contested record follows the board. Running the same
    /// board twice changes nothing the second time.
    ///
    /// A board of different dimensions is ignored.
    pub fn reconcile(&mut self, map: &Map) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        if map.bounds() != self.bounds {
            tracing::warn!(
                expected = ?self.bounds,
                actual = ?map.bounds(),
                "board size changed, skipping reconciliation"
            );
            return report;
        }

        let cells = self.owned.iter_mut().zip(self.contested.iter_mut());
        for ((owned, contested), tile) in cells.zip(map.tiles()) {
            let observed = tile.crop;

            if owned.kind.is_some() && owned.kind == observed.kind {
                if *owned != observed {
                    *owned = observed;
                    report.grown += 1;
                }
                if !contested.is_none() {
                    *contested = Crop::NONE;
                    report.contested_updates += 1;
                }
                continue;
            }

            if owned.kind.is_some() {
                *owned = Crop::NONE;
                report.lost += 1;
            }
            if *contested != observed {
                *contested = observed;
                report.contested_updates += 1;
            }
        }

        report
    }

    /// Record a crop this bot just planted.
    ///
    /// Returns `false` if `coord` is off the board.
    pub fn mark_planted(&mut self, coord: Coord, crop: Crop) -> bool {
        let Some(idx) = self.index(coord) else {
            return false;
        };
        self.owned[idx] = crop;
        self.contested[idx] = Crop::NONE;
        true
    }

    /// Last crop this bot planted at `coord`.
    #[must_use]
    pub fn owned(&self, coord: Coord) -> Option<&Crop> {
        self.index(coord).map(|idx| &self.owned[idx])
    }

    /// Last crop seen at `coord` that this bot did not plant.
    #[must_use]
    pub fn contested(&self, coord: Coord) -> Option<&Crop> {
        self.index(coord).map(|idx| &self.contested[idx])
    }

    /// Who the crop at `coord` belongs to.
    #[must_use]
    pub fn origin(&self, coord: Coord) -> CropOrigin {
        let Some(idx) = self.index(coord) else {
            return CropOrigin::Unclaimed;
        };
        if !self.owned[idx].is_none() {
            CropOrigin::Ours
        } else if !self.contested[idx].is_none() {
            CropOrigin::Theirs
        } else {
            CropOrigin::Unclaimed
        }
    }

    /// Number of cells holding an owned crop.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owned.iter().filter(|crop| !crop.is_none()).count()
    }

    /// Number of cells holding a contested crop.
    #[must_use]
    pub fn contested_count(&self) -> usize {
        self.contested.iter().filter(|crop| !crop.is_none()).count()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.bounds.contains(coord).then(|| {
            usize::from(coord.y) * usize::from(self.bounds.width) + usize::from(coord.x)
        })
    }
}
