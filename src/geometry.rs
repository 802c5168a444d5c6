//! Combined-coordinate distance and movement-budget clamping.
//!
//! Every budget and radius check in the engine measures distance as the
//! absolute difference of coordinate sums:
//!
//! ```text
//! distance(a, b) = |(a.x + a.y) - (b.x + b.y)|
//! ```
//!
//! This is not Manhattan distance. Cells on the same anti-diagonal are at
//! distance zero from each other, and offsets in opposite directions on the
//! two axes cancel out.

use crate::game::Coord;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Width in tiles.
    pub width: u16,
    /// Height in tiles.
    pub height: u16,
}

impl Bounds {
    /// Create new bounds.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Pull a coordinate onto the board by clamping each axis.
    #[must_use]
    pub fn clamp(&self, coord: Coord) -> Coord {
        Coord::new(
            coord.x.min(self.width.saturating_sub(1)),
            coord.y.min(self.height.saturating_sub(1)),
        )
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}

/// Combined-coordinate distance between two cells.
#[must_use]
#[inline]
pub fn distance(a: Coord, b: Coord) -> u32 {
    let sum_a = i32::from(a.x) + i32::from(a.y);
    let sum_b = i32::from(b.x) + i32::from(b.y);
    (sum_a - sum_b).unsigned_abs()
}

/// Check if `to` is within `budget` of `from`.
#[must_use]
#[inline]
pub fn is_reachable(budget: u32, from: Coord, to: Coord) -> bool {
    distance(from, to) <= budget
}

/// Clamp a desired destination to the closest cell within `budget` of `from`.
///
/// A reachable destination is returned unchanged. Otherwise the smaller axis
/// offset is kept and the rest of the budget goes to the larger one. When
/// both offsets point the same way and each exceeds the budget on its own,
/// the budget is split evenly with the odd step given to the larger axis.
/// Offsets pointing in opposite directions cancel under this metric, so only
/// the surplus of the larger axis is spent.
///
/// The result never passes the target on either axis and never leaves the
/// board. A zero budget always yields `from`.
#[must_use]
pub fn clamp_to_budget(budget: u32, from: Coord, desired: Coord, bounds: Bounds) -> Coord {
    let from = bounds.clamp(from);
    let desired = bounds.clamp(desired);

    if budget == 0 || desired == from {
        return from;
    }
    if is_reachable(budget, from, desired) {
        return desired;
    }

    let dx = i64::from(desired.x) - i64::from(from.x);
    let dy = i64::from(desired.y) - i64::from(from.y);
    let (step_x, step_y) = budget_steps(i64::from(budget), dx.abs(), dy.abs(), dx * dy < 0);

    bounds.clamp(Coord::new(
        offset(from.x, dx.signum() * step_x),
        offset(from.y, dy.signum() * step_y),
    ))
}

/// Split a budget between the two axes. Inputs are absolute offsets.
fn budget_steps(budget: i64, ax: i64, ay: i64, opposed: bool) -> (i64, i64) {
    if opposed {
        return if ax > ay {
            (ay + budget, ay)
        } else {
            (ax, ax + budget)
        };
    }

    let smaller = ax.min(ay);
    if smaller <= budget {
        return if ax <= ay {
            (ax, budget - ax)
        } else {
            (budget - ay, ay)
        };
    }

    let half = budget / 2;
    let odd = budget % 2;
    if ay > ax {
        (half, half + odd)
    } else {
        (half + odd, half)
    }
}

/// Apply a signed step to an axis value.
fn offset(base: u16, step: i64) -> u16 {
    u16::try_from(i64::from(base) + step).unwrap_or(base)
}

/// All on-board cells within `radius` of `origin`, in row-major order.
#[must_use]
pub fn reachable_cells(origin: Coord, radius: u32, bounds: Bounds) -> Vec<Coord> {
    bounds
        .cells()
        .filter(|&cell| is_reachable(radius, origin, cell))
        .collect()
}
