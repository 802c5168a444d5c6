//! Property-based tests for geometry, crop tracking and scoring.
//!
//! Run with: cargo test --release prop_engine

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use fieldhand::game::{Coord, Crop, CropKind, Map, Tile, TileType};
use fieldhand::geometry::{Bounds, clamp_to_budget, distance, is_reachable};
use fieldhand::scorer::{ScoringContext, rank};
use fieldhand::tracking::CropTracker;

const SIDE: u16 = 12;

fn coord() -> impl Strategy<Value = Coord> {
    (0..SIDE, 0..SIDE).prop_map(|(x, y)| Coord::new(x, y))
}

fn crop() -> impl Strategy<Value = Crop> {
    prop_oneof![
        Just(Crop::NONE),
        (0..CropKind::ALL.len(), 0u32..4, 0u32..50).prop_map(|(kind, timer, value)| {
            Crop::new(CropKind::ALL[kind], timer, f64::from(value))
        }),
    ]
}

fn board() -> impl Strategy<Value = Map> {
    prop::collection::vec(crop(), usize::from(SIDE) * usize::from(SIDE)).prop_map(|crops| {
        let tiles = crops
            .into_iter()
            .map(|crop| Tile::with_crop(TileType::Soil, crop))
            .collect();
        Map::new(SIDE, SIDE, tiles).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A clamped destination never exceeds the budget and stays on the board.
    #[test]
    fn prop_clamp_within_budget(budget in 0u32..30, from in coord(), desired in coord()) {
        let bounds = Bounds::new(SIDE, SIDE);
        let result = clamp_to_budget(budget, from, desired, bounds);

        prop_assert!(distance(from, result) <= budget);
        prop_assert!(bounds.contains(result));
    }

    /// A destination already in reach is returned as is.
    #[test]
    fn prop_clamp_reachable_unchanged(budget in 1u32..30, from in coord(), desired in coord()) {
        prop_assume!(is_reachable(budget, from, desired));
        let result = clamp_to_budget(budget, from, desired, Bounds::new(SIDE, SIDE));
        prop_assert_eq!(result, desired);
    }

    /// Reconciling the same board twice changes nothing the second time.
    #[test]
    fn prop_reconcile_idempotent(first in board(), second in board()) {
        let mut tracker = CropTracker::initialize(&first);
        tracker.reconcile(&second);
        let settled = tracker.clone();

        let report = tracker.reconcile(&second);
        prop_assert!(report.is_empty());
        prop_assert_eq!(tracker, settled);
    }

    /// After a reconciliation no cell is claimed by both grids.
    #[test]
    fn prop_reconcile_single_claim(first in board(), second in board()) {
        let mut tracker = CropTracker::initialize(&first);
        tracker.reconcile(&second);

        for coord in Bounds::new(SIDE, SIDE).cells() {
            let owned = tracker.owned(coord).unwrap();
            let contested = tracker.contested(coord).unwrap();
            prop_assert!(
                owned.is_none() || contested.is_none(),
                "{coord} claimed by both: {owned:?} / {contested:?}"
            );
        }
    }

    /// Crop equality is reflexive, symmetric and transitive.
    #[test]
    fn prop_crop_equality(a in crop(), b in crop(), c in crop()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }

    /// Rankings hold no zero scores, are sorted and do not depend on input order.
    #[test]
    fn prop_rank_sorted_and_stable(map in board(), player in coord(), opponent in coord()) {
        let tracker = CropTracker::initialize(&map);
        let ctx = ScoringContext {
            player,
            movement_budget: 4,
            reach_bonus: 1,
            opponent,
            avoidance_radius: 2,
        };

        let ranked = rank(map.iter(), &ctx, &tracker);
        prop_assert!(ranked.iter().all(|tile| tile.score > 0.0));
        prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));

        let reversed: Vec<_> = map.iter().collect::<Vec<_>>().into_iter().rev().collect();
        let again = rank(reversed, &ctx, &tracker);
        prop_assert_eq!(ranked, again);
    }
}
