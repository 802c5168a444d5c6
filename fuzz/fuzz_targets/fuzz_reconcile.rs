#![no_main]

use arbitrary::Arbitrary;
use fieldhand::game::{Crop, CropKind, Map, Tile, TileType};
use fieldhand::tracking::{CropOrigin, CropTracker};
use fieldhand::Coord;
use libfuzzer_sys::fuzz_target;

const SIDE: u16 = 8;

/// One cell observation: crop kind index (0 = empty), growth and value.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct Cell {
    kind: u8,
    growth: u8,
    value: u8,
}

/// A sequence of boards interleaved with plantings.
#[derive(Arbitrary, Debug)]
struct ReconcileInput {
    boards: Vec<[Cell; 64]>,
    plantings: Vec<(u8, u8, u8)>,
}

fn to_crop(cell: Cell) -> Crop {
    let index = usize::from(cell.kind) % (CropKind::ALL.len() + 1);
    match index.checked_sub(1) {
        Some(kind) => Crop::new(
            CropKind::ALL[kind],
            u32::from(cell.growth % 4),
            f64::from(cell.value),
        ),
        None => Crop::NONE,
    }
}

fn to_map(cells: &[Cell; 64]) -> Map {
    let tiles = cells
        .iter()
        .map(|&cell| Tile::with_crop(TileType::Soil, to_crop(cell)))
        .collect();
    Map::new(SIDE, SIDE, tiles).unwrap()
}

fuzz_target!(|input: ReconcileInput| {
    let Some(first) = input.boards.first() else {
        return;
    };
    let mut tracker = CropTracker::initialize(&to_map(first));

    for (round, cells) in input.boards.iter().enumerate().skip(1).take(32) {
        if let Some(&(x, y, kind)) = input.plantings.get(round) {
            let coord = Coord::new(u16::from(x) % SIDE, u16::from(y) % SIDE);
            let kind = CropKind::ALL[usize::from(kind) % CropKind::ALL.len()];
            let crop = Crop::new(kind, 3, 0.0);
            assert!(tracker.mark_planted(coord, crop));
            assert_eq!(tracker.origin(coord), CropOrigin::Ours);
            assert_eq!(tracker.contested(coord), Some(&Crop::NONE));
        }

        let map = to_map(cells);
        tracker.reconcile(&map);
        for coord in tracker.bounds().cells() {
            assert!(
                tracker.owned(coord).is_some_and(Crop::is_none)
                    || tracker.contested(coord).is_some_and(Crop::is_none),
                "{coord} claimed by both grids"
            );
        }
        let settled = tracker.clone();
        assert!(tracker.reconcile(&map).is_empty(), "second reconcile changed state");
        assert_eq!(tracker, settled);
    }
});
