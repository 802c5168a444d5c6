//! Benchmarks for per-turn decisions.
//!
//! The action phase is the hot path: it reconciles the tracker and scores
//! every tile in harvest reach before walking the rule list.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fieldhand::game::{OpponentState, PlayerState};
use fieldhand::geometry::{Bounds, clamp_to_budget};
use fieldhand::tracking::CropTracker;
use fieldhand::{Bot, BotConfig, Coord, Crop, CropKind, Map, Snapshot, Tile, TileType};

const SIDE: u16 = 50;

/// A board with a crop on every third tile.
fn crowded_board() -> Map {
    let mut map = Map::filled(SIDE, SIDE, Tile::soil()).unwrap();
    map.set(Coord::new(SIDE / 2, 0), Tile::market());
    let cells = Bounds::new(SIDE, SIDE).cells();
    for (coord, &kind) in cells.zip(CropKind::ALL.iter().cycle()) {
        if (coord.x + coord.y) % 3 == 0 && !map.is_market(coord) {
            let crop = Crop::new(kind, u32::from(coord.x % 3), f64::from(coord.y));
            map.set(coord, Tile::with_crop(TileType::Soil, crop));
        }
    }
    map
}

fn snapshot(turn: u32) -> Snapshot {
    let mut player = PlayerState::new(Coord::new(10, 10));
    player.harvest_radius = 6;
    player.plant_radius = 4;
    player.seed_inventory.insert(CropKind::Corn, 12);
    let opponent = OpponentState {
        position: Coord::new(40, 40),
        protection_radius: 3,
    };
    Snapshot::new(turn, crowded_board(), player, opponent).unwrap()
}

fn bench_decide_turn(c: &mut Criterion) {
    let snap = snapshot(40);

    c.bench_function("decide_turn_50x50", |b| {
        b.iter(|| {
            let mut bot = Bot::new(BotConfig::default());
            let movement = bot.decide_move(black_box(&snap));
            let action = bot.decide_action(black_box(&snap));
            black_box((movement, action))
        });
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let first = Map::filled(SIDE, SIDE, Tile::soil()).unwrap();
    let next = crowded_board();

    c.bench_function("reconcile_50x50", |b| {
        b.iter(|| {
            let mut tracker = CropTracker::initialize(&first);
            black_box(tracker.reconcile(black_box(&next)))
        });
    });
}

fn bench_clamp(c: &mut Criterion) {
    let bounds = Bounds::new(SIDE, SIDE);

    c.bench_function("clamp_to_budget", |b| {
        b.iter(|| {
            clamp_to_budget(
                black_box(7),
                black_box(Coord::new(3, 40)),
                black_box(Coord::new(45, 2)),
                bounds,
            )
        });
    });
}

criterion_group!(benches, bench_decide_turn, bench_reconcile, bench_clamp);
criterion_main!(benches);
