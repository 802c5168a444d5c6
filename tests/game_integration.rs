//! Multi-turn integration tests for the decision engine.
//!
//! These tests drive whole games through a scripted in-memory link and
//! through the JSON lines link, checking that the bot walks to the market,
//! shops, plants on its ideal row and harvests what it planted.
//!
//! Run with: cargo test --release game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::io::{Cursor, Write};

use fieldhand::config::Loadout;
use fieldhand::game::{OpponentState, PlayerState};
use fieldhand::selector::ideal_row;
use fieldhand::{
    ActionDecision, Bot, BotConfig, Coord, Crop, CropKind, GameLink, JsonLinesLink, Map,
    MoveDecision, Snapshot, Tile, TileType, TransportError, play,
};

const SIDE: u16 = 12;
const MARKET: Coord = Coord::new(6, 0);

/// A link that replays queued snapshots and records every reply.
#[derive(Debug, Default)]
struct ScriptedLink {
    inbox: VecDeque<Snapshot>,
    loadout: Option<Loadout>,
    moves: Vec<MoveDecision>,
    actions: Vec<ActionDecision>,
}

impl ScriptedLink {
    fn new(snapshots: Vec<Snapshot>) -> Self {
        Self {
            inbox: snapshots.into(),
            ..Self::default()
        }
    }
}

impl GameLink for ScriptedLink {
    fn start(&mut self, loadout: &Loadout) -> Result<(), TransportError> {
        self.loadout = Some(*loadout);
        Ok(())
    }

    fn next_snapshot(&mut self) -> Result<Option<Snapshot>, TransportError> {
        Ok(self.inbox.pop_front())
    }

    fn send_move(&mut self, decision: &MoveDecision) -> Result<(), TransportError> {
        self.moves.push(*decision);
        Ok(())
    }

    fn send_action(&mut self, decision: &ActionDecision) -> Result<(), TransportError> {
        self.actions.push(decision.clone());
        Ok(())
    }
}

fn field() -> Map {
    let mut map = Map::filled(SIDE, SIDE, Tile::soil()).unwrap();
    map.set(MARKET, Tile::market());
    map
}

fn snapshot(turn: u32, map: Map, player: PlayerState) -> Snapshot {
    let opponent = OpponentState {
        position: Coord::new(SIDE - 1, SIDE - 1),
        protection_radius: 2,
    };
    Snapshot::new(turn, map, player, opponent).unwrap()
}

/// Both phases of a turn see the same state.
fn turn(turn: u32, map: &Map, player: &PlayerState) -> [Snapshot; 2] {
    let snap = snapshot(turn, map.clone(), player.clone());
    [snap.clone(), snap]
}

#[test]
fn test_opening_heads_to_market_and_shops() {
    let mut player = PlayerState::new(Coord::new(2, 5));
    player.money = 2_000;
    for kind in CropKind::ALL {
        player.seed_inventory.insert(kind, 0);
    }

    let map = field();
    let mut script: Vec<Snapshot> = turn(0, &map, &player).into();

    // The move reaches the market; the server echoes the new position.
    player.position = MARKET;
    let [before_move, _] = turn(0, &map, &player);
    script[1] = before_move;

    let mut link = ScriptedLink::new(script);
    let mut bot = Bot::new(BotConfig::default());
    let summary = play(&mut link, &mut bot).unwrap();

    assert_eq!(summary.turns, 1);
    assert_eq!(summary.purchases, 1);
    assert_eq!(link.loadout, Some(Loadout::default()));
    assert_eq!(link.moves, vec![MoveDecision::new(MARKET)]);
    assert_eq!(
        link.actions,
        vec![ActionDecision::buy_one(CropKind::GoldenCorn, 4)]
    );
}

#[test]
fn test_plant_then_harvest_own_crop() {
    let config = BotConfig::default();
    let start = 12;
    let row = ideal_row(start, &config, SIDE);

    let mut player = PlayerState::new(Coord::new(2, row));
    player.plant_radius = 0;
    player.harvest_radius = 0;
    player.seed_inventory.insert(CropKind::Corn, 1);

    let mut map = field();
    let mut script: Vec<Snapshot> = turn(start, &map, &player).into();

    // Radius zero covers the whole anti-diagonal; the first free cell in
    // row-major order is on the top row.
    let here = player.position;
    let planted = Coord::new(here.x + here.y, 0);

    // Turn after planting: the crop grows while the bot holds still.
    player.seed_inventory.insert(CropKind::Corn, 0);
    map.set(
        planted,
        Tile::with_crop(TileType::Soil, Crop::new(CropKind::Corn, 1, 3.0)),
    );
    script.extend(turn(start + 1, &map, &player));

    // Mature on the next turn and still within reach.
    map.set(
        planted,
        Tile::with_crop(TileType::Soil, Crop::new(CropKind::Corn, 0, 5.0)),
    );
    script.extend(turn(start + 2, &map, &player));

    let mut link = ScriptedLink::new(script);
    let mut bot = Bot::new(config);
    let summary = play(&mut link, &mut bot).unwrap();

    assert_eq!(summary.turns, 3);
    assert_eq!(summary.plants, 1);
    assert_eq!(summary.harvests, 1);

    let ActionDecision::Plant(order) = &link.actions[0] else {
        panic!("expected plant, got {}", link.actions[0]);
    };
    assert_eq!(order.coords(), &[planted]);
    assert_eq!(
        link.actions[2],
        ActionDecision::harvest(vec![planted])
    );

    // Cooldown keeps the bot in place.
    assert_eq!(link.moves[1], MoveDecision::new(here));
    assert_eq!(link.moves[2], MoveDecision::new(here));
}

#[test]
fn test_json_lines_game() {
    let mut player = PlayerState::new(Coord::new(4, 4));
    player.seed_inventory.insert(CropKind::Corn, 2);
    let map = field();

    let mut input = Vec::new();
    for turn_number in [10, 11] {
        for snap in turn(turn_number, &map, &player) {
            writeln!(input, "{}", raw_snapshot(&snap)).unwrap();
        }
    }

    let mut link = JsonLinesLink::new(Cursor::new(input), Vec::new());
    let mut bot = Bot::new(BotConfig::default());
    let summary = play(&mut link, &mut bot).unwrap();
    assert_eq!(summary.turns, 2);

    let sent = String::from_utf8(link.into_writer()).unwrap();
    let lines: Vec<serde_json::Value> = sent
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].get("loadout").is_some());
    assert!(lines[1].get("move").is_some());
    assert!(lines[2]["action"]["type"].is_string());
}

#[test]
fn test_stream_closed_mid_turn_is_fatal() {
    let [before_move, _] = turn(5, &field(), &PlayerState::new(Coord::new(1, 1)));
    let mut link = ScriptedLink::new(vec![before_move]);
    let mut bot = Bot::new(BotConfig::default());

    let result = play(&mut link, &mut bot);
    assert!(matches!(result, Err(TransportError::Closed)));
    assert_eq!(link.moves.len(), 1);
    assert!(link.actions.is_empty());
}

#[test]
fn test_config_file_changes_behavior() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"premium_crop": "ducham_fruit", "loadout": {{"item": "scarecrow", "upgrade": "backpack"}}}}"#
    )
    .unwrap();
    let config = BotConfig::load(file.path()).unwrap();

    let mut player = PlayerState::new(MARKET);
    player.money = 300;
    player.seed_inventory.insert(CropKind::Corn, 0);
    player.seed_inventory.insert(CropKind::Grape, 0);

    let script: Vec<Snapshot> = turn(20, &field(), &player).into();
    let mut link = ScriptedLink::new(script);
    let mut bot = Bot::new(config);
    play(&mut link, &mut bot).unwrap();

    let loadout = link.loadout.unwrap();
    assert_eq!(
        serde_json::to_value(loadout).unwrap(),
        serde_json::json!({"item": "scarecrow", "upgrade": "backpack"})
    );
    assert_eq!(
        link.actions,
        vec![ActionDecision::buy_one(CropKind::DuchamFruit, 2)]
    );
}

/// Wire form of a snapshot, as the game server sends it.
fn raw_snapshot(snap: &Snapshot) -> serde_json::Value {
    serde_json::json!({
        "turn": snap.turn,
        "width": snap.map.width(),
        "height": snap.map.height(),
        "tiles": snap.map.tiles(),
        "player": snap.player,
        "opponent": snap.opponent,
    })
}
