//! Priority-ordered rules for the move and action phases.

use crate::config::BotConfig;
use crate::decision::{ActionDecision, MoveDecision};
use crate::game::{Coord, CropKind, Snapshot};
use crate::geometry::{clamp_to_budget, distance};
use crate::selector::TurnContext;

/// A guarded rule: IF `applies` THEN `decide`.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    /// Name used in logs.
    pub name: &'static str,
    /// Guard over the turn context.
    pub applies: fn(&TurnContext<'_>) -> bool,
    /// Decision produced when the guard holds.
    pub decide: fn(&TurnContext<'_>) -> T,
}

/// Move-phase rules, highest priority first.
pub const MOVE_RULES: &[Rule<MoveDecision>] = &[
    Rule {
        name: "market-window",
        applies: in_market_window,
        decide: toward_market,
    },
    Rule {
        name: "plant-cooldown",
        applies: cooling_down,
        decide: hold,
    },
    Rule {
        name: "restock",
        applies: needs_market,
        decide: toward_market,
    },
    Rule {
        name: "ideal-row",
        applies: always,
        decide: toward_ideal_row,
    },
];

/// Action-phase rules, highest priority first.
pub const ACTION_RULES: &[Rule<ActionDecision>] = &[
    Rule {
        name: "buy",
        applies: can_shop,
        decide: buy_or_pass,
    },
    Rule {
        name: "harvest",
        applies: has_harvest,
        decide: harvest_all,
    },
    Rule {
        name: "plant",
        applies: can_plant,
        decide: plant_seeds,
    },
    Rule {
        name: "pass",
        applies: always,
        decide: pass,
    },
];

/// Run `rules` in order and return the first match with its rule name.
#[must_use]
pub fn evaluate<T>(rules: &[Rule<T>], ctx: &TurnContext<'_>) -> Option<(&'static str, T)> {
    rules
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.name, (rule.decide)(ctx)))
}

/// Target planting row for `turn`. Advances one row every
/// `ideal_row_period` turns and stops at the last row.
#[must_use]
pub fn ideal_row(turn: u32, config: &BotConfig, height: u16) -> u16 {
    let advance = turn.checked_div(config.ideal_row_period).unwrap_or(0);
    let row = u32::from(config.ideal_row_start).saturating_add(advance);
    let last = u32::from(height.saturating_sub(1));
    u16::try_from(row.min(last)).unwrap_or(u16::MAX)
}

/// Nearest market tile to the player, or the middle of the top row if the
/// board has none.
#[must_use]
pub fn market_target(snapshot: &Snapshot) -> Coord {
    let position = snapshot.player.position;
    snapshot
        .map
        .market_tiles()
        .min_by_key(|&market| (distance(position, market), market.row_major_key()))
        .unwrap_or_else(|| {
            tracing::warn!("no market tile on the board");
            Coord::new(snapshot.map.width() / 2, 0)
        })
}

fn always(_ctx: &TurnContext<'_>) -> bool {
    true
}

fn in_market_window(ctx: &TurnContext<'_>) -> bool {
    let turn = ctx.snapshot.turn;
    turn < ctx.config.early_market_turns || turn > ctx.config.late_market_turn
}

fn cooling_down(ctx: &TurnContext<'_>) -> bool {
    ctx.last_planted
        .is_some_and(|planted| ctx.snapshot.turn.saturating_sub(planted) < ctx.config.plant_cooldown)
}

fn needs_market(ctx: &TurnContext<'_>) -> bool {
    let player = &ctx.snapshot.player;
    !player.harvested_inventory.is_empty() || player.total_seeds() == 0
}

fn toward(ctx: &TurnContext<'_>, target: Coord) -> MoveDecision {
    let player = &ctx.snapshot.player;
    MoveDecision::new(clamp_to_budget(
        player.max_movement,
        player.position,
        target,
        ctx.snapshot.map.bounds(),
    ))
}

fn toward_market(ctx: &TurnContext<'_>) -> MoveDecision {
    toward(ctx, market_target(ctx.snapshot))
}

fn toward_ideal_row(ctx: &TurnContext<'_>) -> MoveDecision {
    let position = ctx.snapshot.player.position;
    toward(ctx, Coord::new(position.x, ctx.ideal_row))
}

fn hold(ctx: &TurnContext<'_>) -> MoveDecision {
    MoveDecision::new(ctx.snapshot.player.position)
}

fn can_shop(ctx: &TurnContext<'_>) -> bool {
    ctx.on_market() && ctx.snapshot.player.money < ctx.config.money_ceiling
}

/// Largest affordable order of `kind`, capped at one per tracked seed kind.
fn purchase(ctx: &TurnContext<'_>, kind: CropKind) -> Option<ActionDecision> {
    let player = &ctx.snapshot.player;
    let price = ctx.config.seed_price(kind)?;
    let cap = u32::try_from(player.seed_kinds()).unwrap_or(u32::MAX).max(1);
    let quantity = (player.money / price).min(cap);
    (quantity > 0).then(|| ActionDecision::buy_one(kind, quantity))
}

fn buy_or_pass(ctx: &TurnContext<'_>) -> ActionDecision {
    let low_on_seeds = ctx.snapshot.player.total_seeds() < ctx.config.low_seed_threshold;

    purchase(ctx, ctx.config.premium_crop)
        .or_else(|| {
            if low_on_seeds {
                purchase(ctx, ctx.config.fallback_crop)
            } else {
                None
            }
        })
        .unwrap_or(ActionDecision::Pass)
}

fn has_harvest(ctx: &TurnContext<'_>) -> bool {
    !ctx.harvest_targets.is_empty()
}

fn harvest_all(ctx: &TurnContext<'_>) -> ActionDecision {
    ActionDecision::harvest(ctx.harvest_targets.iter().map(|target| target.coord).collect())
}

fn can_plant(ctx: &TurnContext<'_>) -> bool {
    let player = &ctx.snapshot.player;
    player.total_seeds() > 0
        && !ctx.on_market()
        && player.position.y == ctx.ideal_row
        && !ctx.plant_tiles.is_empty()
}

/// Pair held seeds, in crop order, with plantable tiles in row-major order.
fn plant_seeds(ctx: &TurnContext<'_>) -> ActionDecision {
    let seeds = ctx
        .snapshot
        .player
        .seed_inventory
        .iter()
        .flat_map(|(&kind, &count)| {
            std::iter::repeat_n(kind, usize::try_from(count).unwrap_or(usize::MAX))
        });
    ActionDecision::plant_pairs(seeds.zip(ctx.plant_tiles.iter().copied()))
}

fn pass(_ctx: &TurnContext<'_>) -> ActionDecision {
    ActionDecision::Pass
}
