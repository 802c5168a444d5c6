//! Turn decision selector.
//!
//! Each phase of a turn is decided by an ordered list of guarded rules.
//! Rules are evaluated in priority order and the first one whose guard holds
//! produces the decision. The only state carried between turns is the
//! [`Session`]: the crop tracker and the turn this bot last planted.
//!
//! ```text
//! snapshot ──> reconcile tracker ──> TurnContext ──> first matching rule ──> decision
//! ```

mod rules;

pub use rules::{
    ACTION_RULES, MOVE_RULES, Rule, evaluate, ideal_row, market_target,
};

use crate::config::BotConfig;
use crate::decision::{ActionDecision, MoveDecision, PlantOrder};
use crate::game::{Coord, Crop, Map, Snapshot};
use crate::scorer::{ScoredTile, harvest_targets, plantable_cells};
use crate::tracking::CropTracker;

/// State that persists for the whole game.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    tracker: CropTracker,
    last_planted: Option<u32>,
}

impl Session {
    /// Start a session from the first board of the game.
    #[must_use]
    pub fn start(map: &Map) -> Self {
        Self {
            tracker: CropTracker::initialize(map),
            last_planted: None,
        }
    }

    /// The crop tracker.
    #[must_use]
    pub const fn tracker(&self) -> &CropTracker {
        &self.tracker
    }

    /// Turn of the most recent plant decision.
    #[must_use]
    pub const fn last_planted(&self) -> Option<u32> {
        self.last_planted
    }

    /// Remember a plant decision so its crops are not mistaken for the
    /// opponent's on the next reconciliation.
    pub fn record_plant(&mut self, turn: u32, order: &PlantOrder) {
        self.last_planted = Some(turn);
        for (kind, coord) in order.pairs() {
            self.tracker.mark_planted(coord, Crop::new(kind, 0, 0.0));
        }
    }
}

/// Everything a rule may look at for one phase.
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    /// Current snapshot.
    pub snapshot: &'a Snapshot,
    /// Policy thresholds.
    pub config: &'a BotConfig,
    /// Turn of the most recent plant decision.
    pub last_planted: Option<u32>,
    /// Target planting row for this turn.
    pub ideal_row: u16,
    /// Ranked harvest targets in reach (action phase only).
    pub harvest_targets: Vec<ScoredTile>,
    /// Empty plantable tiles in reach (action phase only).
    pub plant_tiles: Vec<Coord>,
}

impl<'a> TurnContext<'a> {
    /// Context for the move phase.
    #[must_use]
    pub fn for_move(snapshot: &'a Snapshot, config: &'a BotConfig, session: &Session) -> Self {
        Self {
            snapshot,
            config,
            last_planted: session.last_planted,
            ideal_row: ideal_row(snapshot.turn, config, snapshot.map.height()),
            harvest_targets: Vec::new(),
            plant_tiles: Vec::new(),
        }
    }

    /// Context for the action phase, with harvest and plant targets scored.
    #[must_use]
    pub fn for_action(snapshot: &'a Snapshot, config: &'a BotConfig, session: &Session) -> Self {
        let player = &snapshot.player;
        Self {
            harvest_targets: harvest_targets(snapshot, &session.tracker),
            plant_tiles: plantable_cells(&snapshot.map, player.position, player.plant_radius),
            ..Self::for_move(snapshot, config, session)
        }
    }

    /// Check if the player stands on a market tile.
    #[must_use]
    pub fn on_market(&self) -> bool {
        self.snapshot.on_market()
    }
}

/// The decision engine for one game.
#[derive(Debug, Clone)]
pub struct Bot {
    config: BotConfig,
    session: Option<Session>,
}

impl Bot {
    /// Create a bot. The session starts with the first snapshot.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// The bot's configuration.
    #[must_use]
    pub const fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The game session, once the first snapshot has been seen.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Decide where to move this turn.
    pub fn decide_move(&mut self, snapshot: &Snapshot) -> MoveDecision {
        log_feedback(snapshot, "move");
        let session = observe(&mut self.session, &snapshot.map);
        let ctx = TurnContext::for_move(snapshot, &self.config, session);

        let (rule, decision) = evaluate(MOVE_RULES, &ctx)
            .unwrap_or(("fallback", MoveDecision::new(snapshot.player.position)));

        tracing::info!(
            turn = snapshot.turn,
            rule,
            from = %snapshot.player.position,
            "{decision}"
        );
        decision
    }

    /// Decide the action for this turn.
    ///
    /// A plant decision is recorded in the session before it is returned.
    pub fn decide_action(&mut self, snapshot: &Snapshot) -> ActionDecision {
        log_feedback(snapshot, "action");
        let session = observe(&mut self.session, &snapshot.map);
        let ctx = TurnContext::for_action(snapshot, &self.config, session);

        tracing::debug!(
            harvestable = ctx.harvest_targets.len(),
            plantable = ctx.plant_tiles.len(),
            ideal_row = ctx.ideal_row,
            "action candidates"
        );

        let (rule, decision) =
            evaluate(ACTION_RULES, &ctx).unwrap_or(("fallback", ActionDecision::Pass));

        if let ActionDecision::Plant(order) = &decision {
            session.record_plant(snapshot.turn, order);
        }

        tracing::info!(turn = snapshot.turn, rule, "{decision}");
        decision
    }
}

/// Engine feedback on the previous decision, as sent with the snapshot.
fn log_feedback(snapshot: &Snapshot, phase: &'static str) {
    if !snapshot.feedback.is_empty() {
        tracing::debug!(
            turn = snapshot.turn,
            phase,
            feedback = ?snapshot.feedback,
            "engine feedback"
        );
    }
}

/// Start the session on the first snapshot, reconcile on every later one.
fn observe<'s>(slot: &'s mut Option<Session>, map: &Map) -> &'s mut Session {
    let fresh = slot.is_none();
    let session = slot.get_or_insert_with(|| Session::start(map));

    if fresh {
        tracing::debug!(
            owned = session.tracker.owned_count(),
            "crop tracker initialized"
        );
    } else {
        let report = session.tracker.reconcile(map);
        if !report.is_empty() {
            tracing::debug!(
                grown = report.grown,
                lost = report.lost,
                contested = report.contested_updates,
                "crop tracker reconciled"
            );
        }
    }

    session
}
