use crate::r#match::{
    ActionEvaluator, ActionExecutor, EventCollection, EventDispatcher, MatchContext, MatchField,
    MatchPositionData, MatchSnapshot, PossessionResolver, Score, PITCH_HEIGHT, PITCH_WIDTH,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Real time between host frames is clamped to this step so a stalled
/// host (e.g. a backgrounded tab) cannot produce implausible jumps.
pub const MAX_FRAME_STEP_MS: f32 = 50.0;

pub const MIN_PLAYERS_PER_TEAM: usize = 2;
pub const MAX_PLAYERS_PER_TEAM: usize = 11;
pub const DEFAULT_PLAYERS_PER_TEAM: usize = 5;

/// Coerce host input to a usable squad size: missing or non-numeric
/// values become the default, out-of-range values are clamped. Silent
/// correction, not an error.
pub fn coerce_players_per_team(value: Option<i64>) -> usize {
    value
        .unwrap_or(DEFAULT_PLAYERS_PER_TEAM as i64)
        .clamp(MIN_PLAYERS_PER_TEAM as i64, MAX_PLAYERS_PER_TEAM as i64) as usize
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub players_per_team: usize,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            players_per_team: DEFAULT_PLAYERS_PER_TEAM,
            seed: 0,
        }
    }
}

/// The match loop driver. Owns the whole of the match state plus the
/// seeded random source; the host supplies scheduling by calling
/// `advance` once per frame.
pub struct MatchEngine {
    pub field: MatchField,
    pub context: MatchContext,
    rng: StdRng,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        let players_per_team = config
            .players_per_team
            .clamp(MIN_PLAYERS_PER_TEAM, MAX_PLAYERS_PER_TEAM);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let field = MatchField::new(PITCH_WIDTH, PITCH_HEIGHT, players_per_team, &mut rng);
        let context = MatchContext::new(&field);

        MatchEngine {
            field,
            context,
            rng,
        }
    }

    /// Run one simulation step of at most `MAX_FRAME_STEP_MS`. Does
    /// nothing while paused.
    pub fn advance(&mut self, elapsed_ms: f32) {
        let dt = elapsed_ms.min(MAX_FRAME_STEP_MS);

        if !self.context.running {
            return;
        }

        self.context.time.increment(dt);
        self.game_tick(dt);
    }

    fn game_tick(&mut self, dt: f32) {
        self.try_action();

        let mut events = EventCollection::new();

        let MatchField {
            players,
            ball,
            size,
        } = &mut self.field;

        for player in players.iter_mut() {
            player.update(dt, ball, size, &mut self.rng);
        }

        ball.update(dt, &self.context, &mut events);

        EventDispatcher::dispatch(events, &mut self.field, &mut self.context);
    }

    /// One action decision per cooldown window, for the current possessor
    /// only. The window is consumed once a possessor passes the
    /// attachment check, whatever the outcome of the action itself.
    fn try_action(&mut self) {
        let now = self.context.time.millis;
        if !self.context.action_cooldown.is_ready(now) {
            return;
        }

        let Some(possessor_id) = PossessionResolver::resolve(&self.field.players, &self.field.ball)
        else {
            return;
        };

        // A ball attached to somebody else is not up for decisions.
        if self
            .field
            .ball
            .owner
            .is_some_and(|owner| owner != possessor_id)
        {
            return;
        }

        self.context.action_cooldown.trigger(now);

        let Some(possessor) = self.field.players.iter().find(|p| p.id == possessor_id) else {
            return;
        };

        let action = ActionEvaluator::choose(
            possessor,
            &self.field.players,
            &self.field.ball,
            &self.context.field_size,
        );

        debug!("player {} decided to {:?}", possessor_id, action);

        ActionExecutor::execute(
            action,
            possessor,
            &self.field.players,
            &mut self.field.ball,
            &self.context.field_size,
            &mut self.rng,
        );
    }

    pub fn start(&mut self) {
        if !self.context.running {
            self.context.running = true;
            info!("match running at {}", self.context.time.display());
        }
    }

    pub fn pause(&mut self) {
        self.context.running = false;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.context.running = !self.context.running;
        self.context.running
    }

    /// Back to kickoff: fresh formation, score 0-0, clock and cooldowns
    /// zeroed, match paused.
    pub fn reset(&mut self, players_per_team: usize) {
        let n = players_per_team.clamp(MIN_PLAYERS_PER_TEAM, MAX_PLAYERS_PER_TEAM);

        self.context.reset();
        self.field.reset(n, &mut self.rng);

        info!("match reset with {} players per team", n);
    }

    pub fn is_running(&self) -> bool {
        self.context.running
    }

    pub fn score(&self) -> Score {
        self.context.score
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.context.time.seconds()
    }

    /// Scoreboard clock, `M:SS`.
    pub fn clock_display(&self) -> String {
        self.context.time.display()
    }

    /// Everything the host needs to draw the current frame.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::new(&self.field, &self.context)
    }

    /// Append the current ball and player positions to a recording.
    pub fn write_positions(&self, data: &mut MatchPositionData) {
        let timestamp = self.context.time.millis as u64;

        for player in &self.field.players {
            data.add_player_position(player.id, timestamp, player.position);
        }

        data.add_ball_position(timestamp, self.field.ball.position);
    }
}
