use crate::r#match::{GoalPosition, MatchField, MatchFieldSize, Team};
use serde::Serialize;

pub const ACTION_COOLDOWN_MS: f32 = 700.0;
pub const GOAL_COOLDOWN_MS: f32 = 150.0;

/// Per-match mutable state shared by the tick pipeline. Owned by the
/// engine instance; nothing here lives in process-wide statics.
pub struct MatchContext {
    pub time: MatchTime,
    pub score: Score,
    pub running: bool,
    pub field_size: MatchFieldSize,
    pub goal_positions: GoalPosition,
    pub action_cooldown: Cooldown,
    pub goal_cooldown: Cooldown,
}

impl MatchContext {
    pub fn new(field: &MatchField) -> Self {
        MatchContext {
            time: MatchTime::new(),
            score: Score::new(),
            running: false,
            field_size: field.size.clone(),
            goal_positions: GoalPosition::from(&field.size),
            action_cooldown: Cooldown::new(ACTION_COOLDOWN_MS),
            goal_cooldown: Cooldown::new(GOAL_COOLDOWN_MS),
        }
    }

    pub fn reset(&mut self) {
        self.time = MatchTime::new();
        self.score = Score::new();
        self.running = false;
        self.action_cooldown.reset();
        self.goal_cooldown.reset();
    }
}

/// Elapsed simulated time in milliseconds, monotonic while running.
pub struct MatchTime {
    pub millis: f32,
}

impl MatchTime {
    pub fn new() -> Self {
        MatchTime { millis: 0.0 }
    }

    #[inline]
    pub fn increment(&mut self, val: f32) -> f32 {
        self.millis += val;
        self.millis
    }

    pub fn seconds(&self) -> f32 {
        self.millis / 1000.0
    }

    /// Scoreboard clock, `M:SS`.
    pub fn display(&self) -> String {
        let total = self.seconds() as u32;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

impl Default for MatchTime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn increment(&mut self, team: Team) {
        match team {
            Team::Home => self.home += 1,
            Team::Away => self.away += 1,
        }
    }

    pub fn of(&self, team: Team) -> u8 {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }
}

/// Minimum simulated-time interval between repeated triggers of one
/// decision class. `last_trigger == None` means armed: the first trigger
/// is never gated.
#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    pub window_ms: f32,
    pub last_trigger: Option<f32>,
}

impl Cooldown {
    pub fn new(window_ms: f32) -> Self {
        Cooldown {
            window_ms,
            last_trigger: None,
        }
    }

    pub fn is_ready(&self, now: f32) -> bool {
        self.last_trigger
            .is_none_or(|last| now - last >= self.window_ms)
    }

    pub fn trigger(&mut self, now: f32) {
        self.last_trigger = Some(now);
    }

    pub fn reset(&mut self) {
        self.last_trigger = None;
    }
}
