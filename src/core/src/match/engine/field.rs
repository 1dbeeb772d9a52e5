use crate::r#match::ball::events::GoalSide;
use crate::r#match::ball::Ball;
use crate::r#match::{MatchPlayer, Team, BALL_RADIUS};
use nalgebra::Vector2;
use rand::Rng;
use rand::RngExt;

pub const PITCH_WIDTH: f32 = 800.0;
pub const PITCH_HEIGHT: f32 = 500.0;
pub const GOAL_MOUTH_WIDTH: f32 = 120.0;

/// Formation layout: both teams spread between their goal line and the
/// halfway line, with a little seeded jitter so restarts differ.
const FORMATION_EDGE_INSET: f32 = 60.0;
const FORMATION_SPREAD_RESERVE: f32 = 100.0;
const FORMATION_JITTER_X: f32 = 12.5;
const FORMATION_JITTER_Y: f32 = 7.5;

#[derive(Clone)]
pub struct MatchFieldSize {
    pub width: f32,
    pub height: f32,
    pub half_width: f32,
}

impl MatchFieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        MatchFieldSize {
            width,
            height,
            half_width: width / 2.0,
        }
    }
}

#[derive(Clone)]
pub struct GoalPosition {
    pub left: Vector2<f32>,
    pub right: Vector2<f32>,
    pub mouth_width: f32,
}

impl From<&MatchFieldSize> for GoalPosition {
    fn from(value: &MatchFieldSize) -> Self {
        GoalPosition {
            left: Vector2::new(0.0, value.height / 2.0),
            right: Vector2::new(value.width, value.height / 2.0),
            mouth_width: GOAL_MOUTH_WIDTH,
        }
    }
}

impl GoalPosition {
    /// A crossing counts once the whole ball is past the line. The full
    /// goal line scores; the mouth width is render geometry only.
    pub fn is_goal(&self, ball_position: Vector2<f32>) -> Option<GoalSide> {
        if ball_position.x < self.left.x - BALL_RADIUS {
            return Some(GoalSide::Home);
        }

        if ball_position.x > self.right.x + BALL_RADIUS {
            return Some(GoalSide::Away);
        }

        None
    }
}

pub struct MatchField {
    pub size: MatchFieldSize,
    pub ball: Ball,
    pub players: Vec<MatchPlayer>,
}

impl MatchField {
    pub fn new(width: f32, height: f32, players_per_team: usize, rng: &mut impl Rng) -> Self {
        let size = MatchFieldSize::new(width, height);
        let players = setup_players_on_field(players_per_team, &size, rng);

        MatchField {
            ball: Ball::with_coord(width, height),
            size,
            players,
        }
    }

    /// Replace every player with a freshly seeded formation and put the
    /// ball back on the center spot.
    pub fn reset(&mut self, players_per_team: usize, rng: &mut impl Rng) {
        self.players = setup_players_on_field(players_per_team, &self.size, rng);
        self.ball.reset();
    }

    pub fn get_player(&self, id: u32) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.id == id)
    }
}

fn setup_players_on_field(
    players_per_team: usize,
    size: &MatchFieldSize,
    rng: &mut impl Rng,
) -> Vec<MatchPlayer> {
    let n = players_per_team;
    let spacing_x = (size.half_width - FORMATION_SPREAD_RESERVE) / (n.saturating_sub(1).max(1)) as f32;
    let spacing_y = size.height / (n + 1) as f32;

    let mut players = Vec::with_capacity(n * 2);

    for i in 0..n {
        players.push(MatchPlayer::new(
            i as u32,
            Team::Home,
            Vector2::new(
                FORMATION_EDGE_INSET
                    + i as f32 * spacing_x
                    + rng.random_range(-FORMATION_JITTER_X..FORMATION_JITTER_X),
                spacing_y * (i + 1) as f32
                    + rng.random_range(-FORMATION_JITTER_Y..FORMATION_JITTER_Y),
            ),
        ));
    }

    for i in 0..n {
        players.push(MatchPlayer::new(
            (n + i) as u32,
            Team::Away,
            Vector2::new(
                size.width
                    - FORMATION_EDGE_INSET
                    - i as f32 * spacing_x
                    + rng.random_range(-FORMATION_JITTER_X..FORMATION_JITTER_X),
                spacing_y * (i + 1) as f32
                    + rng.random_range(-FORMATION_JITTER_Y..FORMATION_JITTER_Y),
            ),
        ));
    }

    players
}
