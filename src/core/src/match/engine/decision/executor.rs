use crate::r#match::ball::Ball;
use crate::r#match::{
    geometry, ActionEvaluator, MatchFieldSize, MatchPlayer, PlayerAction, Team, PASS_LANE_RADIUS,
};
use nalgebra::Vector2;
use rand::Rng;
use rand::RngExt;

pub const PASS_POWER: f32 = 0.38;
pub const SHOT_POWER: f32 = 0.42;

/// Receivers qualify inside this open distance band at execution time.
const PASS_MIN_DISTANCE: f32 = 40.0;
const PASS_MAX_DISTANCE: f32 = 200.0;

/// Shots aim just past the goal line with a bounded vertical spread.
const SHOT_OVERSHOOT: f32 = 10.0;
const SHOT_SPREAD: f32 = 25.0;

/// Applies the chosen action. Side effects are confined to the ball's
/// velocity and attachment; player state is never touched here.
pub struct ActionExecutor;

impl ActionExecutor {
    pub fn execute(
        action: PlayerAction,
        possessor: &MatchPlayer,
        players: &[MatchPlayer],
        ball: &mut Ball,
        size: &MatchFieldSize,
        rng: &mut impl Rng,
    ) {
        match action {
            PlayerAction::Dribble => {
                ball.owner = Some(possessor.id);
            }
            PlayerAction::Pass => Self::execute_pass(possessor, players, ball),
            PlayerAction::Shoot => Self::execute_shoot(possessor, ball, size, rng),
        }
    }

    /// Kick to the best-placed open teammate. Finding none is a designed
    /// fallback: the ball is left exactly as it was.
    fn execute_pass(possessor: &MatchPlayer, players: &[MatchPlayer], ball: &mut Ball) {
        let mut best: Option<(&MatchPlayer, f32)> = None;

        for teammate in players
            .iter()
            .filter(|p| p.team == possessor.team && p.id != possessor.id)
        {
            let dist = geometry::distance(ball.position, teammate.position);
            if dist <= PASS_MIN_DISTANCE || dist >= PASS_MAX_DISTANCE {
                continue;
            }
            if !ActionEvaluator::is_lane_clear(
                players,
                ball.position,
                teammate.position,
                teammate.id,
                PASS_LANE_RADIUS,
            ) {
                continue;
            }

            let score = 1.0 - dist / PASS_MAX_DISTANCE;
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((teammate, score));
            }
        }

        if let Some((receiver, _)) = best {
            Self::kick_toward(ball, receiver.position, PASS_POWER);
        }
    }

    fn execute_shoot(
        possessor: &MatchPlayer,
        ball: &mut Ball,
        size: &MatchFieldSize,
        rng: &mut impl Rng,
    ) {
        let target = Vector2::new(
            match possessor.team {
                Team::Home => size.width + SHOT_OVERSHOOT,
                Team::Away => -SHOT_OVERSHOOT,
            },
            size.height / 2.0 + rng.random_range(-SHOT_SPREAD..SHOT_SPREAD),
        );

        Self::kick_toward(ball, target, SHOT_POWER);
    }

    fn kick_toward(ball: &mut Ball, target: Vector2<f32>, power: f32) {
        ball.owner = None;
        ball.velocity = geometry::direction(ball.position, target) * power;
    }
}
