use crate::r#match::ball::Ball;
use crate::r#match::{geometry, MatchFieldSize, SteeringBehavior, BALL_RADIUS};
use nalgebra::Vector2;
use rand::Rng;
use rand::RngExt;
use serde::Serialize;

pub const PLAYER_RADIUS: f32 = 14.0;

/// Inset from the opponent goal line the possessor drives toward.
const GOAL_APPROACH_INSET: f32 = 30.0;
/// The dribbled ball trails the possessor by velocity times this factor.
const BALL_TRAIL_FACTOR: f32 = 8.0;
/// Attachment breaks when the trailed ball ends up further away than this
/// (clamping at a wall can force it).
const POSSESSION_BREAK_DISTANCE: f32 = 50.0;

/// Off-ball players inside this ball distance take up a support position.
const SUPPORT_DISTANCE: f32 = 220.0;
const SUPPORT_OFFSET: f32 = 45.0;
const SUPPORT_HALF_FALLBACK: f32 = 90.0;

const WANDER_JITTER_X: f32 = 25.0;
const WANDER_JITTER_Y: f32 = 17.5;
const WANDER_HALF_FALLBACK: f32 = 100.0;
const WANDER_MARGIN: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Team {
    /// Attacks toward increasing x (goal line at x = width).
    Home,
    /// Attacks toward decreasing x (goal line at x = 0).
    Away,
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub team: Team,
    pub position: Vector2<f32>,
    pub start_position: Vector2<f32>,
    pub velocity: Vector2<f32>,
}

impl MatchPlayer {
    pub fn new(id: u32, team: Team, position: Vector2<f32>) -> Self {
        MatchPlayer {
            id,
            team,
            position,
            start_position: position,
            velocity: Vector2::zeros(),
        }
    }

    /// Advance this player one tick. The possessor drives at the opponent
    /// goal and carries the ball; everyone else supports or wanders inside
    /// their own half. Both regimes share the same locomotion constants.
    pub fn update(
        &mut self,
        dt: f32,
        ball: &mut Ball,
        size: &MatchFieldSize,
        rng: &mut impl Rng,
    ) {
        if ball.owner == Some(self.id) {
            self.update_as_possessor(dt, ball, size);
        } else {
            self.update_off_ball(dt, ball, size, rng);
        }
    }

    fn update_as_possessor(&mut self, dt: f32, ball: &mut Ball, size: &MatchFieldSize) {
        let target = Vector2::new(
            match self.team {
                Team::Home => size.width - GOAL_APPROACH_INSET,
                Team::Away => GOAL_APPROACH_INSET,
            },
            size.height / 2.0,
        );

        self.velocity = SteeringBehavior::Seek { target }.calculate(self, dt).velocity;
        self.move_to();
        self.clamp_to_pitch(size);

        // Ball rides ahead of the carrier; its own velocity stays zeroed
        // while attached. Only y is clamped here: carrying it across the
        // goal line is a scoring path.
        ball.position = self.position + self.velocity * BALL_TRAIL_FACTOR;
        ball.velocity = Vector2::zeros();
        ball.position.y = ball
            .position
            .y
            .clamp(BALL_RADIUS, size.height - BALL_RADIUS);

        if geometry::distance(ball.position, self.position) > POSSESSION_BREAK_DISTANCE {
            ball.owner = None;
        }
    }

    fn update_off_ball(
        &mut self,
        dt: f32,
        ball: &Ball,
        size: &MatchFieldSize,
        rng: &mut impl Rng,
    ) {
        let dist_to_ball = geometry::distance(self.position, ball.position);

        let behavior = if dist_to_ball < SUPPORT_DISTANCE {
            let mut target =
                ball.position - geometry::direction(self.position, ball.position) * SUPPORT_OFFSET;
            if !self.is_in_own_half(target.x, size) {
                target.x = self.own_half_fallback_x(size, SUPPORT_HALF_FALLBACK);
            }
            SteeringBehavior::Seek { target }
        } else {
            let mut target = self.position
                + Vector2::new(
                    rng.random_range(-WANDER_JITTER_X..WANDER_JITTER_X),
                    rng.random_range(-WANDER_JITTER_Y..WANDER_JITTER_Y),
                );
            if !self.is_in_own_half(target.x, size) {
                target.x = self.own_half_fallback_x(size, WANDER_HALF_FALLBACK);
            }
            target.x = target.x.clamp(WANDER_MARGIN, size.width - WANDER_MARGIN);
            target.y = target.y.clamp(WANDER_MARGIN, size.height - WANDER_MARGIN);
            SteeringBehavior::Wander { target }
        };

        self.velocity = behavior.calculate(self, dt).velocity;
        self.move_to();
        self.clamp_to_pitch(size);
    }

    fn move_to(&mut self) {
        self.position += self.velocity;
    }

    fn clamp_to_pitch(&mut self, size: &MatchFieldSize) {
        self.position.x = self
            .position
            .x
            .clamp(PLAYER_RADIUS, size.width - PLAYER_RADIUS);
        self.position.y = self
            .position
            .y
            .clamp(PLAYER_RADIUS, size.height - PLAYER_RADIUS);
    }

    fn is_in_own_half(&self, x: f32, size: &MatchFieldSize) -> bool {
        match self.team {
            Team::Home => x < size.half_width,
            Team::Away => x > size.half_width,
        }
    }

    fn own_half_fallback_x(&self, size: &MatchFieldSize, offset: f32) -> f32 {
        match self.team {
            Team::Home => size.half_width - offset,
            Team::Away => size.half_width + offset,
        }
    }
}
