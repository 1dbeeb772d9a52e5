use crate::r#match::ball::events::BallEvent;
use crate::r#match::events::EventCollection;
use crate::r#match::MatchContext;
use nalgebra::Vector2;

pub const BALL_RADIUS: f32 = 10.0;

/// Per-tick velocity retention in free flight.
const DRAG: f32 = 0.992;
/// Velocity kept after a top/bottom wall rebound.
const WALL_RESTITUTION: f32 = 0.6;

pub struct Ball {
    pub start_position: Vector2<f32>,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    /// Id of the dribbling player. The ball never owns the player; the
    /// possessor is derived from this each tick.
    pub owner: Option<u32>,
}

impl Ball {
    pub fn with_coord(field_width: f32, field_height: f32) -> Self {
        let center = Vector2::new(field_width / 2.0, field_height / 2.0);

        Ball {
            start_position: center,
            position: center,
            velocity: Vector2::zeros(),
            owner: None,
        }
    }

    /// Advance the ball one tick: goal check first, then free flight.
    /// When a crossing registers, flight is skipped for the tick and the
    /// dispatcher finishes the goal (score, kickoff reset).
    pub fn update(&mut self, dt: f32, context: &MatchContext, events: &mut EventCollection) {
        let now = context.time.millis;
        let detection_armed = context.goal_cooldown.is_ready(now);

        if detection_armed {
            if let Some(side) = context.goal_positions.is_goal(self.position) {
                events.add_ball_event(BallEvent::Goal(side));
                return;
            }
        }

        // While attached, position is driven by the possessor regime.
        if self.owner.is_some() {
            return;
        }

        self.velocity *= DRAG;
        self.position += self.velocity * dt;

        let height = context.field_size.height;
        if self.position.y < BALL_RADIUS {
            self.position.y = BALL_RADIUS;
            self.velocity.y *= -WALL_RESTITUTION;
        }
        if self.position.y > height - BALL_RADIUS {
            self.position.y = height - BALL_RADIUS;
            self.velocity.y *= -WALL_RESTITUTION;
        }

        // The x clamp is suspended while detection is armed so a crossing
        // can register on the next tick; it is enforced during the
        // post-goal window to keep a lingering ball on the pitch.
        if !detection_armed {
            self.position.x = self
                .position
                .x
                .clamp(BALL_RADIUS, context.field_size.width - BALL_RADIUS);
        }
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector2::zeros();
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::ball::events::GoalSide;
    use crate::r#match::events::Event;
    use crate::r#match::{MatchContext, MatchField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context() -> MatchContext {
        let mut rng = StdRng::seed_from_u64(1);
        let field = MatchField::new(800.0, 500.0, 2, &mut rng);
        MatchContext::new(&field)
    }

    #[test]
    fn test_free_flight_applies_drag() {
        let context = context();
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.velocity = Vector2::new(0.2, 0.0);

        let mut events = EventCollection::new();
        ball.update(10.0, &context, &mut events);

        assert!((ball.velocity.x - 0.2 * 0.992).abs() < 1e-6);
        assert!((ball.position.x - (400.0 + 0.2 * 0.992 * 10.0)).abs() < 1e-4);
        assert!(events.events.is_empty());
    }

    #[test]
    fn test_wall_rebound_inverts_vertical_velocity() {
        let context = context();
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(400.0, 12.0);
        ball.velocity = Vector2::new(0.0, -0.4);

        let mut events = EventCollection::new();
        ball.update(20.0, &context, &mut events);

        assert_eq!(ball.position.y, BALL_RADIUS);
        assert!(ball.velocity.y > 0.0);
        assert!((ball.velocity.y - 0.4 * 0.992 * 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_attached_ball_skips_flight() {
        let context = context();
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.owner = Some(3);
        ball.velocity = Vector2::new(0.3, 0.3);

        let before = ball.position;
        let mut events = EventCollection::new();
        ball.update(16.0, &context, &mut events);

        assert_eq!(ball.position, before);
    }

    #[test]
    fn test_crossing_emits_goal_event_and_skips_flight() {
        let context = context();
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(-10.5, 250.0);
        ball.velocity = Vector2::new(-0.2, 0.0);

        let mut events = EventCollection::new();
        ball.update(16.0, &context, &mut events);

        assert_eq!(events.events.len(), 1);
        let Event::Ball(BallEvent::Goal(side)) = events.events[0];
        assert_eq!(side, GoalSide::Home);
        // Flight skipped: position untouched this tick
        assert_eq!(ball.position.x, -10.5);
    }

    #[test]
    fn test_no_goal_event_during_cooldown_window() {
        let mut context = context();
        context.time.increment(100.0);
        context.goal_cooldown.trigger(50.0);

        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(-20.0, 250.0);

        let mut events = EventCollection::new();
        ball.update(16.0, &context, &mut events);

        assert!(events.events.is_empty());
        // And the x clamp is enforced while the window is open
        assert_eq!(ball.position.x, BALL_RADIUS);
    }

    #[test]
    fn test_x_clamp_suspended_while_armed() {
        let context = context();
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(795.0, 250.0);
        ball.velocity = Vector2::new(0.4, 0.0);

        let mut events = EventCollection::new();
        ball.update(50.0, &context, &mut events);

        // Past the right edge, not clamped back: the crossing registers
        // on the next tick
        assert!(ball.position.x > 800.0);
        assert!(events.events.is_empty());
    }

    #[test]
    fn test_reset_returns_to_center() {
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(100.0, 100.0);
        ball.velocity = Vector2::new(1.0, 1.0);
        ball.owner = Some(2);

        ball.reset();

        assert_eq!(ball.position, Vector2::new(400.0, 250.0));
        assert_eq!(ball.velocity, Vector2::zeros());
        assert_eq!(ball.owner, None);
    }
}
