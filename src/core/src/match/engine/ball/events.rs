use crate::r#match::{geometry, MatchContext, MatchField, Team};
use log::debug;
use nalgebra::Vector2;

/// Kickoff placement is clamped this far from every edge so goal
/// detection cannot re-fire on the restart.
const KICKOFF_MARGIN: f32 = 50.0;

#[derive(Copy, Clone, Debug)]
pub enum BallEvent {
    Goal(GoalSide),
}

/// Which goal line the ball crossed (the defending team's goal).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GoalSide {
    /// x = 0, defended by the home team.
    Home,
    /// x = width, defended by the away team.
    Away,
}

pub struct BallEventDispatcher;

impl BallEventDispatcher {
    pub fn dispatch(event: BallEvent, field: &mut MatchField, context: &mut MatchContext) {
        debug!("ball event: {:?}", event);

        match event {
            BallEvent::Goal(side) => {
                let (scoring_team, conceding_team) = match side {
                    GoalSide::Home => (Team::Away, Team::Home),
                    GoalSide::Away => (Team::Home, Team::Away),
                };

                context.score.increment(scoring_team);
                context.goal_cooldown.trigger(context.time.millis);

                debug!(
                    "goal for {:?} at {} ({}-{})",
                    scoring_team,
                    context.time.display(),
                    context.score.home,
                    context.score.away
                );

                Self::kickoff(field, conceding_team);
            }
        }
    }

    /// Restart play with the conceding team: the ball goes to their
    /// player nearest the pitch center, clamped inside the margin, and is
    /// attached immediately. With no such player it returns to center
    /// unattached.
    fn kickoff(field: &mut MatchField, conceding_team: Team) {
        let center = Vector2::new(field.size.half_width, field.size.height / 2.0);

        let ball = &mut field.ball;
        ball.velocity = Vector2::zeros();
        ball.owner = None;

        let taker = field
            .players
            .iter()
            .filter(|p| p.team == conceding_team)
            .min_by(|a, b| {
                let da = geometry::distance(a.position, center);
                let db = geometry::distance(b.position, center);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(taker) = taker {
            ball.position = Vector2::new(
                taker
                    .position
                    .x
                    .clamp(KICKOFF_MARGIN, field.size.width - KICKOFF_MARGIN),
                taker
                    .position
                    .y
                    .clamp(KICKOFF_MARGIN, field.size.height - KICKOFF_MARGIN),
            );
            ball.owner = Some(taker.id);
        } else {
            ball.position = center;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_and_context() -> (MatchField, MatchContext) {
        let mut rng = StdRng::seed_from_u64(9);
        let field = MatchField::new(800.0, 500.0, 3, &mut rng);
        let context = MatchContext::new(&field);
        (field, context)
    }

    #[test]
    fn test_goal_scores_for_the_attacking_team() {
        let (mut field, mut context) = field_and_context();
        context.time.increment(1000.0);

        BallEventDispatcher::dispatch(BallEvent::Goal(GoalSide::Home), &mut field, &mut context);

        assert_eq!(context.score.away, 1);
        assert_eq!(context.score.home, 0);
        assert!(!context.goal_cooldown.is_ready(context.time.millis));
    }

    #[test]
    fn test_kickoff_goes_to_conceding_player_nearest_center() {
        let (mut field, mut context) = field_and_context();

        // Put a known home player closest to center
        field.players[0].position = Vector2::new(390.0, 240.0);

        BallEventDispatcher::dispatch(BallEvent::Goal(GoalSide::Home), &mut field, &mut context);

        assert_eq!(field.ball.owner, Some(field.players[0].id));
        assert_eq!(field.ball.position, Vector2::new(390.0, 240.0));
        assert_eq!(field.ball.velocity, Vector2::zeros());
    }

    #[test]
    fn test_kickoff_position_clamped_to_margin() {
        let (mut field, mut context) = field_and_context();

        // Conceding player hugging a corner; only they remain at home
        for player in field.players.iter_mut().filter(|p| p.team == Team::Home) {
            player.position = Vector2::new(5.0, 495.0);
        }

        BallEventDispatcher::dispatch(BallEvent::Goal(GoalSide::Home), &mut field, &mut context);

        assert_eq!(field.ball.position, Vector2::new(50.0, 450.0));
    }

    #[test]
    fn test_kickoff_without_conceding_players_resets_to_center() {
        let (mut field, mut context) = field_and_context();
        field.players.retain(|p| p.team == Team::Away);

        BallEventDispatcher::dispatch(BallEvent::Goal(GoalSide::Home), &mut field, &mut context);

        assert_eq!(field.ball.owner, None);
        assert_eq!(field.ball.position, Vector2::new(400.0, 250.0));
    }
}
