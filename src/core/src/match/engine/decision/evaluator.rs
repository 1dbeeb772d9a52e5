use crate::r#match::ball::Ball;
use crate::r#match::{geometry, MatchFieldSize, MatchPlayer, Team};
use nalgebra::Vector2;

/// Crowding radius around the ball that suppresses the dribble score.
const DRIBBLE_CROWD_RADIUS: f32 = 75.0;

/// Teammates qualify as scoring targets inside this open distance band.
const PASS_SCORE_MIN_DISTANCE: f32 = 35.0;
const PASS_SCORE_MAX_DISTANCE: f32 = 220.0;

/// Lane radius when none is stated by the caller.
pub const DEFAULT_LANE_RADIUS: f32 = 28.0;
/// Tightened lane radius used at both scoring and execution call sites.
pub const PASS_LANE_RADIUS: f32 = 26.0;

/// Depth of the attacking third, measured from the opponent goal line.
const ATTACKING_THIRD_DEPTH: f32 = 180.0;

const SHOOT_THRESHOLD: f32 = 0.4;
const PASS_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Dribble,
    Pass,
    Shoot,
}

/// Scores the three options open to the possessor and picks one. All
/// scores are in [0, 1]; the choice is a priority cascade, not a vote:
/// a shooting chance dominates, passing beats dribbling only when
/// clearly favorable.
pub struct ActionEvaluator;

impl ActionEvaluator {
    pub fn choose(
        possessor: &MatchPlayer,
        players: &[MatchPlayer],
        ball: &Ball,
        size: &MatchFieldSize,
    ) -> PlayerAction {
        let dribble = Self::dribble_score(possessor, players, ball);
        let pass = Self::pass_score(possessor, players, ball);
        let shoot = Self::shoot_score(possessor, ball, size);

        if shoot > SHOOT_THRESHOLD {
            return PlayerAction::Shoot;
        }

        if pass > PASS_THRESHOLD && pass >= dribble {
            return PlayerAction::Pass;
        }

        PlayerAction::Dribble
    }

    /// Open field favours carrying the ball: decays with the number of
    /// other players near it.
    pub fn dribble_score(possessor: &MatchPlayer, players: &[MatchPlayer], ball: &Ball) -> f32 {
        let crowd = players
            .iter()
            .filter(|p| p.id != possessor.id)
            .filter(|p| geometry::distance(p.position, ball.position) < DRIBBLE_CROWD_RADIUS)
            .count();

        1.0 / (1.0 + crowd as f32 * 0.6)
    }

    /// Best pass option value over teammates in range with a clear lane;
    /// closer receivers score higher.
    pub fn pass_score(possessor: &MatchPlayer, players: &[MatchPlayer], ball: &Ball) -> f32 {
        players
            .iter()
            .filter(|p| p.team == possessor.team && p.id != possessor.id)
            .filter_map(|teammate| {
                let dist = geometry::distance(ball.position, teammate.position);
                if dist <= PASS_SCORE_MIN_DISTANCE || dist >= PASS_SCORE_MAX_DISTANCE {
                    return None;
                }
                if !Self::is_lane_clear(
                    players,
                    ball.position,
                    teammate.position,
                    teammate.id,
                    PASS_LANE_RADIUS,
                ) {
                    return None;
                }

                Some(0.3 + 0.7 * (1.0 - (dist - 35.0) / 185.0))
            })
            .fold(0.0, f32::max)
    }

    /// Zero outside the attacking third; otherwise grows as the ball
    /// nears the opponent goal mouth center.
    pub fn shoot_score(possessor: &MatchPlayer, ball: &Ball, size: &MatchFieldSize) -> f32 {
        let in_attacking_third = match possessor.team {
            Team::Home => ball.position.x > size.width - ATTACKING_THIRD_DEPTH,
            Team::Away => ball.position.x < ATTACKING_THIRD_DEPTH,
        };

        if !in_attacking_third {
            return 0.0;
        }

        let goal_center = Vector2::new(
            match possessor.team {
                Team::Home => size.width,
                Team::Away => 0.0,
            },
            size.height / 2.0,
        );

        (1.0 - geometry::distance(ball.position, goal_center) / ATTACKING_THIRD_DEPTH).max(0.0)
    }

    /// A lane is blocked by any player other than the receiver whose
    /// distance to the ball-to-receiver segment is below `lane_radius`.
    pub fn is_lane_clear(
        players: &[MatchPlayer],
        from: Vector2<f32>,
        to: Vector2<f32>,
        receiver_id: u32,
        lane_radius: f32,
    ) -> bool {
        players
            .iter()
            .filter(|p| p.id != receiver_id)
            .all(|p| geometry::distance_to_segment(p.position, from, to) >= lane_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> MatchFieldSize {
        MatchFieldSize::new(800.0, 500.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::with_coord(800.0, 500.0);
        ball.position = Vector2::new(x, y);
        ball
    }

    #[test]
    fn test_dribble_score_open_field() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 250.0));
        let ball = ball_at(400.0, 250.0);

        assert_eq!(
            ActionEvaluator::dribble_score(&possessor, &[possessor.clone()], &ball),
            1.0
        );
    }

    #[test]
    fn test_dribble_score_crowded() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 250.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Away, Vector2::new(430.0, 250.0)),
            MatchPlayer::new(2, Team::Away, Vector2::new(400.0, 300.0)),
        ];

        let score = ActionEvaluator::dribble_score(&possessor, &players, &ball);
        assert!((score - 1.0 / 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_pass_score_prefers_closer_teammate() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 220.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Home, Vector2::new(450.0, 250.0)),
            MatchPlayer::new(2, Team::Home, Vector2::new(600.0, 250.0)),
        ];

        let score = ActionEvaluator::pass_score(&possessor, &players, &ball);
        let expected = 0.3 + 0.7 * (1.0 - (50.0 - 35.0) / 185.0);
        assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn test_pass_score_zero_when_lane_blocked() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 220.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Home, Vector2::new(500.0, 250.0)),
            // Opponent sitting on the lane
            MatchPlayer::new(2, Team::Away, Vector2::new(450.0, 255.0)),
        ];

        assert_eq!(ActionEvaluator::pass_score(&possessor, &players, &ball), 0.0);
    }

    #[test]
    fn test_pass_score_zero_outside_range() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 220.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Home, Vector2::new(420.0, 250.0)),
            MatchPlayer::new(2, Team::Home, Vector2::new(700.0, 250.0)),
        ];

        // One too close (20), one too far (300)
        assert_eq!(ActionEvaluator::pass_score(&possessor, &players, &ball), 0.0);
    }

    #[test]
    fn test_shoot_score_zero_outside_attacking_third() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 250.0));
        let ball = ball_at(400.0, 250.0);

        assert_eq!(ActionEvaluator::shoot_score(&possessor, &ball, &size()), 0.0);
    }

    #[test]
    fn test_shoot_score_near_goal() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(750.0, 250.0));
        let ball = ball_at(750.0, 250.0);

        let score = ActionEvaluator::shoot_score(&possessor, &ball, &size());
        assert!((score - (1.0 - 50.0 / 180.0)).abs() < 1e-6);
    }

    #[test]
    fn test_shoot_score_away_side() {
        let possessor = MatchPlayer::new(9, Team::Away, Vector2::new(60.0, 250.0));
        let ball = ball_at(60.0, 250.0);

        let score = ActionEvaluator::shoot_score(&possessor, &ball, &size());
        assert!(score > 0.4);
    }

    #[test]
    fn test_choose_shoot_dominates() {
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(750.0, 250.0));
        let ball = ball_at(750.0, 250.0);
        let players = vec![possessor.clone()];

        assert_eq!(
            ActionEvaluator::choose(&possessor, &players, &ball, &size()),
            PlayerAction::Shoot
        );
    }

    #[test]
    fn test_choose_dribble_with_no_options() {
        // Adjacent possessor, no teammate in range, ball mid-pitch
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(390.0, 250.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Away, Vector2::new(700.0, 400.0)),
        ];

        assert_eq!(
            ActionEvaluator::choose(&possessor, &players, &ball, &size()),
            PlayerAction::Dribble
        );
    }

    #[test]
    fn test_choose_pass_when_clearly_favorable() {
        // Possessor off the lane, open teammate at mid range, an opponent
        // crowding the ball so dribbling loses.
        let possessor = MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 220.0));
        let ball = ball_at(400.0, 250.0);
        let players = vec![
            possessor.clone(),
            MatchPlayer::new(1, Team::Home, Vector2::new(460.0, 250.0)),
            MatchPlayer::new(2, Team::Away, Vector2::new(350.0, 290.0)),
        ];

        assert_eq!(
            ActionEvaluator::choose(&possessor, &players, &ball, &size()),
            PlayerAction::Pass
        );
    }

    #[test]
    fn test_default_lane_radius_is_wider() {
        let players = vec![
            MatchPlayer::new(0, Team::Home, Vector2::new(450.0, 277.0)),
            MatchPlayer::new(1, Team::Home, Vector2::new(500.0, 250.0)),
        ];
        let from = Vector2::new(400.0, 250.0);
        let to = Vector2::new(500.0, 250.0);

        // 27 off the lane: blocked at the default radius, clear at the
        // tightened one
        assert!(!ActionEvaluator::is_lane_clear(
            &players,
            from,
            to,
            1,
            DEFAULT_LANE_RADIUS
        ));
        assert!(ActionEvaluator::is_lane_clear(
            &players,
            from,
            to,
            1,
            PASS_LANE_RADIUS
        ));
    }

    #[test]
    fn test_lane_clear_excludes_receiver() {
        let players = vec![
            MatchPlayer::new(0, Team::Home, Vector2::new(400.0, 300.0)),
            MatchPlayer::new(1, Team::Home, Vector2::new(500.0, 250.0)),
        ];

        // Receiver sits on the segment end by definition; must not block
        assert!(ActionEvaluator::is_lane_clear(
            &players,
            Vector2::new(400.0, 250.0),
            Vector2::new(500.0, 250.0),
            1,
            PASS_LANE_RADIUS,
        ));
    }
}
