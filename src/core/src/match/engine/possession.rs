use crate::r#match::ball::Ball;
use crate::r#match::{geometry, MatchPlayer};

/// Only a player strictly inside this ball distance can act on it.
pub const POSSESSION_RADIUS: f32 = 52.0;

pub struct PossessionResolver;

impl PossessionResolver {
    /// The player closest to the ball within the possession radius, or
    /// `None`. Ties keep the first player in iteration order; distances
    /// are continuous so ties carry no functional weight.
    pub fn resolve(players: &[MatchPlayer], ball: &Ball) -> Option<u32> {
        let mut best: Option<(u32, f32)> = None;

        for player in players {
            let dist = geometry::distance(ball.position, player.position);
            if dist < POSSESSION_RADIUS && best.is_none_or(|(_, d)| dist < d) {
                best = Some((player.id, dist));
            }
        }

        best.map(|(id, _)| id)
    }
}
