use crate::r#match::{geometry, MatchPlayer};
use nalgebra::Vector2;

pub const PLAYER_SPEED: f32 = 0.04;
pub const PLAYER_DAMPING: f32 = 0.89;

/// Locomotion toward a target point. Possessors and off-ball players use
/// the same acceleration and damping so movement feels consistent; the
/// variants only record how the target was chosen.
pub enum SteeringBehavior {
    /// Head for a fixed point (goal approach, support position).
    Seek { target: Vector2<f32> },
    /// Head for a randomized target the caller has already constrained.
    Wander { target: Vector2<f32> },
}

impl SteeringBehavior {
    pub fn calculate(&self, player: &MatchPlayer, dt: f32) -> SteeringOutput {
        match self {
            SteeringBehavior::Seek { target } | SteeringBehavior::Wander { target } => {
                let direction = geometry::direction(player.position, *target);
                let velocity = (player.velocity + direction * PLAYER_SPEED * dt) * PLAYER_DAMPING;

                SteeringOutput { velocity }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SteeringOutput {
    pub velocity: Vector2<f32>,
}
