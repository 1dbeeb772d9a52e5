use crate::r#match::{MatchContext, MatchField, Score, Team, BALL_RADIUS, PLAYER_RADIUS};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::HashMap;

/// Everything a host needs to draw one frame and the scoreboard.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub score: Score,
    pub clock: String,
    pub elapsed_seconds: f32,
    pub pitch: PitchSnapshot,
    pub ball: BallSnapshot,
    pub players: Vec<PlayerSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PitchSnapshot {
    pub width: f32,
    pub height: f32,
    pub goal_mouth_width: f32,
    pub goal_mouth_y: f32,
    pub player_radius: f32,
    pub ball_radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallSnapshot {
    pub position: Vector2<f32>,
    pub owner: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub team: Team,
    pub position: Vector2<f32>,
}

impl MatchSnapshot {
    pub fn new(field: &MatchField, context: &MatchContext) -> Self {
        let goals = &context.goal_positions;

        MatchSnapshot {
            score: context.score,
            clock: context.time.display(),
            elapsed_seconds: context.time.seconds(),
            pitch: PitchSnapshot {
                width: field.size.width,
                height: field.size.height,
                goal_mouth_width: goals.mouth_width,
                goal_mouth_y: (field.size.height - goals.mouth_width) / 2.0,
                player_radius: PLAYER_RADIUS,
                ball_radius: BALL_RADIUS,
            },
            ball: BallSnapshot {
                position: field.ball.position,
                owner: field.ball.owner,
            },
            players: field
                .players
                .iter()
                .sorted_by_key(|p| p.id)
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    team: p.team,
                    position: p.position,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionDataItem {
    pub timestamp: u64,
    pub position: Vector2<f32>,
}

impl PositionDataItem {
    pub fn new(timestamp: u64, position: Vector2<f32>) -> Self {
        PositionDataItem {
            timestamp,
            position,
        }
    }
}

/// Timestamped ball and player positions, recorded by the host for
/// replay or analysis. Consecutive duplicates are dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchPositionData {
    pub ball: Vec<PositionDataItem>,
    pub players: HashMap<u32, Vec<PositionDataItem>>,
}

impl MatchPositionData {
    pub fn new() -> Self {
        MatchPositionData::default()
    }

    pub fn add_ball_position(&mut self, timestamp: u64, position: Vector2<f32>) {
        push_deduped(&mut self.ball, timestamp, position);
    }

    pub fn add_player_position(&mut self, player_id: u32, timestamp: u64, position: Vector2<f32>) {
        push_deduped(
            self.players.entry(player_id).or_default(),
            timestamp,
            position,
        );
    }
}

fn push_deduped(items: &mut Vec<PositionDataItem>, timestamp: u64, position: Vector2<f32>) {
    if items.last().is_none_or(|last| last.position != position) {
        items.push(PositionDataItem::new(timestamp, position));
    }
}
