//! Read-only state copies handed to presentation layers and replay checks.

use serde::{Deserialize, Serialize};

use crate::{
    body::{Body, BodyId, Shape},
    collision::Vec3,
    player::{Controls, Player},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Cylinder,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub shape: ShapeKind,
    /// Full local extents; for cylinders `x == z == diameter`.
    pub size: Vec3,
    pub center: Vec3,
    pub angle: f32,
    pub dynamic: bool,
    pub sensor: bool,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            shape: match body.shape() {
                Shape::Box(_) => ShapeKind::Box,
                Shape::Cylinder { .. } => ShapeKind::Cylinder,
            },
            size: body.size(),
            center: body.center(),
            angle: body.angle(),
            dynamic: body.dynamic,
            sensor: body.sensor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: String,
    pub body_id: BodyId,
    pub player_type: usize,
    pub controls: Controls,
    pub vertical_velocity: f32,
    pub on_ground: bool,
    pub on_body: Option<BodyId>,
}

impl PlayerSnapshot {
    pub fn new(player: &Player, vertical_velocity: f32) -> Self {
        Self {
            id: player.id.clone(),
            body_id: player.body_id,
            player_type: player.player_type,
            controls: player.controls,
            vertical_velocity,
            on_ground: player.on_ground,
            on_body: player.on_body,
        }
    }
}

/// Whole-world state after a tick, bodies by id, players by join order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub time_ms: u64,
    pub bodies: Vec<BodySnapshot>,
    pub players: Vec<PlayerSnapshot>,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
