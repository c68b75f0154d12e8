use serde::{Deserialize, Serialize};

use crate::{body::BodyId, collision::Vec3};

/// Cosmetic player type. The simulation only stores the catalog index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerType {
    pub name: &'static str,
    /// Presentation asset key.
    pub model: &'static str,
}

pub const PLAYER_TYPES: &[PlayerType] = &[
    PlayerType { name: "Dude", model: "dude" },
    PlayerType { name: "Robot", model: "robot" },
    PlayerType { name: "Knight", model: "knight" },
    PlayerType { name: "Alien", model: "alien" },
];

/// Wrap any integer into a valid catalog index. Negative values count from the end.
pub fn wrap_player_type(index: i64) -> usize {
    index.rem_euclid(PLAYER_TYPES.len() as i64) as usize
}

/// Control intent, replaced wholesale by each `set_controls`.
///
/// `jump` is level-triggered: while held, the player jumps every time it is
/// grounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    /// -1..1, positive turns clockwise seen from above (decreases yaw).
    pub turn: f32,
    /// -1..1, positive walks along the facing direction.
    pub forward: f32,
    pub jump: bool,
}

impl Controls {
    pub fn new(turn: f32, forward: f32, jump: bool) -> Self {
        Self { turn, forward, jump }.clamped()
    }

    /// Clamp the analog axes to `[-1, 1]`. NaN becomes 0.
    pub fn clamped(self) -> Self {
        let axis = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            turn: axis(self.turn),
            forward: axis(self.forward),
            jump: self.jump,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Host-supplied stable id.
    pub id: String,
    pub body_id: BodyId,
    pub player_type: usize,
    pub controls: Controls,
    pub on_ground: bool,
    /// Body stood on during the last resolve, if any.
    pub on_body: Option<BodyId>,
    /// Rollback target, refreshed on every sensor contact.
    pub last_valid_pos: Vec3,
    pub last_valid_rot: f32,
}

impl Player {
    pub fn new(id: String, body_id: BodyId, player_type: usize, spawn: Vec3, yaw: f32) -> Self {
        Self {
            id,
            body_id,
            player_type,
            controls: Controls::default(),
            on_ground: false,
            on_body: None,
            last_valid_pos: spawn,
            last_valid_rot: yaw,
        }
    }

    #[inline]
    pub fn player_type(&self) -> &'static PlayerType {
        &PLAYER_TYPES[self.player_type % PLAYER_TYPES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_index_wraps_both_ways() {
        let n = PLAYER_TYPES.len() as i64;
        assert_eq!(wrap_player_type(0), 0);
        assert_eq!(wrap_player_type(n), 0);
        assert_eq!(wrap_player_type(n + 1), 1);
        assert_eq!(wrap_player_type(-1), PLAYER_TYPES.len() - 1);
        assert_eq!(wrap_player_type(-n), 0);
    }

    #[test]
    fn controls_are_clamped() {
        let c = Controls::new(3.0, -7.5, true);
        assert_eq!(c, Controls { turn: 1.0, forward: -1.0, jump: true });
        assert_eq!(Controls::new(f32::NAN, 0.5, false).turn, 0.0);
        assert_eq!(Controls::new(-0.25, 0.5, false).forward, 0.5);
    }

    #[test]
    fn new_player_checkpoints_spawn() {
        let spawn = Vec3::new(1.0, 2.0, 3.0);
        let p = Player::new("p1".into(), 7, 2, spawn, 0.5);
        assert_eq!(p.last_valid_pos, spawn);
        assert_eq!(p.last_valid_rot, 0.5);
        assert!(!p.on_ground);
        assert_eq!(p.player_type().name, "Knight");
    }
}
