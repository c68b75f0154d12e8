//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::{
    collision::{Vec3, settings::DEFAULT_ALLOWED_STEP_SIZE},
    constants::{
        FLOOR_THRESHOLD, GRAVITY, JUMP_SPEED, MAX_FALL_SPEED, MAX_PLAYERS, MOVE_SPEED, PLAYER_HEIGHT,
        PLAYER_RADIUS, SPAWN_SPACING, SUBSTEPS, TICK_MS, TURN_SPEED,
    },
};

/// Tunables for one simulation instance.
///
/// Every instance taking part in a lockstep session must use identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Sub-steps per tick
    pub substeps: u32,

    /// Game-clock length of one tick (milliseconds)
    pub tick_ms: u64,

    /// Walking speed (meters per tick)
    pub move_speed: f32,

    /// Turning speed (radians per tick)
    pub turn_speed: f32,

    /// Downward acceleration (meters per sub-step squared)
    pub gravity: f32,

    /// Terminal fall speed magnitude (meters per sub-step)
    pub max_fall_speed: f32,

    /// Upward velocity applied by a jump (meters per sub-step)
    pub jump_speed: f32,

    /// Rollback height
    pub floor_threshold: f32,

    /// Largest vertical overlap resolved as a step-up (meters)
    pub allowed_step_size: f32,

    /// Player cylinder radius (meters)
    pub player_radius: f32,

    /// Player cylinder height (meters)
    pub player_height: f32,

    /// Center of the spawn area; players alternate left and right of it
    pub spawn_point: Vec3,

    /// Distance of each spawn slot from `spawn_point` along X
    pub spawn_spacing: f32,

    /// Initial yaw of spawned players (radians)
    pub spawn_yaw: f32,

    /// Joins beyond this count are rejected
    #[serde(default = "default_max_players")]
    pub max_players: usize,
}

fn default_max_players() -> usize {
    MAX_PLAYERS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            substeps: SUBSTEPS,
            tick_ms: TICK_MS,
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_speed: JUMP_SPEED,
            floor_threshold: FLOOR_THRESHOLD,
            allowed_step_size: DEFAULT_ALLOWED_STEP_SIZE,
            player_radius: PLAYER_RADIUS,
            player_height: PLAYER_HEIGHT,
            spawn_point: Vec3::new(0.0, 1.5, 0.0),
            spawn_spacing: SPAWN_SPACING,
            spawn_yaw: 0.0,
            max_players: MAX_PLAYERS,
        }
    }
}

impl SimulationConfig {
    /// Length of one sub-step as a fraction of a tick.
    #[inline]
    pub fn step_size(&self) -> f32 {
        1.0 / self.substeps.max(1) as f32
    }

    /// Set the spawn point
    pub fn with_spawn_point(mut self, spawn_point: Vec3) -> Self {
        self.spawn_point = spawn_point;
        self
    }

    /// Set the distance of each spawn slot from the spawn point
    pub fn with_spawn_spacing(mut self, spawn_spacing: f32) -> Self {
        self.spawn_spacing = spawn_spacing;
        self
    }

    /// Set the step-up tolerance
    pub fn with_allowed_step_size(mut self, allowed_step_size: f32) -> Self {
        self.allowed_step_size = allowed_step_size;
        self
    }

    /// Set the number of sub-steps per tick
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    /// Set the session's player cap
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_twenty_substeps() {
        let config = SimulationConfig::default();
        assert_eq!(config.substeps, 20);
        assert_eq!(config.step_size(), 0.05);
    }

    #[test]
    fn zero_substeps_does_not_divide_by_zero() {
        let config = SimulationConfig::default().with_substeps(0);
        assert_eq!(config.step_size(), 1.0);
    }

    #[test]
    fn deserializes_from_json() {
        let json = serde_json::to_string(&SimulationConfig::default().with_allowed_step_size(0.3))
            .expect("serialize");
        let back: SimulationConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.allowed_step_size, 0.3);
        assert_eq!(back.spawn_point, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(back.max_players, 6);
    }

    #[test]
    fn missing_player_cap_defaults_to_six() {
        let mut value = serde_json::to_value(SimulationConfig::default()).expect("serialize");
        value.as_object_mut().expect("object").remove("max_players");
        let back: SimulationConfig = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back.max_players, MAX_PLAYERS);
    }

    #[test]
    fn default_fall_speed_stays_within_step_tolerance() {
        let config = SimulationConfig::default();
        assert!(config.max_fall_speed < config.allowed_step_size);
    }
}
