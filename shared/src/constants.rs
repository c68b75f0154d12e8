//! Simulation tuning values.
//!
//! Walking and turning speeds are per tick and split evenly across the
//! `SUBSTEPS` sub-steps. Gravity, fall and jump speeds are per sub-step.
//! Vertical velocity is positive upward.

/// Authoritative ticks per second.
pub const UPDATES_PER_SECOND: u64 = 30;

/// Game-clock length of one tick in milliseconds (integer, used for mover look-ahead).
pub const TICK_MS: u64 = 1000 / UPDATES_PER_SECOND;

/// Sub-steps per tick.
pub const SUBSTEPS: u32 = 20;

/// Horizontal walking speed (meters per tick).
pub const MOVE_SPEED: f32 = 0.1;

/// Turning speed (radians per tick).
pub const TURN_SPEED: f32 = 0.1;

/// Downward acceleration (meters per sub-step squared).
pub const GRAVITY: f32 = 0.05;

/// Terminal fall speed magnitude (meters per sub-step).
///
/// Kept below the default step-up tolerance so a landing always resolves as
/// a step-up rather than a sideways push.
pub const MAX_FALL_SPEED: f32 = 0.15;

/// Upward velocity set by a jump (meters per sub-step).
pub const JUMP_SPEED: f32 = 0.25;

/// Players admitted to one session.
pub const MAX_PLAYERS: usize = 6;

/// Bodies whose center drops below this height are rolled back.
pub const FLOOR_THRESHOLD: f32 = -5.0;

/// Player cylinder radius (meters).
pub const PLAYER_RADIUS: f32 = 0.25;

/// Player cylinder height (meters).
pub const PLAYER_HEIGHT: f32 = 0.8;

/// Horizontal distance of each spawn slot from the spawn point (meters).
pub const SPAWN_SPACING: f32 = 0.5;
