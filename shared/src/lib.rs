pub mod body;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod level;
pub mod motion;
pub mod movement;
pub mod player;
pub mod simulation;
pub mod snapshot;

pub use body::{Body, BodyId, BoxShape, Shape, World};
pub use collision::{CollisionEvent, Vec2, Vec3, resolve};
pub use config::SimulationConfig;
pub use constants::{FLOOR_THRESHOLD, SUBSTEPS, TICK_MS, UPDATES_PER_SECOND};
pub use error::LevelError;
pub use level::{LevelData, decode_blob};
pub use motion::{Motion, MotionKind, Mover, location_at};
pub use player::{Controls, PLAYER_TYPES, Player, PlayerType, wrap_player_type};
pub use simulation::Simulation;
pub use snapshot::{BodySnapshot, PlayerSnapshot, ShapeKind, WorldSnapshot};
