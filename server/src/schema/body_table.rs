use crate::types::*;
use spacetimedb::*;

/// Mirror of one simulation body.
///
/// Level geometry is written once at `init`; player and mover rows are
/// rewritten after every tick. Clients subscribe to this table to draw the
/// world.
#[table(name = body, public)]
pub struct Body {
    /// Simulation body id, assigned in creation order.
    #[primary_key]
    pub id: u32,

    pub shape: BodyShape,

    /// Full local extents (meters).
    pub size: DbVec3,

    pub center: DbVec3,

    /// Yaw about +Y (radians).
    pub angle: f32,

    pub dynamic: bool,
    pub sensor: bool,

    /// Meters per tick, +Y up.
    pub vertical_velocity: f32,
}
