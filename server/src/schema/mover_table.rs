use crate::types::*;
use spacetimedb::*;

/// Scripted motion attached to a fixed body.
#[table(name = mover)]
pub struct Mover {
    #[primary_key]
    pub body_id: u32,

    /// Level element name.
    pub name: String,

    pub kind: DbMotionKind,

    /// Displacement at the far end of the travel (meters).
    pub amount: DbVec3,

    pub interval_ms: u64,
    pub offset_ms: i64,
    pub pause_ms: u64,

    /// Rest position of the body.
    pub base: DbVec3,
}
