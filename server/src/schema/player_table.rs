use crate::types::*;
use spacetimedb::*;

/// A joined player, keyed by the connection identity.
///
/// The body itself lives in the `body` table; this row carries control
/// intent, grounded state and the rollback checkpoint.
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    pub identity: Identity,

    #[unique]
    pub body_id: u32,

    /// Index into the cosmetic player catalog.
    pub player_type: u32,

    pub turn: f32,
    pub forward: f32,
    pub jump: bool,

    pub on_ground: bool,

    /// Body stood on after the last tick, if any.
    pub on_body: Option<u32>,

    pub last_valid_pos: DbVec3,
    pub last_valid_rot: f32,
}
