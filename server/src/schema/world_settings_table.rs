use spacetimedb::*;

/// Session-wide simulation state. Single row with `id = 1`.
///
/// Notes
/// - `tick` is the number of ticks run so far; the game clock handed to the
///   simulation is `tick * TICK_MS`, so it never depends on wall time.
/// - `next_body_id` continues the world's id sequence across reducer calls.
#[table(name = world_settings, public)]
pub struct WorldSettings {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Largest vertical overlap resolved as a step-up (meters).
    pub allowed_step_size: f32,

    /// Id the next created body will receive.
    pub next_body_id: u32,

    /// Ticks run so far.
    pub tick: u64,
}
