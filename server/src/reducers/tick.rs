//! Scheduled simulation tick.
//!
//! This file contains:
//! - `TickTimer` scheduled table
//! - `init(ctx)` to schedule the tick
//! - `tick` scheduled reducer
//!
//! The tick does not measure elapsed time. The game clock is derived from the
//! stored tick counter, so a replay of the same joins and controls reproduces
//! the same world regardless of scheduling jitter.

use crate::world;
use jumpdudes_shared::UPDATES_PER_SECOND;
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration};

/// Scheduled timer for the simulation tick.
///
/// Scheduled tables must include a `scheduled_id: u64` primary key with `#[auto_inc]`.
#[spacetimedb::table(name = tick_timer, scheduled(tick))]
pub struct TickTimer {
    /// Primary key for the scheduled job (single row used).
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    /// When/how often to invoke the scheduled reducer.
    pub scheduled_at: ScheduleAt,
}

/// Schedule the simulation tick.
pub fn init(ctx: &ReducerContext) {
    let interval = TimeDuration::from_micros(1_000_000i64 / UPDATES_PER_SECOND as i64);

    // Single-row scheduled job.
    ctx.db.tick_timer().scheduled_id().delete(1);
    ctx.db.tick_timer().insert(TickTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(interval),
    });
}

/// Advance the simulation by one tick and mirror the result into the tables.
#[spacetimedb::reducer]
pub fn tick(ctx: &ReducerContext, _timer: TickTimer) -> Result<(), String> {
    // Only the server (module identity) may invoke scheduled reducers.
    if ctx.sender != ctx.identity() {
        return Err("`tick` may not be invoked by clients.".into());
    }

    let mut simulation = world::load_simulation(ctx)?;
    let time_ms = simulation.tick_count() * simulation.config().tick_ms;
    simulation.tick(time_ms);
    world::store_simulation(ctx, &simulation);

    Ok(())
}
