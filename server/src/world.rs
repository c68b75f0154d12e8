//! Bridge between the module's tables and the in-memory simulation.
//!
//! Every reducer that touches the simulation rebuilds it from the tables with
//! [`load_simulation`], mutates it, and writes the changed rows back with
//! [`store_simulation`]. The tables are the only state that survives between
//! reducer calls.
//!
//! Determinism
//! - Table iteration order is not specified, so bodies, movers and players are
//!   sorted by body id before the simulation sees them.
//! - The game clock comes from the stored tick counter, never from timestamps.

use crate::{
    schema::{body, mover, player, world_settings, Body, Mover, Player, WorldSettings},
    types::*,
};
use jumpdudes_shared as sim;
use spacetimedb::{Identity, ReducerContext, Table};

/// Base64 level blob produced by the level packer.
const LEVEL_BLOB: &str = include_str!("../assets/level.b64");

/// Primary key of the single `world_settings` row.
pub const SETTINGS_ID: u32 = 1;

/// Decode the embedded level and persist its bodies and movers.
///
/// A malformed level aborts `init` before any row is written.
pub fn create_world(ctx: &ReducerContext) -> Result<(), String> {
    let config = sim::SimulationConfig::default();
    let simulation = sim::Simulation::from_level(LEVEL_BLOB, config.clone())
        .map_err(|e| format!("level setup failed: {e}"))?;

    ctx.db.world_settings().id().delete(SETTINGS_ID);
    ctx.db.world_settings().insert(WorldSettings {
        id: SETTINGS_ID,
        allowed_step_size: config.allowed_step_size,
        next_body_id: simulation.world().next_body_id(),
        tick: 0,
    });

    for b in simulation.world().bodies() {
        ctx.db.body().insert(body_row(b));
    }
    for m in simulation.movers() {
        ctx.db.mover().insert(mover_row(m));
    }

    log::info!(
        "World created: {} bodies, {} movers",
        simulation.world().bodies().len(),
        simulation.movers().len()
    );
    Ok(())
}

/// Rebuild the simulation from the tables.
pub fn load_simulation(ctx: &ReducerContext) -> Result<sim::Simulation, String> {
    let Some(settings) = ctx.db.world_settings().id().find(SETTINGS_ID) else {
        return Err("World settings not found! Was `init` run?".into());
    };
    let config = sim::SimulationConfig::default().with_allowed_step_size(settings.allowed_step_size);

    let bodies = ctx.db.body().iter().map(body_from_row).collect();
    let world = sim::World::restore(settings.allowed_step_size, settings.next_body_id, bodies);

    let mut movers: Vec<sim::Mover> = ctx.db.mover().iter().map(mover_from_row).collect();
    movers.sort_by_key(|m| m.body_id);

    let mut players: Vec<sim::Player> = ctx.db.player().iter().map(player_from_row).collect();
    players.sort_by_key(|p| p.body_id);

    let time_ms = settings.tick * config.tick_ms;
    Ok(sim::Simulation::restore(world, movers, players, config, settings.tick, time_ms))
}

/// Write back everything a tick or a join can change: the id sequence, the
/// tick counter, player and mover bodies, and player state.
pub fn store_simulation(ctx: &ReducerContext, simulation: &sim::Simulation) {
    if let Some(mut settings) = ctx.db.world_settings().id().find(SETTINGS_ID) {
        settings.tick = simulation.tick_count();
        settings.next_body_id = simulation.world().next_body_id();
        ctx.db.world_settings().id().update(settings);
    }

    let moves = |b: &sim::Body| b.dynamic || simulation.movers().iter().any(|m| m.body_id == b.id);
    for b in simulation.world().bodies().iter().filter(|b| moves(b)) {
        let row = body_row(b);
        if ctx.db.body().id().find(row.id).is_some() {
            ctx.db.body().id().update(row);
        } else {
            ctx.db.body().insert(row);
        }
    }

    for p in simulation.players() {
        let Some(row) = ctx.db.player().body_id().find(p.body_id) else {
            log::warn!("No player row for body {}", p.body_id);
            continue;
        };
        ctx.db.player().identity().update(player_row(row.identity, p));
    }
}

/// Insert the row for a freshly joined player.
pub fn insert_player(ctx: &ReducerContext, identity: Identity, p: &sim::Player) {
    ctx.db.player().insert(player_row(identity, p));
}

fn body_row(b: &sim::Body) -> Body {
    let snapshot = sim::BodySnapshot::from(b);
    Body {
        id: snapshot.id,
        shape: snapshot.shape.into(),
        size: snapshot.size.into(),
        center: snapshot.center.into(),
        angle: snapshot.angle,
        dynamic: snapshot.dynamic,
        sensor: snapshot.sensor,
        vertical_velocity: b.vertical_velocity,
    }
}

fn body_from_row(row: Body) -> sim::Body {
    let build = match row.shape {
        BodyShape::Box => sim::Body::new_box,
        BodyShape::Cylinder => sim::Body::new_cylinder,
    };
    let mut body = build(row.id, row.center.into(), row.size.into(), row.angle, row.dynamic, row.sensor);
    body.vertical_velocity = row.vertical_velocity;
    body
}

fn mover_row(m: &sim::Mover) -> Mover {
    Mover {
        body_id: m.body_id,
        name: m.name.clone(),
        kind: m.motion.kind.into(),
        amount: m.motion.amount.into(),
        interval_ms: m.motion.interval_ms,
        offset_ms: m.motion.offset_ms,
        pause_ms: m.motion.pause_ms,
        base: m.base.into(),
    }
}

fn mover_from_row(row: Mover) -> sim::Mover {
    sim::Mover {
        name: row.name,
        body_id: row.body_id,
        motion: sim::Motion {
            kind: row.kind.into(),
            amount: row.amount.into(),
            interval_ms: row.interval_ms,
            offset_ms: row.offset_ms,
            pause_ms: row.pause_ms,
        },
        base: row.base.into(),
    }
}

fn player_row(identity: Identity, p: &sim::Player) -> Player {
    Player {
        identity,
        body_id: p.body_id,
        player_type: p.player_type as u32,
        turn: p.controls.turn,
        forward: p.controls.forward,
        jump: p.controls.jump,
        on_ground: p.on_ground,
        on_body: p.on_body,
        last_valid_pos: p.last_valid_pos.into(),
        last_valid_rot: p.last_valid_rot,
    }
}

fn player_from_row(row: Player) -> sim::Player {
    sim::Player {
        id: row.identity.to_string(),
        body_id: row.body_id,
        player_type: row.player_type as usize,
        controls: sim::Controls {
            turn: row.turn,
            forward: row.forward,
            jump: row.jump,
        },
        on_ground: row.on_ground,
        on_body: row.on_body,
        last_valid_pos: row.last_valid_pos.into(),
        last_valid_rot: row.last_valid_rot,
    }
}
