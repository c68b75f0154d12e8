use log::debug;

use crate::{
    body::{Body, World},
    collision::{CollisionEvent, Vec3, resolve},
    config::SimulationConfig,
    geometry::{forward_from_yaw, from_planar},
    motion::{Mover, MoverStep, plan_tick},
    player::Player,
};

/// Plan this tick's mover motion and snap every mover body to its exact
/// position at `time_ms`, so platforms never drift from the clock.
pub fn begin_tick(world: &mut World, movers: &[Mover], time_ms: u64, config: &SimulationConfig) -> Vec<MoverStep> {
    movers
        .iter()
        .map(|mover| {
            let step = plan_tick(mover, time_ms, config.tick_ms, config.substeps);
            if let Some(body) = world.body_mut(step.body_id) {
                body.set_center(step.start);
            }
            step
        })
        .collect()
}

/// Move every mover body by one sub-step's share of its tick displacement.
pub fn advance_movers(world: &mut World, steps: &[MoverStep]) {
    for step in steps {
        if let Some(body) = world.body_mut(step.body_id) {
            body.translate(step.per_substep);
        }
    }
}

/// Apply one sub-step of control intent, platform carry and gravity to a
/// player's body. Turn and walk are scaled by the sub-step length.
///
/// Grounded state is consumed here and cleared; the following resolve pass
/// sets it again if the player is still supported.
pub fn step_player(body: &mut Body, player: &mut Player, steps: &[MoverStep], config: &SimulationConfig) {
    let dt = config.step_size();
    let controls = player.controls;
    let grounded = player.on_ground;
    let carrier = player.on_body;
    player.on_ground = false;
    player.on_body = None;

    let yaw = body.angle() - controls.turn * config.turn_speed * dt;
    let walk = forward_from_yaw(yaw) * (controls.forward * config.move_speed * dt);
    let mut delta = from_planar(walk, 0.0);

    if grounded {
        if let Some(step) = carrier.and_then(|id| steps.iter().find(|s| s.body_id == id)) {
            delta += step.per_substep;
        }
    }

    // Vertical motion is integrated per sub-step, unscaled.
    if grounded && controls.jump {
        body.vertical_velocity = config.jump_speed;
    } else {
        body.vertical_velocity = (body.vertical_velocity - config.gravity).max(-config.max_fall_speed);
    }
    delta.y += body.vertical_velocity;

    body.set_pose(body.center() + delta, yaw);
}

/// Feed resolved contacts back into player state, in resolution order.
pub fn apply_events(world: &mut World, players: &mut [Player], events: &[CollisionEvent]) {
    for event in events {
        let Some(player) = players.iter_mut().find(|p| p.body_id == event.dynamic) else {
            continue;
        };
        let Some(body) = world.body_mut(event.dynamic) else {
            continue;
        };
        if event.is_support() {
            player.on_ground = true;
            player.on_body = Some(event.other);
            body.vertical_velocity = 0.0;
        }
        if event.other_is_sensor {
            player.last_valid_pos = body.center();
            player.last_valid_rot = body.angle();
        }
    }
}

/// Put players that fell through the level back on their last checkpoint.
pub fn rollback_fallen(world: &mut World, players: &mut [Player], config: &SimulationConfig) {
    for player in players.iter_mut() {
        let Some(body) = world.body_mut(player.body_id) else {
            continue;
        };
        if body.center().y >= config.floor_threshold {
            continue;
        }
        debug!(
            "player {} fell to y={:.2}, rolling back to {:?}",
            player.id,
            body.center().y,
            player.last_valid_pos
        );
        body.set_pose(player.last_valid_pos, player.last_valid_rot);
        body.vertical_velocity = 0.0;
        player.on_ground = false;
        player.on_body = None;
    }
}

/// One sub-step: movers, then players, then collision resolution and its
/// consequences. Returns the contacts in resolution order.
pub fn substep(
    world: &mut World,
    steps: &[MoverStep],
    players: &mut [Player],
    config: &SimulationConfig,
) -> Vec<CollisionEvent> {
    advance_movers(world, steps);

    for player in players.iter_mut() {
        if let Some(body) = world.body_mut(player.body_id) {
            step_player(body, player, steps, config);
        }
    }

    let events = resolve(world);
    apply_events(world, players, &events);
    rollback_fallen(world, players, config);
    events
}
