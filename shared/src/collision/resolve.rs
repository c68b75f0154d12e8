//! Resolution orchestrator.
//!
//! Every dynamic body is tested against every non-dynamic body (dynamic pairs
//! are not resolved). For each narrow-phase hit one of three things happens:
//! - a sensor is involved: report the contact with a zero displacement;
//! - the dynamic body sits on top with a shallow vertical overlap and is not
//!   rising: snap it up onto the surface (step-up);
//! - otherwise: push it out horizontally along the contact normal.
//!
//! Bodies are processed in id order and each correction is applied before the
//! next pair is tested, so results are reproducible across instances.

use crate::body::{Body, World};

use super::{
    broad::may_overlap,
    narrow_phase::collide,
    settings::PUSH_OUT_EPS,
    types::{CollisionEvent, Vec3},
};

/// Receives contacts in the order they were resolved.
pub trait CollisionListener {
    fn on_collision(&mut self, event: CollisionEvent);
}

impl CollisionListener for Vec<CollisionEvent> {
    fn on_collision(&mut self, event: CollisionEvent) {
        self.push(event);
    }
}

/// Resolve the whole world once and return the ordered contact list.
pub fn resolve(world: &mut World) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    resolve_with(world, &mut events);
    events
}

/// Resolve the whole world once, reporting each contact to `listener`.
pub fn resolve_with<L: CollisionListener + ?Sized>(world: &mut World, listener: &mut L) {
    let allowed_step_size = world.allowed_step_size;
    let bodies = world.bodies_mut();

    for i in 0..bodies.len() {
        if !bodies[i].dynamic {
            continue;
        }
        for j in 0..bodies.len() {
            if j == i || bodies[j].dynamic {
                continue;
            }
            let (body, other) = pair_mut(bodies, i, j);
            if let Some(event) = resolve_pair(body, other, allowed_step_size) {
                listener.on_collision(event);
            }
        }
    }
}

/// Resolve one dynamic/fixed pair, moving `body` if needed.
pub fn resolve_pair(body: &mut Body, other: &Body, allowed_step_size: f32) -> Option<CollisionEvent> {
    if !may_overlap(body, other) {
        return None;
    }
    // Normal points from `other` toward `body`.
    let hit = collide(other, body)?;

    let (dynamic, other_id, other_is_sensor) = (body.id, other.id, other.sensor);
    let event = move |delta: Vec3| CollisionEvent {
        dynamic,
        other: other_id,
        other_is_sensor,
        delta,
    };

    if body.sensor || other.sensor {
        return Some(event(Vec3::zeros()));
    }

    let rise = body.center().y - other.center().y;
    let vertical_penetration = (body.half_height + other.half_height) - rise;

    if vertical_penetration > 0.0
        && vertical_penetration < allowed_step_size
        && rise > 0.0
        && body.vertical_velocity <= 0.0
    {
        let delta = Vec3::new(0.0, vertical_penetration, 0.0);
        body.translate(delta);
        return Some(event(delta));
    }

    let push = hit.normal * hit.depth;
    if push.norm() > PUSH_OUT_EPS {
        let delta = Vec3::new(push.x, 0.0, push.y);
        body.translate(delta);
        return Some(event(delta));
    }

    None
}

/// Borrow `bodies[i]` mutably and `bodies[j]` shared. `i != j`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &head[j])
    }
}
