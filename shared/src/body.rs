//! Rigid-body records and the world container that owns them.
//!
//! Bodies are Y-axis-aligned boxes or cylinders. Collision is resolved in the
//! horizontal plane, so each body carries its planar footprint plus a vertical
//! half-height.
//!
//! # Cached box geometry
//! A box caches its four world-space vertices and outward face normals. The
//! cache is derived from `center`, `angle` and the half-extents, and the narrow
//! phase reads it directly. `center` and `angle` are therefore only writable
//! through methods that refresh the cache in the same call.

use serde::{Deserialize, Serialize};

use crate::{
    collision::{Vec2, Vec3},
    geometry::{rotate, to_planar},
};

/// Stable body identifier. Assigned in strict creation order, starting at 1.
pub type BodyId = u32;

/// Planar footprint of a box with its derived world-space geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    /// Local half-extents in the horizontal plane (x, z).
    pub half_extents: Vec2,
    /// World-space corners, counter-clockwise. Edge `i` runs from
    /// `vertices[i]` to `vertices[(i + 1) % 4]`.
    pub vertices: [Vec2; 4],
    /// Outward unit normal of edge `i`.
    pub normals: [Vec2; 4],
}

impl BoxShape {
    fn new(half_extents: Vec2, center: Vec2, angle: f32) -> Self {
        let mut shape = Self {
            half_extents,
            vertices: [Vec2::zeros(); 4],
            normals: [Vec2::zeros(); 4],
        };
        shape.update(center, angle);
        shape
    }

    /// Recompute vertices and normals for a new pose.
    fn update(&mut self, center: Vec2, angle: f32) {
        let (hx, hz) = (self.half_extents.x, self.half_extents.y);
        let local = [
            Vec2::new(-hx, -hz),
            Vec2::new(hx, -hz),
            Vec2::new(hx, hz),
            Vec2::new(-hx, hz),
        ];
        let local_normals = [
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
        ];
        for i in 0..4 {
            self.vertices[i] = center + rotate(local[i], angle);
            self.normals[i] = rotate(local_normals[i], angle);
        }
    }
}

/// Shape-specific payload of a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box(BoxShape),
    Cylinder { radius: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    /// Movable by the resolver. Fixed bodies (level geometry, movers) are not.
    pub dynamic: bool,
    /// Reports contacts but never pushes anything.
    pub sensor: bool,
    /// Half of the vertical extent (meters).
    pub half_height: f32,
    /// Vertical velocity (meters per tick, +Y up).
    pub vertical_velocity: f32,
    center: Vec3,
    angle: f32,
    shape: Shape,
}

impl Body {
    /// Build a box body from its full extents `size`.
    pub fn new_box(id: BodyId, center: Vec3, size: Vec3, angle: f32, dynamic: bool, sensor: bool) -> Self {
        let half_extents = Vec2::new(size.x.abs() * 0.5, size.z.abs() * 0.5);
        Self {
            id,
            dynamic,
            sensor,
            half_height: size.y.abs() * 0.5,
            vertical_velocity: 0.0,
            center,
            angle,
            shape: Shape::Box(BoxShape::new(half_extents, to_planar(center), angle)),
        }
    }

    /// Build a Y-aligned cylinder. `size.x` is the diameter, `size.y` the height.
    pub fn new_cylinder(id: BodyId, center: Vec3, size: Vec3, angle: f32, dynamic: bool, sensor: bool) -> Self {
        Self {
            id,
            dynamic,
            sensor,
            half_height: size.y.abs() * 0.5,
            vertical_velocity: 0.0,
            center,
            angle,
            shape: Shape::Cylinder {
                radius: size.x.abs() * 0.5,
            },
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Full extents (x, y, z) in the body's local frame.
    pub fn size(&self) -> Vec3 {
        match self.shape {
            Shape::Box(b) => Vec3::new(b.half_extents.x * 2.0, self.half_height * 2.0, b.half_extents.y * 2.0),
            Shape::Cylinder { radius } => Vec3::new(radius * 2.0, self.half_height * 2.0, radius * 2.0),
        }
    }

    /// Radius of the planar bounding circle around `center`.
    pub fn bounding_radius(&self) -> f32 {
        match self.shape {
            Shape::Box(b) => b.half_extents.norm(),
            Shape::Cylinder { radius } => radius,
        }
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.update_box();
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.update_box();
    }

    pub fn set_pose(&mut self, center: Vec3, angle: f32) {
        self.center = center;
        self.angle = angle;
        self.update_box();
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.center += delta;
        self.update_box();
    }

    /// Refresh the cached box geometry from the current pose. No-op for cylinders.
    pub fn update_box(&mut self) {
        let planar = to_planar(self.center);
        if let Shape::Box(b) = &mut self.shape {
            b.update(planar, self.angle);
        }
    }
}

/// Append-only body container with its id sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    bodies: Vec<Body>,
    /// Largest vertical penetration resolved as a step-up instead of a push-out.
    pub allowed_step_size: f32,
    next_body_id: BodyId,
}

impl World {
    pub fn new(allowed_step_size: f32) -> Self {
        Self {
            bodies: Vec::new(),
            allowed_step_size,
            next_body_id: 1,
        }
    }

    /// Rebuild a world from persisted bodies. Bodies are kept sorted by id and the
    /// sequence never goes backwards past an existing id.
    pub fn restore(allowed_step_size: f32, next_body_id: BodyId, mut bodies: Vec<Body>) -> Self {
        bodies.sort_by_key(|b| b.id);
        let floor = bodies.last().map_or(1, |b| b.id + 1);
        Self {
            bodies,
            allowed_step_size,
            next_body_id: next_body_id.max(floor),
        }
    }

    /// The id the next created body will receive.
    #[inline]
    pub fn next_body_id(&self) -> BodyId {
        self.next_body_id
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.index_of(id).map(move |i| &mut self.bodies[i])
    }

    /// Bodies are appended in id order, so a binary search is enough.
    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.binary_search_by_key(&id, |b| b.id).ok()
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = self.next_body_id;
        self.next_body_id += 1;
        id
    }

    pub fn create_box(&mut self, center: Vec3, size: Vec3, angle: f32, dynamic: bool, sensor: bool) -> &mut Body {
        let id = self.allocate_id();
        self.push(Body::new_box(id, center, size, angle, dynamic, sensor))
    }

    pub fn create_cylinder(&mut self, center: Vec3, size: Vec3, angle: f32, dynamic: bool, sensor: bool) -> &mut Body {
        let id = self.allocate_id();
        self.push(Body::new_cylinder(id, center, size, angle, dynamic, sensor))
    }

    fn push(&mut self, body: Body) -> &mut Body {
        self.bodies.push(body);
        let last = self.bodies.len() - 1;
        &mut self.bodies[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn ids_follow_creation_order() {
        let mut world = World::new(0.2);
        let a = world.create_box(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0.0, false, false).id;
        let b = world.create_cylinder(Vec3::zeros(), Vec3::new(0.5, 0.8, 0.5), 0.0, true, false).id;
        let c = world.create_box(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0.0, false, true).id;
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(world.next_body_id(), 4);
        assert_eq!(world.body(2).map(|b| b.dynamic), Some(true));
        assert!(world.body(9).is_none());
    }

    #[test]
    fn box_geometry_is_counter_clockwise_with_outward_normals() {
        let body = Body::new_box(1, Vec3::new(1.0, 0.0, 2.0), Vec3::new(2.0, 1.0, 4.0), 0.0, false, false);
        let Shape::Box(b) = body.shape() else {
            panic!("expected a box");
        };
        assert_eq!(b.vertices[0], Vec2::new(0.0, 0.0));
        assert_eq!(b.vertices[2], Vec2::new(2.0, 4.0));
        let center = Vec2::new(1.0, 2.0);
        for i in 0..4 {
            let mid = (b.vertices[i] + b.vertices[(i + 1) % 4]) * 0.5;
            assert!(b.normals[i].dot(&(mid - center)) > 0.0);
        }
    }

    #[test]
    fn moving_a_box_refreshes_its_cache() {
        let mut body = Body::new_box(1, Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0, false, false);
        body.translate(Vec3::new(3.0, 0.0, 0.0));
        body.set_angle(FRAC_PI_2);
        let Shape::Box(b) = body.shape() else {
            panic!("expected a box");
        };
        let centroid = b.vertices.iter().fold(Vec2::zeros(), |acc, v| acc + v) / 4.0;
        assert_relative_eq!(centroid, Vec2::new(3.0, 0.0), epsilon = 1.0e-5);
        // +Z face normal rotated a quarter turn now faces +X.
        assert_relative_eq!(b.normals[2], Vec2::new(1.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn restore_keeps_sequence_ahead_of_existing_bodies() {
        let bodies = vec![
            Body::new_box(5, Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0.0, false, false),
            Body::new_box(2, Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0.0, false, false),
        ];
        let world = World::restore(0.2, 3, bodies);
        assert_eq!(world.next_body_id(), 6);
        assert_eq!(world.bodies()[0].id, 2);
        assert!(world.body(5).is_some());
    }
}
