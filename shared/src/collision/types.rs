/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- broad (bounding-volume reject)
- narrow_phase (exact shape-pair tests)
- resolve (push-out / step-up orchestration)
- the fixed-step integrator, which consumes `CollisionEvent`s

Conventions:
- The horizontal plane is world `(x, z)`, stored in `Vec2` as `(x, y)`.
- A `Collision` normal is a unit vector pointing from the first body passed to
  the narrow phase toward the second one. Moving the second body by
  `normal * depth` separates the pair.
*/

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::body::BodyId;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;

/// Exact overlap detail produced by the narrow phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    /// Penetration depth along `normal` (meters, non-negative).
    pub depth: f32,
    /// Unit separating direction in the horizontal plane, first body -> second body.
    pub normal: Vec2,
    /// Deepest point of the second body inside the first one.
    pub start: Vec2,
    /// `start` moved out of the first body along `normal`.
    pub end: Vec2,
}

impl Collision {
    #[inline]
    pub fn new(depth: f32, normal: Vec2, start: Vec2) -> Self {
        Self {
            depth,
            normal,
            start,
            end: start + normal * depth,
        }
    }

    /// Same contact seen from the other body.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            depth: self.depth,
            normal: -self.normal,
            start: self.end,
            end: self.start,
        }
    }
}

/// A resolved contact between a dynamic body and a fixed (or sensor) body.
///
/// `delta` is the world-space displacement that was applied to the dynamic body:
/// zero for sensor contacts, purely vertical for a step-up, purely horizontal for
/// a push-out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub dynamic: BodyId,
    pub other: BodyId,
    pub other_is_sensor: bool,
    pub delta: Vec3,
}

impl CollisionEvent {
    /// True when the contact pushed the dynamic body upward (it is standing on `other`).
    #[inline]
    pub fn is_support(&self) -> bool {
        self.delta.y > 0.0
    }
}
