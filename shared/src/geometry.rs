//! Horizontal-plane geometry helpers.
//!
//! Addition, subtraction, scaling, dot products and lengths come straight from
//! `nalgebra`. This module adds the pieces it does not provide in the exact form
//! the simulation needs: yaw rotation with the world's Y-axis convention, a
//! normalization that never divides by zero, and planar/world conversions.

use crate::collision::{
    Vec2, Vec3,
    settings::DIST_EPS,
};

/// Drop the vertical component: world `(x, y, z)` -> planar `(x, z)`.
#[inline]
pub fn to_planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lift a planar vector back to world space at height `y`.
#[inline]
pub fn from_planar(v: Vec2, y: f32) -> Vec3 {
    Vec3::new(v.x, y, v.y)
}

/// Unit vector in the direction of `v`, or zero when `v` is (nearly) zero-length.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.norm();
    if len > DIST_EPS { v / len } else { Vec2::zeros() }
}

/// Midpoint of two points.
#[inline]
pub fn average(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Rotate a planar vector by `yaw` radians about the vertical axis.
///
/// Matches a right-handed Y-up world: `(0, 1)` (world +Z) rotates to
/// `(sin yaw, cos yaw)`.
#[inline]
pub fn rotate(v: Vec2, yaw: f32) -> Vec2 {
    let (sin, cos) = yaw.sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Rotate `point` by `yaw` about `pivot`.
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, yaw: f32) -> Vec2 {
    pivot + rotate(point - pivot, yaw)
}

/// Planar facing direction for a yaw angle.
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec2 {
    rotate(Vec2::new(0.0, 1.0), yaw)
}

/// Planar distance squared between two points.
#[inline]
pub fn planar_distance_sq(a: Vec2, b: Vec2) -> f32 {
    (b - a).norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn normalize_zero_vector_falls_back_to_zero() {
        assert_eq!(normalize_or_zero(Vec2::zeros()), Vec2::zeros());
        assert_eq!(normalize_or_zero(Vec2::new(1.0e-9, 0.0)), Vec2::zeros());
    }

    #[test]
    fn normalize_returns_unit_length() {
        let n = normalize_or_zero(Vec2::new(3.0, -4.0));
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(n.x, 0.6, epsilon = 1.0e-6);
    }

    #[test]
    fn quarter_turn_maps_forward_onto_x() {
        let f = forward_from_yaw(FRAC_PI_2);
        assert_relative_eq!(f.x, 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(f.y, 0.0, epsilon = 1.0e-6);
    }

    #[test]
    fn rotate_about_keeps_pivot_fixed_and_preserves_distance() {
        let pivot = Vec2::new(2.0, 1.0);
        let p = Vec2::new(3.0, 1.0);
        let r = rotate_about(p, pivot, 1.234);
        assert_relative_eq!(rotate_about(pivot, pivot, 1.234), pivot);
        assert_relative_eq!(planar_distance_sq(pivot, r), 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn planar_round_trip_keeps_height() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(from_planar(to_planar(v), v.y), v);
        assert_eq!(average(Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0)), Vec2::new(1.0, 2.0));
    }
}
