//! Exact overlap tests for the three shape pairs.
//!
//! All tests work in the horizontal plane. Every returned [`Collision`] has its
//! normal pointing from the first body toward the second, so the second body is
//! separated by moving it `normal * depth`. Vertical overlap is the broad
//! phase's and the resolver's concern.

use crate::{
    body::{Body, BoxShape, Shape},
    geometry::{normalize_or_zero, to_planar},
};

use super::types::{Collision, Vec2};

/// Box-vs-circle result, keeping track of whether the circle center was inside the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCircleHit {
    pub collision: Collision,
    pub inside: bool,
}

/// Dispatch on the shape pair. Returns `None` when the bodies do not overlap.
pub fn collide(a: &Body, b: &Body) -> Option<Collision> {
    let pa = to_planar(a.center());
    let pb = to_planar(b.center());
    match (a.shape(), b.shape()) {
        (Shape::Cylinder { radius: ra }, Shape::Cylinder { radius: rb }) => {
            circle_circle(pa, *ra, pb, *rb)
        }
        (Shape::Box(box_a), Shape::Box(box_b)) => box_box(box_a, box_b),
        (Shape::Box(box_a), Shape::Cylinder { radius }) => {
            box_circle(box_a, pb, *radius).map(|hit| hit.collision)
        }
        (Shape::Cylinder { radius }, Shape::Box(box_b)) => {
            box_circle(box_b, pa, *radius).map(|hit| hit.collision.flipped())
        }
    }
}

/// Circle vs circle: overlap iff the center distance is below the sum of radii.
pub fn circle_circle(ca: Vec2, ra: f32, cb: Vec2, rb: f32) -> Option<Collision> {
    let delta = cb - ca;
    let dist = delta.norm();
    let reach = ra + rb;
    if dist >= reach {
        return None;
    }

    let normal = normalize_or_zero(delta);
    Some(Collision::new(reach - dist, normal, cb - normal * rb))
}

/// Box vs box using the separating-axis theorem over both boxes' face normals.
///
/// The axis of least penetration wins. On a tie the first box's axis is kept.
pub fn box_box(a: &BoxShape, b: &BoxShape) -> Option<Collision> {
    let (depth_a, normal_a, start_a) = least_penetration(a, b)?;
    let (depth_b, normal_b, start_b) = least_penetration(b, a)?;

    if depth_b < depth_a {
        // Found from `b`'s side: its normal points b -> a.
        Some(Collision::new(depth_b, normal_b, start_b).flipped())
    } else {
        Some(Collision::new(depth_a, normal_a, start_a))
    }
}

/// Test each face normal of `reference` as a separating axis against `other`.
///
/// Returns `(depth, normal, deepest vertex of other)` for the face with the
/// smallest penetration, or `None` as soon as one face separates the boxes.
fn least_penetration(reference: &BoxShape, other: &BoxShape) -> Option<(f32, Vec2, Vec2)> {
    let mut best: Option<(f32, Vec2, Vec2)> = None;

    for i in 0..4 {
        let normal = reference.normals[i];
        let face = reference.vertices[i];

        // Deepest vertex of `other` behind this face.
        let (separation, deepest) = other
            .vertices
            .iter()
            .map(|v| (normal.dot(&(v - face)), *v))
            .fold((f32::INFINITY, Vec2::zeros()), |acc, cur| if cur.0 < acc.0 { cur } else { acc });

        if separation >= 0.0 {
            return None;
        }

        let depth = -separation;
        if best.is_none_or(|(d, _, _)| depth < d) {
            best = Some((depth, normal, deepest));
        }
    }

    best
}

/// Box vs circle using Voronoi-region classification around the box.
///
/// - Center inside the box: push out through the face it is closest to.
/// - Center in a corner's wedge: circle vs point.
/// - Otherwise: circle vs face.
pub fn box_circle(b: &BoxShape, center: Vec2, radius: f32) -> Option<BoxCircleHit> {
    // Face the center is most "outside" of.
    let mut face = 0;
    let mut best = f32::NEG_INFINITY;
    for i in 0..4 {
        let projection = b.normals[i].dot(&(center - b.vertices[i]));
        if projection > best {
            best = projection;
            face = i;
        }
    }

    if best < 0.0 {
        let normal = b.normals[face];
        return Some(BoxCircleHit {
            collision: Collision::new(radius - best, normal, center - normal * radius),
            inside: true,
        });
    }

    let v0 = b.vertices[face];
    let v1 = b.vertices[(face + 1) % 4];

    let corner = if (center - v0).dot(&(v1 - v0)) < 0.0 {
        Some(v0)
    } else if (center - v1).dot(&(v0 - v1)) < 0.0 {
        Some(v1)
    } else {
        None
    };

    let (depth, normal) = match corner {
        Some(vertex) => {
            let dist = (center - vertex).norm();
            if dist >= radius {
                return None;
            }
            (radius - dist, normalize_or_zero(center - vertex))
        }
        None => {
            if best >= radius {
                return None;
            }
            (radius - best, b.normals[face])
        }
    };

    Some(BoxCircleHit {
        collision: Collision::new(depth, normal, center - normal * radius),
        inside: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        body::Body,
        collision::Vec3,
    };
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    fn box_shape(center: Vec3, size: Vec3, angle: f32) -> BoxShape {
        match *Body::new_box(1, center, size, angle, false, false).shape() {
            Shape::Box(b) => b,
            Shape::Cylinder { .. } => unreachable!(),
        }
    }

    #[test]
    fn circles_collide_with_exact_depth() {
        let c = circle_circle(Vec2::new(0.0, 0.0), 2.5, Vec2::new(3.0, 4.0), 3.0)
            .expect("overlapping circles");
        assert_eq!(c.depth, 2.5 + 3.0 - 5.0);
        assert_relative_eq!(c.normal, Vec2::new(0.6, 0.8), epsilon = 1.0e-6);
    }

    #[test]
    fn circles_at_exact_reach_do_not_collide() {
        assert!(circle_circle(Vec2::new(0.0, 0.0), 2.0, Vec2::new(3.0, 4.0), 3.0).is_none());
        assert!(circle_circle(Vec2::new(0.0, 0.0), 1.0, Vec2::new(3.0, 4.0), 1.0).is_none());
    }

    #[test]
    fn concentric_circles_report_zero_normal() {
        let c = circle_circle(Vec2::zeros(), 1.0, Vec2::zeros(), 1.0).expect("overlap");
        assert_eq!(c.normal, Vec2::zeros());
        assert_eq!(c.depth, 2.0);
    }

    #[test]
    fn axis_aligned_boxes_use_smaller_overlap() {
        let a = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0);
        // Overlap 0.25 on x, 1.5 on z.
        let b = box_shape(Vec3::new(1.25, 0.0, 0.5), Vec3::new(1.0, 1.0, 2.0), 0.0);
        let c = box_box(&a, &b).expect("overlap");
        assert_relative_eq!(c.depth, 0.25, epsilon = 1.0e-6);
        assert_relative_eq!(c.normal, Vec2::new(1.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn box_normal_points_toward_second_box_from_either_side() {
        let a = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0);
        let b = box_shape(Vec3::new(0.0, 0.0, -1.5), Vec3::new(4.0, 1.0, 2.0), 0.0);
        let ab = box_box(&a, &b).expect("overlap");
        let ba = box_box(&b, &a).expect("overlap");
        assert_relative_eq!(ab.normal, Vec2::new(0.0, -1.0), epsilon = 1.0e-6);
        assert_relative_eq!(ba.normal, Vec2::new(0.0, 1.0), epsilon = 1.0e-6);
        assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-6);
    }

    #[test]
    fn rotated_box_beside_corner_is_separated() {
        let a = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0);
        // A diamond whose bounding square overlaps `a` but whose edge does not.
        let b = box_shape(Vec3::new(1.9, 0.0, 1.9), Vec3::new(2.0, 1.0, 2.0), FRAC_PI_4);
        assert!(box_box(&a, &b).is_none());
    }

    #[test]
    fn circle_center_inside_box_reports_inside() {
        let b = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 4.0), 0.3);
        let hit = box_circle(&b, Vec2::new(0.2, -0.1), 0.25).expect("inside");
        assert!(hit.inside);
        assert!(hit.collision.depth >= 0.0);
    }

    #[test]
    fn circle_against_face() {
        let b = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0);
        let hit = box_circle(&b, Vec2::new(1.1, 0.0), 0.25).expect("face contact");
        assert!(!hit.inside);
        assert_relative_eq!(hit.collision.depth, 0.15, epsilon = 1.0e-6);
        assert_relative_eq!(hit.collision.normal, Vec2::new(1.0, 0.0), epsilon = 1.0e-6);
        assert!(box_circle(&b, Vec2::new(1.3, 0.0), 0.25).is_none());
    }

    #[test]
    fn circle_against_corner() {
        let b = box_shape(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0);
        let hit = box_circle(&b, Vec2::new(1.1, 1.1), 0.25).expect("corner contact");
        let expected = 0.25 - (0.1f32 * 0.1 * 2.0).sqrt();
        assert_relative_eq!(hit.collision.depth, expected, epsilon = 1.0e-5);
        assert_relative_eq!(hit.collision.normal.x, hit.collision.normal.y, epsilon = 1.0e-6);
        // Inside the corner's bounding square but beyond the radius.
        assert!(box_circle(&b, Vec2::new(1.2, 1.2), 0.25).is_none());
    }

    #[test]
    fn swapped_order_flips_normal() {
        let floor = Body::new_box(1, Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.0, false, false);
        let player = Body::new_cylinder(2, Vec3::new(1.1, 0.0, 0.0), Vec3::new(0.5, 0.8, 0.5), 0.0, true, false);
        let box_first = collide(&floor, &player).expect("overlap");
        let circle_first = collide(&player, &floor).expect("overlap");
        assert_relative_eq!(box_first.normal, -circle_first.normal);
        assert_relative_eq!(box_first.depth, circle_first.depth);
    }
}
