use crate::{body::Body, geometry::to_planar};

/// Coarse reject: bounding circles in the horizontal plane plus vertical extents.
///
/// Returns true only when the two bodies could overlap. A body never overlaps
/// itself.
#[inline]
pub fn may_overlap(a: &Body, b: &Body) -> bool {
    if a.id == b.id {
        return false;
    }

    let ca = a.center();
    let cb = b.center();

    let reach = a.bounding_radius() + b.bounding_radius();
    if (to_planar(cb) - to_planar(ca)).norm_squared() >= reach * reach {
        return false;
    }

    (cb.y - ca.y).abs() < a.half_height + b.half_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Vec3;

    fn cylinder(id: u32, center: Vec3) -> Body {
        Body::new_cylinder(id, center, Vec3::new(0.5, 0.8, 0.5), 0.0, true, false)
    }

    #[test]
    fn self_pair_is_rejected() {
        let a = cylinder(1, Vec3::zeros());
        assert!(!may_overlap(&a, &a));
    }

    #[test]
    fn horizontal_gap_rejects() {
        let a = cylinder(1, Vec3::zeros());
        let b = cylinder(2, Vec3::new(0.6, 0.0, 0.0));
        assert!(!may_overlap(&a, &b));
        let c = cylinder(3, Vec3::new(0.4, 0.0, 0.0));
        assert!(may_overlap(&a, &c));
    }

    #[test]
    fn vertical_gap_rejects() {
        let a = cylinder(1, Vec3::zeros());
        let above = cylinder(2, Vec3::new(0.0, 0.81, 0.0));
        assert!(!may_overlap(&a, &above));
    }

    #[test]
    fn rotated_box_uses_its_half_diagonal() {
        let floor = Body::new_box(1, Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0), 0.7, false, false);
        // Corner reach is sqrt(2) ~ 1.414, plus the cylinder's 0.25.
        let near = cylinder(2, Vec3::new(1.6, 0.0, 0.0));
        let far = cylinder(3, Vec3::new(1.7, 0.0, 0.0));
        assert!(may_overlap(&floor, &near));
        assert!(!may_overlap(&floor, &far));
    }
}
