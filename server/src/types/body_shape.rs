use jumpdudes_shared::ShapeKind;

/// Collision footprint of a body row.
///
/// Semantics:
/// - `Box`: oriented box; the row's `size` holds the full extents.
/// - `Cylinder`: Y-aligned cylinder; `size.x` is the diameter, `size.y` the height.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    Box,
    Cylinder,
}

impl From<ShapeKind> for BodyShape {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Box => Self::Box,
            ShapeKind::Cylinder => Self::Cylinder,
        }
    }
}
