use jumpdudes_shared::MotionKind;

/// Wave driving a mover row. Mirrors the shared `MotionKind`.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbMotionKind {
    Linear,
    Sine,
}

impl From<MotionKind> for DbMotionKind {
    fn from(kind: MotionKind) -> Self {
        match kind {
            MotionKind::Linear => Self::Linear,
            MotionKind::Sine => Self::Sine,
        }
    }
}

impl From<DbMotionKind> for MotionKind {
    fn from(kind: DbMotionKind) -> Self {
        match kind {
            DbMotionKind::Linear => Self::Linear,
            DbMotionKind::Sine => Self::Sine,
        }
    }
}
