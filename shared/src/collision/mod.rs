/*!
Collision root module.

Detection and resolution for Y-aligned boxes and cylinders in the horizontal
plane, with independent vertical handling. The code is split for clarity:

- types:        shared data types (Collision, CollisionEvent) and math aliases
- settings:     tolerances
- broad:        bounding-circle + vertical-extent reject
- narrow_phase: circle/circle, box/box (SAT) and box/circle (Voronoi) tests
- resolve:      dynamic-vs-fixed orchestration (sensor, step-up, push-out)
*/

pub mod broad;
pub mod narrow_phase;
pub mod resolve;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::may_overlap;
pub use narrow_phase::collide;
pub use resolve::{CollisionListener, resolve, resolve_with};
pub use types::{Collision, CollisionEvent, Vec2, Vec3};
