/*!
Collision tolerances.

Keeping these together makes tuning easier and keeps every caller on the same
numbers, which matters for lockstep agreement between independent instances.

Notes
- Distances are in meters.
- Favor practical world-space tolerances over machine epsilon for robust behavior.
*/

/// Practical small distance for comparisons (meters).
/// Used for zero-length guards in normalization.
pub const DIST_EPS: f32 = 1.0e-6;

/// A push-out shorter than this is ignored (meters).
/// Avoids emitting contact events for resting float noise.
pub const PUSH_OUT_EPS: f32 = 1.0e-4;

/// Default maximum vertical penetration that resolves as a step-up (meters).
pub const DEFAULT_ALLOWED_STEP_SIZE: f32 = 0.2;
