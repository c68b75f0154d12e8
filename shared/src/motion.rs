//! Scripted platform motion.
//!
//! Everything here is a pure function of the motion descriptor and the
//! externally supplied game clock (integer milliseconds), so independent
//! instances fed the same clock agree on every platform position.

use serde::{Deserialize, Serialize};

use crate::{body::BodyId, collision::Vec3};

/// Shape of the unit wave driving a mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    /// Triangular ping-pong: 0 -> 1 -> 0 at constant speed.
    Linear,
    /// Eased ping-pong with the same phase as `Linear`.
    Sine,
}

/// Time-parameterized displacement from a mover's rest position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub kind: MotionKind,
    /// Displacement at the far end of the travel (meters).
    pub amount: Vec3,
    /// Length of one full there-and-back cycle.
    #[serde(rename = "interval")]
    pub interval_ms: u64,
    /// Phase shift added to the clock; may be negative.
    #[serde(rename = "offset", default)]
    pub offset_ms: i64,
    /// Time held at each end of the travel, taken out of the interval.
    #[serde(rename = "pause", default)]
    pub pause_ms: u64,
}

impl Motion {
    /// Cycle phase in `[0, 1)`. A zero interval pins the phase to 0.
    pub fn phase(&self, time_ms: u64) -> f32 {
        if self.interval_ms == 0 {
            return 0.0;
        }
        let local = (i128::from(time_ms) + i128::from(self.offset_ms)).rem_euclid(i128::from(self.interval_ms));
        local as f32 / self.interval_ms as f32
    }

    /// Unit travel fraction in `[0, 1]` at `time_ms`.
    pub fn wave(&self, time_ms: u64) -> f32 {
        let t = self.phase(time_ms);
        let raw = match self.kind {
            MotionKind::Linear => {
                if t > 0.5 {
                    2.0 * (1.0 - t)
                } else {
                    2.0 * t
                }
            }
            MotionKind::Sine => (1.0 - (std::f32::consts::TAU * t).cos()) * 0.5,
        };

        if self.pause_ms == 0 || self.interval_ms == 0 {
            return raw;
        }
        let hold = (self.pause_ms as f32 / self.interval_ms as f32).min(0.49);
        ((raw - hold) / (1.0 - 2.0 * hold)).clamp(0.0, 1.0)
    }
}

/// A fixed body whose position follows a scripted motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Level element name, kept for presentation lookups.
    pub name: String,
    pub body_id: BodyId,
    pub motion: Motion,
    /// Rest position (`wave == 0`).
    pub base: Vec3,
}

/// Absolute position of a mover's body at `time_ms`.
pub fn location_at(mover: &Mover, time_ms: u64) -> Vec3 {
    mover.base + mover.motion.amount * mover.motion.wave(time_ms)
}

/// Per-tick motion plan: where the mover starts this tick and how far it
/// travels in each sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoverStep {
    pub body_id: BodyId,
    pub start: Vec3,
    pub per_substep: Vec3,
}

/// Spread the displacement between `time_ms` and one tick later evenly over
/// `substeps`.
pub fn plan_tick(mover: &Mover, time_ms: u64, tick_ms: u64, substeps: u32) -> MoverStep {
    let start = location_at(mover, time_ms);
    let end = location_at(mover, time_ms.wrapping_add(tick_ms));
    MoverStep {
        body_id: mover.body_id,
        start,
        per_substep: (end - start) / substeps.max(1) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mover(kind: MotionKind, pause_ms: u64) -> Mover {
        Mover {
            name: "platform".into(),
            body_id: 1,
            motion: Motion {
                kind,
                amount: Vec3::new(0.0, 0.0, 2.0),
                interval_ms: 1000,
                offset_ms: 0,
                pause_ms,
            },
            base: Vec3::new(1.0, 2.0, 3.0),
        }
    }

    #[test]
    fn linear_starts_at_base() {
        let m = mover(MotionKind::Linear, 0);
        assert_eq!(location_at(&m, 0), m.base);
    }

    #[test]
    fn linear_quarter_phase_is_half_travel() {
        let m = mover(MotionKind::Linear, 0);
        assert_eq!(location_at(&m, 250), m.base + Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(location_at(&m, 500), m.base + Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn linear_mirrors_after_half_cycle() {
        let m = mover(MotionKind::Linear, 0);
        assert_relative_eq!(location_at(&m, 750), location_at(&m, 250), epsilon = 1.0e-6);
        assert_eq!(location_at(&m, 1000), location_at(&m, 0));
        assert_eq!(location_at(&m, 1_000_250), location_at(&m, 250));
    }

    #[test]
    fn offset_shifts_the_phase() {
        let mut m = mover(MotionKind::Linear, 0);
        m.motion.offset_ms = 250;
        assert_eq!(location_at(&m, 0), m.base + Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn negative_offset_wraps_backwards() {
        let mut m = mover(MotionKind::Linear, 0);
        let plain = m.clone();
        m.motion.offset_ms = -250;
        assert_eq!(m.motion.phase(0), 0.75);
        assert_relative_eq!(location_at(&m, 0), location_at(&plain, 750), epsilon = 1.0e-6);
        m.motion.offset_ms = -1250;
        assert_eq!(m.motion.phase(0), 0.75);
    }

    #[test]
    fn offset_near_the_clock_limit_does_not_overflow() {
        let mut m = mover(MotionKind::Linear, 0);
        m.motion.offset_ms = i64::MAX;
        let phase = m.motion.phase(u64::MAX);
        assert!((0.0..1.0).contains(&phase));
    }

    #[test]
    fn sine_shares_the_linear_endpoints() {
        let m = mover(MotionKind::Sine, 0);
        assert_relative_eq!(location_at(&m, 0), m.base, epsilon = 1.0e-6);
        assert_relative_eq!(location_at(&m, 500), m.base + Vec3::new(0.0, 0.0, 2.0), epsilon = 1.0e-6);
        assert_relative_eq!(location_at(&m, 250), m.base + Vec3::new(0.0, 0.0, 1.0), epsilon = 1.0e-5);
    }

    #[test]
    fn pause_holds_the_ends() {
        let m = mover(MotionKind::Linear, 100);
        assert_eq!(location_at(&m, 40), m.base);
        assert_eq!(location_at(&m, 960), m.base);
        assert_relative_eq!(location_at(&m, 480), m.base + Vec3::new(0.0, 0.0, 2.0), epsilon = 1.0e-6);
        assert_relative_eq!(location_at(&m, 250), m.base + Vec3::new(0.0, 0.0, 1.0), epsilon = 1.0e-5);
    }

    #[test]
    fn zero_interval_stays_at_base() {
        let mut m = mover(MotionKind::Linear, 0);
        m.motion.interval_ms = 0;
        assert_eq!(location_at(&m, 12345), m.base);
    }

    #[test]
    fn tick_plan_reaches_next_tick_position() {
        let m = mover(MotionKind::Linear, 0);
        let step = plan_tick(&m, 100, 50, 20);
        assert_eq!(step.start, location_at(&m, 100));
        assert_relative_eq!(step.start + step.per_substep * 20.0, location_at(&m, 150), epsilon = 1.0e-5);
    }
}
