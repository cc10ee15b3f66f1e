//! Fixed timestep accumulator
//!
//! Hosts feed in wall-clock frame times and get back how many fixed
//! simulation steps to run, so physics stays stable on any refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            log::warn!("Invalid clock step {step}, using {SIM_DT}");
            SIM_DT
        };
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Fixed step length (seconds)
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Bank a frame's elapsed time and return the number of steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Long stalls (tab hidden, debugger) are clamped rather than replayed
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        substeps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedClock::new(0.25, 8);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 0);
        assert!((clock.alpha() - 0.5).abs() < 1e-6);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 1);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_clamps_long_frames() {
        let mut clock = FixedClock::new(0.03125, 8);
        // 5 seconds clamps to 0.1s = 3 whole steps + remainder
        assert_eq!(clock.advance(5.0), 3);
    }

    #[test]
    fn test_caps_substeps_and_drops_backlog() {
        let mut clock = FixedClock::new(0.0078125, 4);
        assert_eq!(clock.advance(0.1), 4);
        assert!(clock.alpha() < 1.0);
    }

    #[test]
    fn test_rejects_bad_step() {
        for step in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let mut clock = FixedClock::new(step, 4);
            assert_eq!(clock.step(), SIM_DT);
            assert_eq!(clock.advance(0.1), 4);
            assert!(clock.alpha().is_finite());
        }
    }

    #[test]
    fn test_ignores_bad_frame_times() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
