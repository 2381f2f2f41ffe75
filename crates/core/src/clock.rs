//! Fixed-timestep clock.
//!
//! Converts wall-clock time into a whole number of simulation ticks. The
//! remainder carries over to the next frame, so the simulation advances at the
//! same rate regardless of how often (or how irregularly) the host renders.

use std::time::Duration;

use crate::types::TICK_MS;

/// Default cap on ticks simulated for a single `advance` call.
pub const DEFAULT_MAX_STEPS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FixedStep {
    /// `step` must be non-zero.
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    /// Limit catch-up after a stall. Time beyond the cap is dropped.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed elapsed wall time; returns the number of ticks to simulate now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(elapsed);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            // Spiral guard: keep only the sub-step remainder.
            let rem = self.accumulator.as_nanos() % self.step.as_nanos();
            self.accumulator = Duration::from_nanos(rem as u64);
        }

        steps
    }

    /// Fraction of the next tick already accumulated, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        self.accumulator.as_secs_f64() / self.step.as_secs_f64()
    }

    /// Wall time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::from_millis(TICK_MS)
    }
}
