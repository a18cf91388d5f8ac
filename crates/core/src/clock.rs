//! Fixed-timestep accumulator
//!
//! Decouples the simulation rate from the render rate. The driver reports
//! how much wall-clock time passed since the previous frame; the accumulator
//! answers how many fixed steps are now due and keeps the remainder for the
//! next frame. A slow frame yields several steps, a fast one yields none.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulated: Duration,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "fixed timestep must be non-zero");
        Self {
            step,
            accumulated: Duration::ZERO,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(ms)))
    }

    /// Time carried over that has not yet amounted to a full step
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    /// Add elapsed time and return how many steps are due
    ///
    /// A step is due once the carried time reaches the step length, so a
    /// frame of exactly one step yields one tick.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            due += 1;
        }
        due
    }

    /// Time left until the next step is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulated)
    }

    /// Drop any carried-over time
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
