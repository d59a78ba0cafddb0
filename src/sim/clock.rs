//! Frame clock with clamped delta time
//!
//! Real drivers hand us wall-clock timestamps from whatever refresh callback
//! they use. The clock turns those into bounded timesteps: the first sample
//! after a reset only records the baseline, and every later step is clamped
//! so a stalled or backgrounded driver cannot feed the simulation a step
//! large enough to tunnel the bird through geometry.

/// Converts driver timestamps into clamped per-tick deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Maximum step returned from [`FrameClock::sample`] (seconds)
    dt_max: f32,
    /// Timestamp of the previous sample, `None` until the baseline is set
    last: Option<f64>,
}

impl FrameClock {
    pub fn new(dt_max: f32) -> Self {
        Self { dt_max, last: None }
    }

    /// Feed the current timestamp (seconds); returns the clamped delta since
    /// the previous sample, or `None` on the baseline call. The caller must
    /// advance no simulation state on a `None`.
    pub fn sample(&mut self, now_secs: f64) -> Option<f32> {
        let last = match self.last {
            Some(last) => last,
            None => {
                self.last = Some(now_secs);
                return None;
            }
        };
        self.last = Some(now_secs);
        // Negative deltas (clock skew, driver bugs) advance nothing
        let dt = (now_secs - last).max(0.0) as f32;
        Some(dt.min(self.dt_max))
    }

    /// Drop the baseline; the next [`FrameClock::sample`] records a new one.
    /// Called on session start so time spent on the start screen never
    /// becomes a giant first step.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
