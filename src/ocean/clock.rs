//! Shared ocean animation clock.

/// Continuously advancing wave time, owned by the frame driver
///
/// Advanced once per tick; every evaluation within that tick reads the same
/// snapshot via [`OceanClock::time_f64`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanClock {
    /// Seconds, accumulated in f64
    time_s: f64,
    time_scale: f32,
}

impl Default for OceanClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OceanClock {
    /// Create a clock at t = 0 running at `time_scale` (1.0 = real time)
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_s: 0.0,
            time_scale,
        }
    }

    /// Current wave time (seconds), narrowed for evaluation and upload
    pub fn time(&self) -> f32 {
        self.time_s as f32
    }

    /// Current wave time (seconds) at full precision
    pub fn time_f64(&self) -> f64 {
        self.time_s
    }

    /// Advance by one frame's delta (seconds)
    ///
    /// Negative or non-finite deltas are ignored so the clock never runs backward.
    pub fn advance(&mut self, delta_s: f32) -> f32 {
        if delta_s.is_finite() && delta_s > 0.0 {
            self.time_s += delta_s as f64 * self.time_scale as f64;
        }
        self.time()
    }

    /// Jump to an absolute time (seconds)
    pub fn set_time(&mut self, time_s: f64) {
        if time_s.is_finite() {
            self.time_s = time_s;
        }
    }
}
