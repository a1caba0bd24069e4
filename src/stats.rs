//! Sampling statistics
//!
//! Tracks per-tick outcomes plus a running mean and standard deviation
//! of the valid distance values, for the periodic statistics log line.

/// Counters and running moments over the sampled readings
///
/// Uses Welford's online algorithm so long runs stay numerically
/// stable. Invalid samples only bump counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStats {
    ticks: u64,
    valid: u64,
    invalid: u64,
    mean: f64,
    m2: f64,
}

impl SampleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a valid reading, in centimeters
    pub fn record_valid(&mut self, centimeters: f32) {
        self.ticks += 1;
        self.valid += 1;

        let x = f64::from(centimeters);
        let delta = x - self.mean;
        self.mean += delta / self.valid as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Record a tick that produced no usable reading
    pub fn record_invalid(&mut self) {
        self.ticks += 1;
        self.invalid += 1;
    }

    /// Total ticks observed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks that produced a valid reading
    pub fn valid(&self) -> u64 {
        self.valid
    }

    /// Ticks dropped to timeout, garbage, or a disabled channel
    pub fn invalid(&self) -> u64 {
        self.invalid
    }

    /// Mean of the valid readings, centimeters (0.0 before any)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the valid readings, centimeters
    pub fn stddev(&self) -> f64 {
        if self.valid == 0 {
            0.0
        } else {
            (self.m2 / self.valid as f64).sqrt()
        }
    }
}
