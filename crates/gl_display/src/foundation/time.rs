//! Frame timing

use std::time::Instant;

/// Clock measuring time between presented frames
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_count: 0,
        }
    }

    /// Mark the end of a frame
    ///
    /// Returns the seconds since the previous tick and the seconds since the
    /// clock was created.
    pub fn tick(&mut self) -> (f32, f64) {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        let elapsed = now.duration_since(self.start).as_secs_f64();
        self.last = now;
        self.frame_count += 1;

        (delta, elapsed)
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Average frames per second since the clock was created
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f64 {
        let elapsed = self.last.duration_since(self.start).as_secs_f64();
        if elapsed > 0.0 {
            self.frame_count as f64 / elapsed
        } else {
            0.0
        }
    }
}
