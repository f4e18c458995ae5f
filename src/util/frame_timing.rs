//! Frame delta measurement and smoothed FPS estimation.

use web_time::Instant;

/// Frame timing: delta measurement and smoothed FPS.
///
/// Hosts whose scheduler already supplies a per-frame delta feed it to
/// [`record`](FrameTiming::record); hosts without one call
/// [`begin_frame`](FrameTiming::begin_frame) at the top of each frame
/// and use the returned delta for the engine tick.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the previous `begin_frame` call.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer. The FPS estimate starts at 60 and
    /// converges onto the observed rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Measure the delta since the previous call, in seconds, and fold
    /// it into the FPS estimate.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        dt
    }

    /// Fold an externally measured frame delta into the FPS estimate.
    /// Non-positive or non-finite deltas are ignored.
    pub fn record(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_recorded_rate() {
        let mut timing = FrameTiming::new();
        for _ in 0..300 {
            timing.record(0.01);
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn ignores_hostile_deltas() {
        let mut timing = FrameTiming::new();
        let before = timing.fps();
        timing.record(0.0);
        timing.record(-1.0);
        timing.record(f32::NAN);
        timing.record(f32::INFINITY);
        assert_eq!(timing.fps(), before);
    }

    #[test]
    fn begin_frame_measures_elapsed_time() {
        let mut timing = FrameTiming::new();
        let _ = timing.begin_frame();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let dt = timing.begin_frame();
        assert!(dt >= 0.004, "measured dt {dt} too small");
    }
}
