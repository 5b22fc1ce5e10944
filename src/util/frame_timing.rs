//! Per-frame delta and FPS tracking for the render loop.

use std::time::Duration;

/// Upper bound on a single frame delta.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame timing with delta tracking and FPS calculation.
///
/// Timestamps are monotonic offsets from the engine's start, so tests can
/// drive frames without a real clock.
pub struct FrameTiming {
    /// Timestamp of the previous frame, `None` before the first frame.
    last_frame: Option<Duration>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames observed since construction.
    frame_count: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            frame_count: 0,
        }
    }

    /// Record a frame at `now` and return the (clamped) delta since the
    /// previous frame. The first frame has a zero delta.
    pub fn begin_frame(&mut self, now: Duration) -> Duration {
        self.frame_count += 1;
        let Some(last) = self.last_frame.replace(now) else {
            return Duration::ZERO;
        };

        let elapsed = now.saturating_sub(last);
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
