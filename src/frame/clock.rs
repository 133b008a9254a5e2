//! Frame clock: delta time, smoothed FPS, and optional frame limiting.

use web_time::{Duration, Instant};

/// Measures per-frame delta time with a smoothed FPS readout and an
/// optional target-rate gate.
///
/// [`tick`](Self::tick) is called once at the start of each frame and
/// returns the time elapsed since the previous tick, the delta handed to
/// every [`Updatable`](crate::frame::Updatable) for that frame.
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Delta measured by the most recent tick
    delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Whether enough time has passed since the last tick to run a frame.
    /// Always true for unlimited-rate clocks.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Start a new frame: measure and return the delta since the previous
    /// tick, and fold it into the smoothed FPS.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.delta = elapsed;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Delta measured by the most recent [`tick`](Self::tick).
    #[must_use]
    pub const fn delta(&self) -> Duration {
        self.delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0)
    }
}
