use std::time::Duration;

/// Frame counter that reports fps once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    frame_count: u32,
    elapsed: Duration,
    fps: f32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_count: 0,
            elapsed: Duration::ZERO,
            fps: 0.0,
        }
    }

    /// Record one frame. Returns the new fps when an interval completes.
    pub fn tick(&mut self, delta: Duration) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        self.fps = self.frame_count as f32 / self.elapsed.as_secs_f32();
        self.frame_count = 0;
        self.elapsed = Duration::ZERO;
        Some(self.fps)
    }

    /// Last reported fps (0 until the first interval completes)
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
