use std::fmt;
use std::time::{Duration, Instant};

/// Frame rate measured over one reporting interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsSample {
    /// Frames counted since the previous report, including the reporting frame.
    pub frames: u64,

    /// Wall time covered by this sample.
    pub elapsed: Duration,

    /// `frames / elapsed` in frames per second.
    pub fps: f64,
}

impl fmt::Display for FpsSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FPS: {:.1}", self.fps)
    }
}

/// Counts presented frames and yields an `FpsSample` roughly once per interval.
///
/// A sample is produced only when the time since the last report strictly
/// exceeds the interval. The counter and the timer restart right after each
/// sample.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_report: Instant,
    frames: u64,
    interval: Duration,
}

impl FpsCounter {
    /// Reporting interval used by the runtime.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Creates a counter that starts timing now.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    /// Creates a counter with an explicit start instant.
    pub fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            last_report: start,
            frames: 0,
            interval,
        }
    }

    /// Restarts timing from now and drops the pending count.
    ///
    /// Called once GPU setup finishes so startup time does not skew the first sample.
    pub fn reset(&mut self) {
        self.last_report = Instant::now();
        self.frames = 0;
    }

    /// Frames counted since the last report.
    pub fn pending_frames(&self) -> u64 {
        self.frames
    }

    /// Records one frame at the current time.
    pub fn tick(&mut self) -> Option<FpsSample> {
        self.tick_at(Instant::now())
    }

    /// Records one frame at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Option<FpsSample> {
        self.frames = self.frames.wrapping_add(1);

        let elapsed = now.saturating_duration_since(self.last_report);
        if elapsed <= self.interval {
            return None;
        }

        let sample = FpsSample {
            frames: self.frames,
            elapsed,
            fps: self.frames as f64 / elapsed.as_secs_f64(),
        };

        self.last_report = now;
        self.frames = 0;

        Some(sample)
    }
}
