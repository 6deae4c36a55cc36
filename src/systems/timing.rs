//! Frame pacing and frame-rate measurement

use std::time::{Duration, Instant};

/// Schedules frames at a fixed target rate
///
/// The event loop sleeps until [`next_frame`](Self::next_frame) and only
/// steps the simulation once a frame [`is_due`](Self::is_due).
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// Pace at `target_fps`; zero disables the cap
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let frame_interval = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / target_fps as u64)
        };
        Self {
            frame_interval,
            next_frame: now,
        }
    }

    /// Time between frames
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Deadline of the next frame
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Whether the next frame should run at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record that a frame ran at `now` and schedule the next one
    ///
    /// After a stall the schedule restarts from `now` rather than running
    /// a burst of catch-up frames.
    pub fn frame_done(&mut self, now: Instant) {
        self.next_frame += self.frame_interval;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_interval;
        }
    }
}

/// Frames-per-second averaged over one-second windows
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0,
        }
    }

    /// Count a frame; returns the new FPS when a window completes
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Self::WINDOW {
            return None;
        }

        self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Most recently measured FPS
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_interval() {
        let pacer = FramePacer::new(60, Instant::now());
        let micros = pacer.frame_interval().as_micros();
        assert!((16_666..=16_667).contains(&micros));
    }

    #[test]
    fn test_pacer_schedules_next_frame() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        assert!(pacer.is_due(start));

        pacer.frame_done(start);
        assert_eq!(pacer.next_frame(), start + Duration::from_millis(20));
        assert!(!pacer.is_due(start + Duration::from_millis(10)));
        assert!(pacer.is_due(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_pacer_keeps_cadence_when_slightly_late() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        pacer.frame_done(start);
        pacer.frame_done(start + Duration::from_millis(25));
        assert_eq!(pacer.next_frame(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_pacer_resets_after_stall() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        let late = start + Duration::from_secs(2);
        pacer.frame_done(late);
        assert_eq!(pacer.next_frame(), late + Duration::from_millis(20));
    }

    #[test]
    fn test_uncapped_pacer_is_always_due() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(0, start);
        pacer.frame_done(start);
        assert!(pacer.is_due(start));
    }

    #[test]
    fn test_fps_counter_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..60 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 16)), None);
        }
        assert_eq!(counter.tick(start + Duration::from_secs(1)), Some(60));
        assert_eq!(counter.fps(), 60);
    }
}
