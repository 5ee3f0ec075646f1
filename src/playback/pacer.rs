//! Frame pacing sources.
//!
//! The controller never sleeps on its own. Between ticks it asks a
//! [`FramePacer`] to wait, so the same state machine runs against wall time
//! ([`RealtimePacer`]) or a simulated clock ([`VirtualClock`]).

use std::thread;
use std::time::{Duration, Instant};

/// Host-provided pacing between playback ticks.
pub trait FramePacer {
    /// Blocks until the next frame boundary.
    fn wait_frame(&mut self);

    /// Blocks for the inter-leg hold.
    fn dwell(&mut self, duration: Duration);
}

/// Paces playback against the wall clock at a fixed frame interval.
///
/// Frame boundaries are scheduled from the previous boundary, so time spent
/// in observers does not accumulate as drift.
#[derive(Debug, Clone)]
pub struct RealtimePacer {
    frame_interval: Duration,
    next_frame: Option<Instant>,
}

impl RealtimePacer {
    /// Creates a pacer with the given frame interval.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            next_frame: None,
        }
    }
}

impl FramePacer for RealtimePacer {
    fn wait_frame(&mut self) {
        let now = Instant::now();
        let target = self.next_frame.unwrap_or(now + self.frame_interval);
        if target > now {
            thread::sleep(target - now);
        }
        // Fall back to `now` after a long stall instead of bursting frames.
        let base = Instant::now()
            .checked_sub(self.frame_interval)
            .map_or(target, |floor| target.max(floor));
        self.next_frame = Some(base + self.frame_interval);
    }

    fn dwell(&mut self, duration: Duration) {
        thread::sleep(duration);
        self.next_frame = None;
    }
}

/// Simulated clock: returns immediately and records how much presentation
/// time would have passed.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use agv_routing::playback::{FramePacer, VirtualClock};
///
/// let mut clock = VirtualClock::new(Duration::from_millis(20));
/// clock.wait_frame();
/// clock.wait_frame();
/// clock.dwell(Duration::from_millis(250));
/// assert_eq!(clock.frames(), 2);
/// assert_eq!(clock.elapsed(), Duration::from_millis(290));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    frame_interval: Duration,
    elapsed: Duration,
    frames: u64,
    dwells: u64,
}

impl VirtualClock {
    /// Creates a clock advancing `frame_interval` per frame.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            ..Self::default()
        }
    }

    /// Simulated time passed so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frame waits so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Dwell waits so far.
    pub fn dwells(&self) -> u64 {
        self.dwells
    }
}

impl FramePacer for VirtualClock {
    fn wait_frame(&mut self) {
        self.frames += 1;
        self.elapsed += self.frame_interval;
    }

    fn dwell(&mut self, duration: Duration) {
        self.dwells += 1;
        self.elapsed += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock_counts() {
        let mut c = VirtualClock::new(Duration::from_millis(10));
        for _ in 0..5 {
            c.wait_frame();
        }
        c.dwell(Duration::from_millis(100));
        assert_eq!(c.frames(), 5);
        assert_eq!(c.dwells(), 1);
        assert_eq!(c.elapsed(), Duration::from_millis(150));
    }

    #[test]
    fn test_realtime_pacer_waits() {
        let mut p = RealtimePacer::new(Duration::from_millis(2));
        let start = Instant::now();
        p.wait_frame();
        p.wait_frame();
        p.dwell(Duration::from_millis(3));
        assert!(start.elapsed() >= Duration::from_millis(7));
    }
}
