//! Playback timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Presentation timing for route playback.
///
/// None of these values affect the energy or time results of a plan; they
/// only shape how a plan is replayed.
///
/// # Examples
///
/// ```
/// use agv_routing::playback::PlaybackConfig;
///
/// let cfg = PlaybackConfig::default();
/// // A 10 s leg at 0.45× plays for 4.5 s, i.e. 270 frames at 60 fps.
/// assert_eq!(cfg.frames_for(10.0), 270);
/// // Zero-length legs still get the minimum visible duration.
/// assert_eq!(cfg.frames_for(0.0), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    speed_scale: f64,
    min_leg_duration: f64,
    frame_rate: u32,
    dwell: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_scale: 0.45,
            min_leg_duration: 0.5,
            frame_rate: 60,
            dwell: Duration::from_millis(250),
        }
    }
}

impl PlaybackConfig {
    /// Sets the factor from real leg seconds to playback seconds.
    /// Negative or non-finite values are treated as zero.
    pub fn with_speed_scale(mut self, scale: f64) -> Self {
        self.speed_scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        self
    }

    /// Sets the shortest playback duration of a leg, in seconds.
    pub fn with_min_leg_duration(mut self, seconds: f64) -> Self {
        self.min_leg_duration = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self
    }

    /// Sets frames per second (at least 1).
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps.max(1);
        self
    }

    /// Sets the hold between legs.
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    /// Playback seconds per real leg second.
    pub fn speed_scale(&self) -> f64 {
        self.speed_scale
    }

    /// Minimum playback duration of a leg, in seconds.
    pub fn min_leg_duration(&self) -> f64 {
        self.min_leg_duration
    }

    /// Frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Hold between legs.
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Wall time of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Number of frames used to play a leg of `duration` real seconds.
    /// Always at least 1.
    pub fn frames_for(&self, duration: f64) -> u32 {
        let shown = (duration * self.speed_scale).max(self.min_leg_duration);
        let frames = (shown * f64::from(self.frame_rate)).round();
        if frames.is_finite() && frames >= 1.0 {
            frames.min(f64::from(u32::MAX)) as u32
        } else {
            1
        }
    }
}
