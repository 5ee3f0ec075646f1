//! Playback session state.

use std::collections::BTreeSet;

use crate::models::Point;

/// Lifecycle phase of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// No session; initial state and the state after `reset`/`stop`.
    #[default]
    Idle,
    /// Frames are being produced.
    Running,
    /// Halted mid-route by a cancellation request. Only `start` (from Base)
    /// or `reset` leave this phase.
    Paused,
    /// Every leg was played.
    Finished,
}

/// Mutable state of one playback session.
///
/// Owned and mutated only by
/// [`PlaybackController`](super::PlaybackController); readers get a shared
/// reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub(super) position: Point,
    pub(super) current_leg: usize,
    pub(super) leg_progress: f64,
    pub(super) progress_percent: u8,
    pub(super) picked: BTreeSet<String>,
    pub(super) phase: PlaybackPhase,
}

impl PlaybackState {
    /// Last computed vehicle position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Index of the leg being played (or last played).
    pub fn current_leg(&self) -> usize {
        self.current_leg
    }

    /// Fraction of the current leg covered, in `[0, 1]`.
    pub fn leg_progress(&self) -> f64 {
        self.leg_progress
    }

    /// Whole-route progress, `0..=100`.
    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Names of the package stops reached so far.
    pub fn picked_stops(&self) -> &BTreeSet<String> {
        &self.picked
    }

    /// Returns `true` if the named stop has been picked.
    pub fn is_picked(&self, name: &str) -> bool {
        self.picked.contains(name)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }
}
