//! Route playback state machine.
//!
//! # Model
//!
//! ```text
//!            start                    every leg played
//!   Idle ───────────▶ Running ─────────────────────────▶ Finished
//!    ▲                 │  ▲                                  │
//!    │ reset/stop      │  │ start (restarts from Base)       │ start
//!    │                 ▼  │                                  │
//!    └──────────────  Paused ◀──── pause / cancel handle     │
//!                                                            ▼
//!                                                         Running
//! ```
//!
//! Each [`tick`](PlaybackController::tick) produces at most one frame. A
//! leg of `d` seconds is played in `frames_for(d)` frames, linearly
//! interpolating between its endpoints. This is a presentation
//! approximation, not the trapezoidal profile used for the energy results.
//! When a leg's last frame is produced the destination is marked picked (if
//! it is a package stop), an arrival is reported, and the controller asks
//! for a dwell before the next leg.
//!
//! Pausing freezes the vehicle at its last reported position. Resuming is
//! not supported: `start` always replays the plan from Base.

use std::time::Duration;

use tracing::{debug, info};

use super::{
    ArrivalEvent, CancelHandle, FinishEvent, FrameEvent, FramePacer, PlaybackConfig,
    PlaybackObserver, PlaybackPhase, PlaybackState,
};
use crate::models::{Point, RoutePlan};

/// What the host should do after a [`tick`](PlaybackController::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A frame was produced; wait for the next frame boundary.
    Frame,
    /// A leg was completed; hold for the given time.
    Dwell(Duration),
    /// The session is paused; nothing more will be produced.
    Paused,
    /// The route is complete.
    Finished,
    /// No session is active.
    Idle,
}

impl Step {
    /// Returns `true` if more ticks would produce output.
    pub fn is_active(&self) -> bool {
        matches!(self, Step::Frame | Step::Dwell(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    from: Point,
    frame: u32,
    frames: u32,
    dwelling: bool,
}

/// Replays a [`RoutePlan`] as a time-stepped animation.
///
/// At most one session exists per controller. Starting while a session is
/// running cancels it first.
///
/// # Examples
///
/// ```
/// use agv_routing::models::{Stop, VehicleParams};
/// use agv_routing::optimize::optimize;
/// use agv_routing::playback::{PlaybackController, PlaybackEvent, PlaybackPhase, VirtualClock};
///
/// let stops = vec![Stop::new("A", 3.0, 0.0), Stop::new("B", 0.0, 4.0)];
/// let plan = optimize(&stops, &VehicleParams::default()).unwrap();
///
/// let mut controller = PlaybackController::default();
/// controller.start(&plan);
/// let mut clock = VirtualClock::new(controller.config().frame_interval());
/// let mut events: Vec<PlaybackEvent> = Vec::new();
///
/// assert_eq!(controller.run(&mut clock, &mut events), PlaybackPhase::Finished);
/// assert_eq!(controller.state().progress_percent(), 100);
/// assert_eq!(controller.state().picked_stops().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PlaybackController {
    config: PlaybackConfig,
    plan: Option<RoutePlan>,
    state: PlaybackState,
    cursor: Cursor,
    cancel: CancelHandle,
    session: u64,
}

impl PlaybackController {
    /// Creates an idle controller.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Playback timing.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Current session state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase
    }

    /// Plan being played, if any.
    pub fn plan(&self) -> Option<&RoutePlan> {
        self.plan.as_ref()
    }

    /// Number of sessions started so far.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Handle that pauses the current session from an observer or another
    /// thread. Honored at the next tick.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Starts playing `plan` from Base.
    ///
    /// A running session is cancelled and fully halted before the new one is
    /// initialized.
    pub fn start(&mut self, plan: &RoutePlan) {
        if self.state.phase == PlaybackPhase::Running {
            self.cancel.cancel();
            self.halt();
            info!(session = self.session, "cancelled running session before restart");
        }

        self.session += 1;
        self.cancel = CancelHandle::new();
        self.plan = Some(plan.clone());
        self.state = PlaybackState {
            phase: PlaybackPhase::Running,
            ..PlaybackState::default()
        };
        self.begin_leg(0);
        info!(
            session = self.session,
            legs = plan.legs().len(),
            route = %plan.route_label(),
            "playback started"
        );
    }

    /// Pauses a running session, keeping the reached position and picks.
    /// No-op unless running.
    pub fn pause(&mut self) {
        if self.state.phase == PlaybackPhase::Running {
            self.cancel.cancel();
            self.halt();
        }
    }

    /// Cancels any session and discards its progress.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.reset();
    }

    /// Returns to `Idle` with all session state cleared. Valid from any phase.
    pub fn reset(&mut self) {
        if self.state.phase != PlaybackPhase::Idle {
            debug!(session = self.session, "playback reset");
        }
        self.cancel.cancel();
        self.cancel = CancelHandle::new();
        self.plan = None;
        self.state = PlaybackState::default();
        self.cursor = Cursor::default();
    }

    /// Advances the session by one scheduling unit.
    ///
    /// Checks cancellation first; then either finishes a pending dwell and
    /// moves to the next leg, or produces the next frame of the current leg.
    pub fn tick<O: PlaybackObserver + ?Sized>(&mut self, observer: &mut O) -> Step {
        match self.state.phase {
            PlaybackPhase::Idle => return Step::Idle,
            PlaybackPhase::Paused => return Step::Paused,
            PlaybackPhase::Finished => return Step::Finished,
            PlaybackPhase::Running => {}
        }

        if self.cancel.is_cancelled() {
            self.halt();
            return Step::Paused;
        }

        if self.cursor.dwelling {
            self.begin_leg(self.state.current_leg + 1);
        }

        let leg_index = self.state.current_leg;
        let Some(plan) = self.plan.as_ref() else {
            return self.finish(observer);
        };
        let leg_count = plan.legs().len();
        let Some(leg) = plan.legs().get(leg_index) else {
            return self.finish(observer);
        };

        self.cursor.frame += 1;
        let t = f64::from(self.cursor.frame) / f64::from(self.cursor.frames);
        let arrived = self.cursor.frame >= self.cursor.frames;
        let position = if arrived {
            leg.destination
        } else {
            self.cursor.from.lerp(&leg.destination, t)
        };

        self.state.position = position;
        self.state.leg_progress = t.min(1.0);
        self.state.progress_percent = progress_percent(leg_index, t, leg_count);
        observer.on_frame(&FrameEvent {
            x: position.x,
            y: position.y,
            leg_index,
            leg_from: leg.from.clone(),
            leg_to: leg.to.clone(),
            progress_percent: self.state.progress_percent,
        });

        if !arrived {
            return Step::Frame;
        }

        if !leg.returns_to_base() {
            self.state.picked.insert(leg.to.clone());
        }
        debug!(session = self.session, leg = leg_index, stop = %leg.to, "arrived");
        observer.on_arrival(&ArrivalEvent {
            stop_name: leg.to.clone(),
            leg_index,
        });
        self.cursor.dwelling = true;
        Step::Dwell(self.config.dwell())
    }

    /// Ticks until the session stops producing output, waiting on `pacer`
    /// between ticks. Returns the phase the session ended in.
    pub fn run<P, O>(&mut self, pacer: &mut P, observer: &mut O) -> PlaybackPhase
    where
        P: FramePacer + ?Sized,
        O: PlaybackObserver + ?Sized,
    {
        loop {
            match self.tick(observer) {
                Step::Frame => pacer.wait_frame(),
                Step::Dwell(d) => pacer.dwell(d),
                Step::Paused | Step::Finished | Step::Idle => return self.state.phase,
            }
        }
    }

    fn begin_leg(&mut self, index: usize) {
        let frames = self
            .plan
            .as_ref()
            .and_then(|p| p.legs().get(index))
            .map_or(1, |leg| self.config.frames_for(leg.duration));
        self.state.current_leg = index;
        self.state.leg_progress = 0.0;
        self.cursor = Cursor {
            from: self.state.position,
            frame: 0,
            frames,
            dwelling: false,
        };
    }

    fn halt(&mut self) {
        self.state.phase = PlaybackPhase::Paused;
        info!(
            session = self.session,
            leg = self.state.current_leg,
            progress = self.state.progress_percent,
            "playback paused"
        );
    }

    fn finish<O: PlaybackObserver + ?Sized>(&mut self, observer: &mut O) -> Step {
        self.state.phase = PlaybackPhase::Finished;
        self.state.progress_percent = 100;
        self.state.leg_progress = 1.0;
        self.cursor.dwelling = false;
        observer.on_finish(&FinishEvent {
            position: self.state.position,
            progress_percent: 100,
        });
        info!(session = self.session, "playback finished");
        Step::Finished
    }
}

fn progress_percent(leg_index: usize, t: f64, leg_count: usize) -> u8 {
    if leg_count == 0 {
        return 100;
    }
    let pct = ((leg_index as f64 + t) / leg_count as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
