//! Deterministic playback of a route plan.
//!
//! - [`PlaybackController`] — Cancellable, tick-driven state machine
//! - [`PlaybackObserver`] — Receives frame, arrival, and finish events
//! - [`FramePacer`] — Host pacing between ticks ([`RealtimePacer`], [`VirtualClock`])
//! - [`CancelHandle`] — Pauses a session from outside the tick loop

mod cancel;
mod config;
mod controller;
mod events;
mod pacer;
mod state;

pub use cancel::CancelHandle;
pub use config::PlaybackConfig;
pub use controller::{PlaybackController, Step};
pub use events::{
    ArrivalEvent, Callbacks, FinishEvent, FrameEvent, PlaybackEvent, PlaybackObserver,
};
pub use pacer::{FramePacer, RealtimePacer, VirtualClock};
pub use state::{PlaybackPhase, PlaybackState};
