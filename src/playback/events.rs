//! Events emitted during playback and the observer that receives them.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// One animation frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    /// Interpolated X-coordinate.
    pub x: f64,
    /// Interpolated Y-coordinate.
    pub y: f64,
    /// Index of the leg being played.
    pub leg_index: usize,
    /// Origin stop of the leg.
    pub leg_from: String,
    /// Destination stop of the leg.
    pub leg_to: String,
    /// Whole-route progress, `0..=100`.
    pub progress_percent: u8,
}

impl FrameEvent {
    /// Position as a [`Point`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The vehicle reached the end of a leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalEvent {
    /// Stop reached (the base name for the return leg).
    pub stop_name: String,
    /// Index of the completed leg.
    pub leg_index: usize,
}

/// Every leg was played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishEvent {
    /// Final position (the base point for a complete plan).
    pub position: Point,
    /// Always 100.
    pub progress_percent: u8,
}

/// Any playback event, for observers that record a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// See [`FrameEvent`].
    Frame(FrameEvent),
    /// See [`ArrivalEvent`].
    Arrival(ArrivalEvent),
    /// See [`FinishEvent`].
    Finish(FinishEvent),
}

/// Receives playback output. These callbacks are the only observable effect
/// of a session; the controller never touches presentation state itself.
///
/// All methods default to no-ops.
pub trait PlaybackObserver {
    /// Called once per produced frame.
    fn on_frame(&mut self, _frame: &FrameEvent) {}

    /// Called when a leg completes, after the frame that reached its end.
    fn on_arrival(&mut self, _arrival: &ArrivalEvent) {}

    /// Called once when the last leg and its dwell are done.
    fn on_finish(&mut self, _finish: &FinishEvent) {}
}

impl PlaybackObserver for () {}

impl PlaybackObserver for Vec<PlaybackEvent> {
    fn on_frame(&mut self, frame: &FrameEvent) {
        self.push(PlaybackEvent::Frame(frame.clone()));
    }

    fn on_arrival(&mut self, arrival: &ArrivalEvent) {
        self.push(PlaybackEvent::Arrival(arrival.clone()));
    }

    fn on_finish(&mut self, finish: &FinishEvent) {
        self.push(PlaybackEvent::Finish(finish.clone()));
    }
}

/// Adapts three closures into a [`PlaybackObserver`].
///
/// # Examples
///
/// ```
/// use agv_routing::playback::{ArrivalEvent, Callbacks, FinishEvent, FrameEvent, PlaybackObserver};
///
/// let mut frames = 0;
/// let mut cb = Callbacks::new(
///     |_: &FrameEvent| frames += 1,
///     |_: &ArrivalEvent| {},
///     |_: &FinishEvent| {},
/// );
/// cb.on_frame(&FrameEvent {
///     x: 0.0,
///     y: 0.0,
///     leg_index: 0,
///     leg_from: "Base".into(),
///     leg_to: "A".into(),
///     progress_percent: 0,
/// });
/// drop(cb);
/// assert_eq!(frames, 1);
/// ```
pub struct Callbacks<F, A, D> {
    on_frame: F,
    on_arrival: A,
    on_finish: D,
}

impl<F, A, D> Callbacks<F, A, D>
where
    F: FnMut(&FrameEvent),
    A: FnMut(&ArrivalEvent),
    D: FnMut(&FinishEvent),
{
    /// Creates an observer from frame, arrival, and finish callbacks.
    pub fn new(on_frame: F, on_arrival: A, on_finish: D) -> Self {
        Self {
            on_frame,
            on_arrival,
            on_finish,
        }
    }
}

impl<F, A, D> PlaybackObserver for Callbacks<F, A, D>
where
    F: FnMut(&FrameEvent),
    A: FnMut(&ArrivalEvent),
    D: FnMut(&FinishEvent),
{
    fn on_frame(&mut self, frame: &FrameEvent) {
        (self.on_frame)(frame);
    }

    fn on_arrival(&mut self, arrival: &ArrivalEvent) {
        (self.on_arrival)(arrival);
    }

    fn on_finish(&mut self, finish: &FinishEvent) {
        (self.on_finish)(finish);
    }
}
