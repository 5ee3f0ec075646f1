//! # agv-routing
//!
//! Energy-optimal pickup routing for a warehouse AGV, and deterministic
//! playback of the chosen route.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (VehicleParams, Stop, Leg, RoutePlan)
//! - [`distance`] — Distance matrix over the base point and stops
//! - [`kinematics`] — Trapezoidal velocity profile and traction forces
//! - [`energy`] — Per-leg energy cost model
//! - [`evaluation`] — Prices one stop ordering leg by leg
//! - [`optimize`] — Exhaustive minimum-energy search (O(n!))
//! - [`playback`] — Cancellable frame-by-frame route replay
//! - [`scenario`] — Reference and random inputs
//! - [`error`] — Validation errors

pub mod distance;
pub mod energy;
pub mod error;
pub mod evaluation;
pub mod kinematics;
pub mod models;
pub mod optimize;
pub mod playback;
pub mod scenario;

pub use error::{AgvError, Result};
