//! Kinematic model of a single leg.
//!
//! - [`KinematicProfile`] — Trapezoidal accelerate/cruise/brake timing
//! - [`TractionForces`] — Friction, traction, and required power for a mass

mod forces;
mod profile;

pub use forces::{TractionForces, GRAVITY};
pub use profile::KinematicProfile;
