//! Distances between the base point and package stops.
//!
//! Location index 0 is the base point; stop `i` of the input slice is
//! location `i + 1`.

mod matrix;

pub use matrix::DistanceMatrix;
