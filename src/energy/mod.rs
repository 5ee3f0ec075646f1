//! Energy cost of legs.
//!
//! - [`SegmentCostModel`] — Converts a kinematic profile into a kWh breakdown

mod segment;

pub use segment::{SegmentCost, SegmentCostModel, JOULES_PER_KWH};
