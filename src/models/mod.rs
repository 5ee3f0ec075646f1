//! Domain model types for AGV pickup routing.
//!
//! Provides vehicle parameters, package stops and the implicit base point,
//! legs with their energy breakdown, and the route plan that ties them
//! together.

mod leg;
mod params;
mod plan;
mod stop;

pub use leg::{Leg, LegEnergy};
pub use params::VehicleParams;
pub use plan::{RoutePlan, RouteSummary};
pub use stop::{validate_stops, Point, Stop, BASE_NAME};
