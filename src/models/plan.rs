//! Route plan and its summary.

use serde::{Deserialize, Serialize};

use super::{Leg, LegEnergy, Point, VehicleParams, BASE_NAME};
use crate::error::AgvError;

/// The chosen stop ordering with its full per-leg breakdown.
///
/// A plan always starts and ends at the base point; `ordering` lists only the
/// package stops in between. `legs` holds `ordering.len() + 1` entries.
///
/// # Examples
///
/// ```
/// use agv_routing::models::{Stop, VehicleParams};
/// use agv_routing::optimize::optimize;
///
/// let stops = vec![Stop::new("A", 3.0, 0.0), Stop::new("B", 0.0, 4.0)];
/// let plan = optimize(&stops, &VehicleParams::default()).unwrap();
/// assert_eq!(plan.legs().len(), 3);
/// assert!(plan.route_label().starts_with("Base → "));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoutePlanRepr")]
pub struct RoutePlan {
    ordering: Vec<String>,
    legs: Vec<Leg>,
    total_energy: f64,
}

impl RoutePlan {
    /// Creates a plan; the total energy is the sum of the leg totals.
    pub fn new(ordering: Vec<String>, legs: Vec<Leg>) -> Self {
        let total_energy = legs.iter().map(Leg::total_energy).sum();
        Self {
            ordering,
            legs,
            total_energy,
        }
    }

    /// Package stop names in visiting order.
    pub fn ordering(&self) -> &[String] {
        &self.ordering
    }

    /// Legs in traversal order, return leg last.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total route energy in kWh.
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Total travel distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(|l| l.distance).sum()
    }

    /// Total travel time in seconds.
    pub fn total_duration(&self) -> f64 {
        self.legs.iter().map(|l| l.duration).sum()
    }

    /// Route polyline for display: the base point followed by every leg
    /// destination.
    pub fn waypoints(&self) -> Vec<Point> {
        std::iter::once(Point::ORIGIN)
            .chain(self.legs.iter().map(|l| l.destination))
            .collect()
    }

    /// Human-readable route, e.g. `Base → A → B → C → Base`.
    pub fn route_label(&self) -> String {
        std::iter::once(BASE_NAME)
            .chain(self.ordering.iter().map(String::as_str))
            .chain(std::iter::once(BASE_NAME))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Aggregates the plan for reporting against the given parameters.
    pub fn summary(&self, params: &VehicleParams) -> RouteSummary {
        let energy = self
            .legs
            .iter()
            .fold(LegEnergy::default(), |acc, l| acc + l.energy);
        let battery_used_percent = self.total_energy / params.battery_energy * 100.0;
        RouteSummary {
            total_distance: self.total_distance(),
            total_duration: self.total_duration(),
            total_energy_kwh: self.total_energy,
            total_energy_wh: self.total_energy * 1000.0,
            energy,
            battery_used_percent,
            battery_remaining_percent: 100.0 - battery_used_percent,
        }
    }
}

/// Wire form of a [`RoutePlan`]. The serialized total is ignored and
/// recomputed from the legs.
#[derive(Deserialize)]
struct RoutePlanRepr {
    ordering: Vec<String>,
    legs: Vec<Leg>,
}

impl TryFrom<RoutePlanRepr> for RoutePlan {
    type Error = AgvError;

    fn try_from(repr: RoutePlanRepr) -> Result<Self, Self::Error> {
        let RoutePlanRepr { ordering, legs } = repr;
        if legs.len() != ordering.len() + 1 {
            return Err(AgvError::InconsistentPlan(format!(
                "{} legs for {} stops",
                legs.len(),
                ordering.len()
            )));
        }
        let visits = ordering
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(BASE_NAME));
        for (i, (leg, to)) in legs.iter().zip(visits).enumerate() {
            if leg.to != to {
                return Err(AgvError::InconsistentPlan(format!(
                    "leg {i} ends at `{}`, expected `{to}`",
                    leg.to
                )));
            }
        }
        Ok(Self::new(ordering, legs))
    }
}

/// Totals of a [`RoutePlan`] for the reporting layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Sum of leg distances (m).
    pub total_distance: f64,
    /// Sum of leg durations (s).
    pub total_duration: f64,
    /// Total energy (kWh).
    pub total_energy_kwh: f64,
    /// Total energy (Wh).
    pub total_energy_wh: f64,
    /// Per-category energy summed over all legs (kWh).
    pub energy: LegEnergy,
    /// Share of the battery consumed by the route.
    pub battery_used_percent: f64,
    /// Battery left after the route; negative when the route cannot be
    /// completed on one charge.
    pub battery_remaining_percent: f64,
}
