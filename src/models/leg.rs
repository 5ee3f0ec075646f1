//! Leg and per-leg energy types.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::{Point, BASE_NAME};

/// Energy spent on one leg, split by cause. All values in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegEnergy {
    /// Traction while accelerating.
    pub accel: f64,
    /// Traction against friction while cruising.
    pub cruise: f64,
    /// Traction against friction while braking.
    pub brake: f64,
    /// Standby draw over the travel time.
    pub standby: f64,
    /// Elevator transfer at the destination (zero when returning to base).
    pub elevator: f64,
}

impl LegEnergy {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.accel + self.cruise + self.brake + self.standby + self.elevator
    }
}

impl Add for LegEnergy {
    type Output = LegEnergy;

    fn add(self, rhs: LegEnergy) -> LegEnergy {
        LegEnergy {
            accel: self.accel + rhs.accel,
            cruise: self.cruise + rhs.cruise,
            brake: self.brake + rhs.brake,
            standby: self.standby + rhs.standby,
            elevator: self.elevator + rhs.elevator,
        }
    }
}

impl AddAssign for LegEnergy {
    fn add_assign(&mut self, rhs: LegEnergy) {
        *self = *self + rhs;
    }
}

/// One point-to-point traversal within a route.
///
/// Legs are produced by [`RouteEvaluator`](crate::evaluation::RouteEvaluator)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Origin stop name ([`BASE_NAME`] for the first leg).
    pub from: String,
    /// Destination stop name ([`BASE_NAME`] for the return leg).
    pub to: String,
    /// Destination coordinates.
    pub destination: Point,
    /// Straight-line length in meters.
    pub distance: f64,
    /// Travel time in seconds (elevator time excluded).
    pub duration: f64,
    /// Vehicle mass used for this leg's cost.
    pub mass: f64,
    /// Energy breakdown.
    pub energy: LegEnergy,
}

impl Leg {
    /// Total energy of this leg in kWh.
    pub fn total_energy(&self) -> f64 {
        self.energy.total()
    }

    /// Returns `true` if this leg ends at the base point.
    pub fn returns_to_base(&self) -> bool {
        self.to == BASE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_energy() -> LegEnergy {
        LegEnergy {
            accel: 1.0,
            cruise: 2.0,
            brake: 3.0,
            standby: 4.0,
            elevator: 5.0,
        }
    }

    #[test]
    fn test_energy_total() {
        assert!((sample_energy().total() - 15.0).abs() < 1e-12);
        assert_eq!(LegEnergy::default().total(), 0.0);
    }

    #[test]
    fn test_energy_add() {
        let mut e = sample_energy();
        e += sample_energy();
        assert_eq!(e.accel, 2.0);
        assert_eq!(e.elevator, 10.0);
        assert!((e.total() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_leg_returns_to_base() {
        let leg = Leg {
            from: "A".into(),
            to: BASE_NAME.into(),
            destination: Point::ORIGIN,
            distance: 1.0,
            duration: 2.0,
            mass: 22.0,
            energy: sample_energy(),
        };
        assert!(leg.returns_to_base());
        assert!((leg.total_energy() - 15.0).abs() < 1e-12);
    }
}
