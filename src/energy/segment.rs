//! Per-leg energy cost model.
//!
//! Traction energy integrates force over distance and is divided by the
//! drive train efficiency; standby energy is the standby draw over the
//! travel time. All outputs are in kWh (`J / 3.6e6`).
//!
//! ```text
//! e_accel   = traction_accel · d_accel  / η / 3.6e6
//! e_cruise  = traction_const · d_cruise / η / 3.6e6
//! e_brake   = traction_const · d_brake  / η / 3.6e6
//! e_standby = P_standby · t_total / 3.6e6
//! e_elev    = (P_elev + P_standby) · t_elev / 3.6e6
//! ```

use crate::kinematics::KinematicProfile;
use crate::models::{LegEnergy, VehicleParams};

/// Joules in one kilowatt-hour.
pub const JOULES_PER_KWH: f64 = 3.6e6;

/// Kinematic profile and energy breakdown for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCost {
    /// Timing and forces.
    pub profile: KinematicProfile,
    /// Energy split by cause.
    pub energy: LegEnergy,
}

/// Converts leg distance and vehicle mass into energy.
///
/// Stateless apart from the borrowed parameters; safe to share across
/// threads.
///
/// # Examples
///
/// ```
/// use agv_routing::energy::SegmentCostModel;
/// use agv_routing::models::VehicleParams;
///
/// let params = VehicleParams::default();
/// let model = SegmentCostModel::new(&params);
///
/// let to_package = model.leg_energy(5.0, 20.0, true);
/// let to_base = model.leg_energy(5.0, 20.0, false);
/// assert!((to_package.total() - to_base.total() - model.elevator_energy()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SegmentCostModel<'a> {
    params: &'a VehicleParams,
}

impl<'a> SegmentCostModel<'a> {
    /// Creates a cost model over the given parameters.
    pub fn new(params: &'a VehicleParams) -> Self {
        Self { params }
    }

    /// Parameters this model evaluates against.
    pub fn params(&self) -> &VehicleParams {
        self.params
    }

    /// Travel cost of a leg, without any elevator charge.
    pub fn cost(&self, distance: f64, mass: f64) -> SegmentCost {
        let p = self.params;
        let profile = KinematicProfile::compute(distance, mass, p);
        let forces = &profile.forces;
        let eta = p.propulsion_efficiency;

        let energy = LegEnergy {
            accel: forces.traction_accel * profile.accel_distance / eta / JOULES_PER_KWH,
            cruise: forces.traction_const * profile.cruise_distance / eta / JOULES_PER_KWH,
            brake: forces.traction_const * profile.brake_distance / eta / JOULES_PER_KWH,
            standby: p.standby_power * profile.total_time / JOULES_PER_KWH,
            elevator: 0.0,
        };
        SegmentCost { profile, energy }
    }

    /// Energy of one elevator transfer (motor plus standby draw over the
    /// transfer time). Independent of distance and mass.
    pub fn elevator_energy(&self) -> f64 {
        let p = self.params;
        (p.elevator_power * p.elevator_time + p.standby_power * p.elevator_time) / JOULES_PER_KWH
    }

    /// Full leg cost including the elevator transfer when the destination is
    /// a package stop.
    pub fn leg_cost(&self, distance: f64, mass: f64, to_package: bool) -> SegmentCost {
        let mut cost = self.cost(distance, mass);
        if to_package {
            cost.energy.elevator = self.elevator_energy();
        }
        cost
    }

    /// Energy breakdown of [`leg_cost`](Self::leg_cost).
    pub fn leg_energy(&self, distance: f64, mass: f64, to_package: bool) -> LegEnergy {
        self.leg_cost(distance, mass, to_package).energy
    }
}
