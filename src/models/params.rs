//! Vehicle parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AgvError, Result};

/// Physical parameters of the AGV, fixed for one optimization run.
///
/// Units: masses in kg, velocity in m/s, acceleration in m/s², powers in W,
/// times in s, heights in m, battery energy in kWh. Efficiencies are
/// fractions in `(0, 1]`.
///
/// `elevator_height` and `elevator_efficiency` are carried for reporting;
/// the elevator transfer cost is a fixed power × time charge.
///
/// # Examples
///
/// ```
/// use agv_routing::models::VehicleParams;
///
/// let params = VehicleParams {
///     max_acceleration: 0.0,
///     ..VehicleParams::default()
/// };
/// assert!(params.validate().is_err());
/// assert!(VehicleParams::default().validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Empty vehicle mass.
    pub mass_robot: f64,
    /// Mass added per picked package.
    pub mass_package: f64,
    /// Cruise velocity cap.
    pub max_velocity: f64,
    /// Acceleration (and braking deceleration) magnitude.
    pub max_acceleration: f64,
    /// Rolling friction coefficient.
    pub friction_coeff: f64,
    /// Electronics draw while powered, moving or not.
    pub standby_power: f64,
    /// Elevator motor power during a transfer.
    pub elevator_power: f64,
    /// Duration of one elevator transfer.
    pub elevator_time: f64,
    /// Lift height of one transfer.
    pub elevator_height: f64,
    /// Elevator drive efficiency.
    pub elevator_efficiency: f64,
    /// Usable battery capacity in kWh.
    pub battery_energy: f64,
    /// Drive train efficiency.
    pub propulsion_efficiency: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass_robot: 20.0,
            mass_package: 2.0,
            max_velocity: 1.5,
            max_acceleration: 0.5,
            friction_coeff: 0.02,
            standby_power: 5.0,
            elevator_power: 100.0,
            elevator_time: 4.0,
            elevator_height: 1.0,
            elevator_efficiency: 0.8,
            battery_energy: 0.1,
            propulsion_efficiency: 0.85,
        }
    }
}

impl VehicleParams {
    /// Checks that every physical quantity is finite and strictly positive,
    /// and that both efficiencies lie in `(0, 1]`.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("mass_robot", self.mass_robot),
            ("mass_package", self.mass_package),
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("friction_coeff", self.friction_coeff),
            ("standby_power", self.standby_power),
            ("elevator_power", self.elevator_power),
            ("elevator_time", self.elevator_time),
            ("elevator_height", self.elevator_height),
            ("battery_energy", self.battery_energy),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(AgvError::invalid(name, value));
            }
        }

        let fractions = [
            ("elevator_efficiency", self.elevator_efficiency),
            ("propulsion_efficiency", self.propulsion_efficiency),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(AgvError::invalid(name, value));
            }
        }
        Ok(())
    }

    /// Vehicle mass after `picked` packages are on board.
    pub fn mass_with(&self, picked: usize) -> f64 {
        self.mass_robot + picked as f64 * self.mass_package
    }

    /// Distance needed to reach cruise velocity from rest (equal to the
    /// braking distance from cruise velocity).
    pub fn ramp_distance(&self) -> f64 {
        self.max_velocity * self.max_velocity / (2.0 * self.max_acceleration)
    }
}
