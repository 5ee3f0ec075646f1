//! Trapezoidal velocity profile.
//!
//! # Algorithm
//!
//! The vehicle accelerates at `a` up to `v`, cruises, and brakes at `a` to
//! rest. Ramp distance is `d_r = v² / 2a` on each side.
//!
//! ```text
//! d <= 2·d_r:  t_accel = t_brake = sqrt(a·d) / a,   t_cruise = 0
//! d >  2·d_r:  t_accel = t_brake = v / a,           t_cruise = (d - 2·d_r) / v
//! ```
//!
//! Both branches agree at `d = 2·d_r`, so total time is continuous in `d`.
//!
//! The reported accel/brake distances are the force-application distances
//! used for energy: always `d_r`, even when the leg is too short to reach
//! cruise velocity.

use super::TractionForces;
use crate::models::VehicleParams;

/// Time and distance split of one leg, plus the forces acting on the vehicle.
///
/// # Examples
///
/// ```
/// use agv_routing::kinematics::KinematicProfile;
/// use agv_routing::models::VehicleParams;
///
/// let params = VehicleParams::default(); // v = 1.5 m/s, a = 0.5 m/s²
/// let p = KinematicProfile::compute(10.0, 20.0, &params);
/// assert!((p.accel_time - 3.0).abs() < 1e-12);
/// assert!((p.cruise_distance - 5.5).abs() < 1e-12);
/// assert!(p.reaches_cruise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicProfile {
    /// Time spent accelerating (s).
    pub accel_time: f64,
    /// Time spent at cruise velocity (s).
    pub cruise_time: f64,
    /// Time spent braking (s).
    pub brake_time: f64,
    /// Sum of the three phases (s).
    pub total_time: f64,
    /// Distance over which the acceleration force applies (m).
    pub accel_distance: f64,
    /// Distance covered at cruise velocity (m).
    pub cruise_distance: f64,
    /// Distance over which the braking force applies (m).
    pub brake_distance: f64,
    /// Highest velocity reached on the leg (m/s).
    pub peak_velocity: f64,
    /// Forces for the vehicle mass on this leg.
    pub forces: TractionForces,
}

impl KinematicProfile {
    /// Computes the profile for a leg of `distance` meters at vehicle `mass`.
    ///
    /// A zero-length leg yields all-zero times and distances.
    pub fn compute(distance: f64, mass: f64, params: &VehicleParams) -> Self {
        let forces = TractionForces::new(mass, params);
        if distance <= 0.0 {
            return Self {
                accel_time: 0.0,
                cruise_time: 0.0,
                brake_time: 0.0,
                total_time: 0.0,
                accel_distance: 0.0,
                cruise_distance: 0.0,
                brake_distance: 0.0,
                peak_velocity: 0.0,
                forces,
            };
        }

        let a = params.max_acceleration;
        let v = params.max_velocity;
        let ramp = params.ramp_distance();

        let (ramp_time, cruise_time, cruise_distance, peak_velocity) = if distance <= 2.0 * ramp {
            let reached = (a * distance).sqrt();
            (reached / a, 0.0, 0.0, reached)
        } else {
            let cruise_distance = distance - 2.0 * ramp;
            (v / a, cruise_distance / v, cruise_distance, v)
        };

        Self {
            accel_time: ramp_time,
            cruise_time,
            brake_time: ramp_time,
            total_time: 2.0 * ramp_time + cruise_time,
            accel_distance: ramp,
            cruise_distance,
            brake_distance: ramp,
            peak_velocity,
            forces,
        }
    }

    /// Returns `true` if the leg is long enough to reach cruise velocity.
    pub fn reaches_cruise(&self) -> bool {
        self.cruise_distance > 0.0
    }
}
