//! Traction forces and power.

use serde::{Deserialize, Serialize};

use crate::models::VehicleParams;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Forces (N) and power (W) needed to move a vehicle of a given mass.
///
/// # Examples
///
/// ```
/// use agv_routing::kinematics::TractionForces;
/// use agv_routing::models::VehicleParams;
///
/// let f = TractionForces::new(22.0, &VehicleParams::default());
/// // 0.02 · 22 · 9.81
/// assert!((f.friction - 4.3164).abs() < 1e-9);
/// assert_eq!(f.traction_const, f.friction);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TractionForces {
    /// Rolling friction `μ·m·g`.
    pub friction: f64,
    /// Traction while accelerating, `m·a + friction`.
    pub traction_accel: f64,
    /// Traction at constant velocity (friction only).
    pub traction_const: f64,
    /// Power at cruise velocity under acceleration traction.
    pub power_accel: f64,
    /// Power at cruise velocity under constant traction.
    pub power_cruise: f64,
}

impl TractionForces {
    /// Computes forces and power for `mass` kilograms.
    pub fn new(mass: f64, params: &VehicleParams) -> Self {
        let friction = params.friction_coeff * mass * GRAVITY;
        let traction_accel = mass * params.max_acceleration + friction;
        let traction_const = friction;
        Self {
            friction,
            traction_accel,
            traction_const,
            power_accel: traction_accel * params.max_velocity,
            power_cruise: traction_const * params.max_velocity,
        }
    }
}
