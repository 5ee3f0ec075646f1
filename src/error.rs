//! Error types for route optimization.

use thiserror::Error;

/// Errors reported before any optimization work begins.
///
/// Once parameters and stops pass validation, cost evaluation and the
/// permutation search are total functions and cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgvError {
    /// A physical quantity is non-finite, zero, or negative (or an efficiency
    /// lies outside `(0, 1]`).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name as it appears in [`VehicleParams`](crate::models::VehicleParams).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Two stops share the same name.
    #[error("duplicate stop name: {0}")]
    DuplicateStop(String),

    /// A stop uses the name reserved for the base point.
    #[error("stop name `{0}` is reserved for the base point")]
    ReservedStopName(String),

    /// A stop coordinate is NaN or infinite.
    #[error("non-finite coordinate for stop `{name}`")]
    NonFiniteCoordinate {
        /// Stop name.
        name: String,
    },

    /// A deserialized route plan whose legs do not follow its ordering.
    #[error("inconsistent route plan: {0}")]
    InconsistentPlan(String),
}

impl AgvError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AgvError>;
