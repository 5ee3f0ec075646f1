//! Points and package stops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AgvError, Result};

/// Name of the implicit base point at the origin.
pub const BASE_NAME: &str = "Base";

/// A planar position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// The base point (origin).
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// A package pickup location.
///
/// The base point is never a `Stop`; it is implied at the origin and always
/// opens and closes a route.
///
/// # Examples
///
/// ```
/// use agv_routing::models::Stop;
///
/// let a = Stop::new("A", 3.0, 4.0);
/// assert_eq!(a.name(), "A");
/// assert!((a.distance_from_base() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    name: String,
    x: f64,
    y: f64,
}

impl Stop {
    /// Creates a stop.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Unique stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Location as a [`Point`].
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Straight-line distance from the base point.
    pub fn distance_from_base(&self) -> f64 {
        Point::ORIGIN.distance_to(&self.point())
    }
}

/// Checks that stop names are unique, not reserved, and coordinates finite.
pub fn validate_stops(stops: &[Stop]) -> Result<()> {
    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        if stop.name == BASE_NAME {
            return Err(AgvError::ReservedStopName(stop.name.clone()));
        }
        if !stop.x.is_finite() || !stop.y.is_finite() {
            return Err(AgvError::NonFiniteCoordinate {
                name: stop.name.clone(),
            });
        }
        if !seen.insert(stop.name.as_str()) {
            return Err(AgvError::DuplicateStop(stop.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, -2.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Point::new(2.0, -1.0));
    }

    #[test]
    fn test_stop_accessors() {
        let s = Stop::new("C", -3.0, -2.0);
        assert_eq!(s.name(), "C");
        assert_eq!(s.x(), -3.0);
        assert_eq!(s.y(), -2.0);
        assert_eq!(s.point(), Point::new(-3.0, -2.0));
    }

    #[test]
    fn test_validate_ok() {
        let stops = vec![Stop::new("A", 1.0, 0.0), Stop::new("B", 0.0, 1.0)];
        assert!(validate_stops(&stops).is_ok());
        assert!(validate_stops(&[]).is_ok());
    }

    #[test]
    fn test_validate_duplicate() {
        let stops = vec![Stop::new("A", 1.0, 0.0), Stop::new("A", 0.0, 1.0)];
        assert_eq!(
            validate_stops(&stops),
            Err(AgvError::DuplicateStop("A".into()))
        );
    }

    #[test]
    fn test_validate_reserved() {
        let stops = vec![Stop::new(BASE_NAME, 1.0, 0.0)];
        assert!(matches!(
            validate_stops(&stops),
            Err(AgvError::ReservedStopName(_))
        ));
    }

    #[test]
    fn test_validate_non_finite() {
        let stops = vec![Stop::new("A", f64::NAN, 0.0)];
        assert!(matches!(
            validate_stops(&stops),
            Err(AgvError::NonFiniteCoordinate { .. })
        ));
    }
}
