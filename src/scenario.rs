//! Ready-made inputs: the reference three-package layout and random layouts
//! for stress runs.

use rand::Rng;

use crate::models::{Stop, VehicleParams};

/// The reference layout: packages `A(3, 0)`, `B(0, 4)`, `C(-3, -2)`.
pub fn reference_stops() -> Vec<Stop> {
    vec![
        Stop::new("A", 3.0, 0.0),
        Stop::new("B", 0.0, 4.0),
        Stop::new("C", -3.0, -2.0),
    ]
}

/// Reference parameters and stops.
///
/// # Examples
///
/// ```
/// use agv_routing::optimize::optimize;
/// use agv_routing::scenario;
///
/// let (params, stops) = scenario::reference();
/// let plan = optimize(&stops, &params).unwrap();
/// assert_eq!(plan.legs().len(), 4);
/// ```
pub fn reference() -> (VehicleParams, Vec<Stop>) {
    (VehicleParams::default(), reference_stops())
}

/// Generates `n` stops named `P1..Pn` uniformly inside the square
/// `[-half_extent, half_extent]²`.
pub fn random_stops<R: Rng + ?Sized>(n: usize, half_extent: f64, rng: &mut R) -> Vec<Stop> {
    let e = half_extent.abs();
    (1..=n)
        .map(|i| {
            let (x, y) = if e > 0.0 {
                (rng.random_range(-e..=e), rng.random_range(-e..=e))
            } else {
                (0.0, 0.0)
            };
            Stop::new(format!("P{i}"), x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_stops;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_is_valid() {
        let (params, stops) = reference();
        assert!(params.validate().is_ok());
        assert!(validate_stops(&stops).is_ok());
        assert_eq!(stops.len(), 3);
    }

    #[test]
    fn test_random_stops_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let stops = random_stops(50, 10.0, &mut rng);
        assert_eq!(stops.len(), 50);
        assert!(validate_stops(&stops).is_ok());
        for s in &stops {
            assert!(s.x().abs() <= 10.0);
            assert!(s.y().abs() <= 10.0);
        }
    }

    #[test]
    fn test_random_stops_seeded() {
        let a = random_stops(5, 20.0, &mut StdRng::seed_from_u64(7));
        let b = random_stops(5, 20.0, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_extent() {
        let stops = random_stops(2, 0.0, &mut StdRng::seed_from_u64(1));
        assert!(stops.iter().all(|s| s.x() == 0.0 && s.y() == 0.0));
    }
}
