//! Dense distance matrix.

use crate::models::{Point, Stop};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per optimization so the permutation search reads leg lengths
/// instead of recomputing square roots for every ordering.
///
/// # Examples
///
/// ```
/// use agv_routing::models::Stop;
/// use agv_routing::distance::DistanceMatrix;
///
/// let stops = vec![Stop::new("A", 3.0, 4.0), Stop::new("B", 6.0, 8.0)];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix over the given points.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix over the base point followed by `stops`.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let points: Vec<Point> = std::iter::once(Point::ORIGIN)
            .chain(stops.iter().map(Stop::point))
            .collect();
        Self::from_points(&points)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (base included).
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stops() -> Vec<Stop> {
        vec![Stop::new("A", 3.0, 4.0), Stop::new("B", 0.0, 8.0)]
    }

    #[test]
    fn test_from_stops() {
        let dm = DistanceMatrix::from_stops(&sample_stops());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_stops(&sample_stops());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_empty_stops_is_base_only() {
        let dm = DistanceMatrix::from_stops(&[]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }
}
