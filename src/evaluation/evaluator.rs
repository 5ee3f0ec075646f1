//! Route evaluator that walks one stop ordering and prices every leg.

use crate::distance::DistanceMatrix;
use crate::energy::SegmentCostModel;
use crate::models::{Leg, Point, RoutePlan, Stop, VehicleParams, BASE_NAME};

/// Evaluates stop orderings by walking Base → stops → Base, adding one
/// package mass after each pickup.
///
/// Orderings are slices of indices into `stops`.
///
/// # Examples
///
/// ```
/// use agv_routing::models::{Stop, VehicleParams};
/// use agv_routing::distance::DistanceMatrix;
/// use agv_routing::evaluation::RouteEvaluator;
///
/// let stops = vec![Stop::new("A", 3.0, 4.0), Stop::new("B", 6.0, 8.0)];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let params = VehicleParams::default();
///
/// let evaluator = RouteEvaluator::new(&stops, &dm, &params);
/// let plan = evaluator.build_plan(&[1, 0]);
/// assert_eq!(plan.ordering(), ["B", "A"]);
/// assert_eq!(plan.legs().len(), 3);
/// assert!((plan.total_energy() - evaluator.total_energy(&[1, 0])).abs() < 1e-15);
/// ```
pub struct RouteEvaluator<'a> {
    stops: &'a [Stop],
    distances: &'a DistanceMatrix,
    params: &'a VehicleParams,
    model: SegmentCostModel<'a>,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator. `distances` must come from
    /// [`DistanceMatrix::from_stops`] over the same `stops`.
    pub fn new(
        stops: &'a [Stop],
        distances: &'a DistanceMatrix,
        params: &'a VehicleParams,
    ) -> Self {
        Self {
            stops,
            distances,
            params,
            model: SegmentCostModel::new(params),
        }
    }

    /// Total energy of an ordering without materializing legs.
    ///
    /// Sums legs in the same order as [`build_plan`](Self::build_plan), so
    /// both agree bit for bit.
    pub fn total_energy(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut prev = 0;
        for (picked, &idx) in order.iter().enumerate() {
            let loc = idx + 1;
            let d = self.distances.get(prev, loc);
            total += self
                .model
                .leg_energy(d, self.params.mass_with(picked), true)
                .total();
            prev = loc;
        }
        let d = self.distances.get(prev, 0);
        total += self
            .model
            .leg_energy(d, self.params.mass_with(order.len()), false)
            .total();
        total
    }

    /// Builds the full plan for an ordering, return leg included.
    pub fn build_plan(&self, order: &[usize]) -> RoutePlan {
        let mut legs = Vec::with_capacity(order.len() + 1);
        let mut prev = None;

        for (picked, &idx) in order.iter().enumerate() {
            legs.push(self.leg(prev, Some(idx), picked));
            prev = Some(idx);
        }
        legs.push(self.leg(prev, None, order.len()));

        let ordering = order
            .iter()
            .map(|&i| self.stops[i].name().to_string())
            .collect();
        RoutePlan::new(ordering, legs)
    }

    /// Prices one leg between stop indices; `None` is the base point.
    fn leg(&self, from: Option<usize>, to: Option<usize>, picked: usize) -> Leg {
        let location = |stop: Option<usize>| stop.map_or(0, |i| i + 1);
        let name = |stop: Option<usize>| stop.map_or(BASE_NAME, |i| self.stops[i].name());

        let distance = self.distances.get(location(from), location(to));
        let mass = self.params.mass_with(picked);
        let cost = self.model.leg_cost(distance, mass, to.is_some());
        Leg {
            from: name(from).to_string(),
            to: name(to).to_string(),
            destination: to.map_or(Point::ORIGIN, |i| self.stops[i].point()),
            distance,
            duration: cost.profile.total_time,
            mass,
            energy: cost.energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Vec<Stop>, DistanceMatrix, VehicleParams) {
        let stops = vec![
            Stop::new("A", 3.0, 0.0),
            Stop::new("B", 0.0, 4.0),
            Stop::new("C", -3.0, -2.0),
        ];
        let dm = DistanceMatrix::from_stops(&stops);
        (stops, dm, VehicleParams::default())
    }

    #[test]
    fn test_build_plan_empty() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        let plan = eval.build_plan(&[]);
        assert!(plan.ordering().is_empty());
        assert_eq!(plan.legs().len(), 1);
        let leg = &plan.legs()[0];
        assert_eq!(leg.from, BASE_NAME);
        assert_eq!(leg.to, BASE_NAME);
        assert_eq!(leg.distance, 0.0);
        assert_eq!(plan.total_energy(), 0.0);
    }

    #[test]
    fn test_leg_names_and_destinations() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        let plan = eval.build_plan(&[2, 0, 1]);
        let names: Vec<(&str, &str)> = plan
            .legs()
            .iter()
            .map(|l| (l.from.as_str(), l.to.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("Base", "C"), ("C", "A"), ("A", "B"), ("B", "Base")]
        );
        assert_eq!(plan.legs()[0].destination, Point::new(-3.0, -2.0));
        assert_eq!(plan.legs()[3].destination, Point::ORIGIN);
        assert!((plan.legs()[2].distance - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_mass_accumulates_in_pickup_order() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        let plan = eval.build_plan(&[1, 2, 0]);
        let masses: Vec<f64> = plan.legs().iter().map(|l| l.mass).collect();
        assert_eq!(masses, vec![20.0, 22.0, 24.0, 26.0]);
    }

    #[test]
    fn test_elevator_only_on_package_legs() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        let plan = eval.build_plan(&[0, 1, 2]);
        let elevator = SegmentCostModel::new(&params).elevator_energy();
        for leg in &plan.legs()[..3] {
            assert_eq!(leg.energy.elevator, elevator);
        }
        assert_eq!(plan.legs()[3].energy.elevator, 0.0);
    }

    #[test]
    fn test_total_energy_matches_plan() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        for order in [[0, 1, 2], [2, 1, 0], [1, 0, 2]] {
            let plan = eval.build_plan(&order);
            assert_eq!(plan.total_energy(), eval.total_energy(&order));
        }
    }

    #[test]
    fn test_duration_matches_profile() {
        let (stops, dm, params) = setup();
        let eval = RouteEvaluator::new(&stops, &dm, &params);
        let plan = eval.build_plan(&[0]);
        // Base → A is 3 m: short leg, t = 2 · sqrt(3 / 0.5)
        let expected = 2.0 * (3.0f64 / 0.5).sqrt();
        assert!((plan.legs()[0].duration - expected).abs() < 1e-10);
    }
}
