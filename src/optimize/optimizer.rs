//! Exhaustive minimum-energy route search.
//!
//! # Algorithm
//!
//! Every ordering of the stops is generated lexicographically and priced by
//! walking Base → stops → Base with growing mass. The first ordering with
//! the strictly lowest total energy wins, so ties resolve to the
//! lexicographically smallest ordering of input indices.
//!
//! # Complexity
//!
//! O(n! · n). Exhaustive search is intentional: optimality is the goal and
//! stop counts are small. Beyond [`SCALABILITY_LIMIT`] stops the search is
//! still run but a warning is logged.

use tracing::{debug, info, trace, warn};

use super::Permutations;
use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::models::{validate_stops, RoutePlan, Stop, VehicleParams};

/// Stop count above which the factorial search is flagged as slow.
pub const SCALABILITY_LIMIT: usize = 10;

/// One priced ordering, as produced by [`rank_orderings`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOrdering {
    /// Indices into the input stops, in visiting order.
    pub order: Vec<usize>,
    /// Total route energy in kWh.
    pub total_energy: f64,
}

/// Finds the minimum-energy pickup ordering.
///
/// Validates parameters and stops first; nothing is searched on error.
/// An empty stop set yields a single zero-energy Base → Base leg.
///
/// # Examples
///
/// ```
/// use agv_routing::models::{Stop, VehicleParams};
/// use agv_routing::optimize::optimize;
///
/// let stops = vec![
///     Stop::new("A", 3.0, 0.0),
///     Stop::new("B", 0.0, 4.0),
///     Stop::new("C", -3.0, -2.0),
/// ];
/// let plan = optimize(&stops, &VehicleParams::default()).unwrap();
/// assert_eq!(plan.legs().len(), 4);
/// assert!(plan.total_energy() > 0.0);
/// ```
pub fn optimize(stops: &[Stop], params: &VehicleParams) -> crate::Result<RoutePlan> {
    params.validate()?;
    validate_stops(stops)?;
    Ok(optimize_unchecked(stops, params))
}

/// [`optimize`] without validation. The caller guarantees valid input.
pub fn optimize_unchecked(stops: &[Stop], params: &VehicleParams) -> RoutePlan {
    let n = stops.len();
    if n > SCALABILITY_LIMIT {
        warn!(
            stops = n,
            limit = SCALABILITY_LIMIT,
            "exhaustive route search over many stops; runtime grows factorially"
        );
    }
    debug!(stops = n, orderings = %Permutations::count_for(n), "searching orderings");

    let distances = DistanceMatrix::from_stops(stops);
    let evaluator = RouteEvaluator::new(stops, &distances, params);

    let mut best: Option<(Vec<usize>, f64)> = None;
    for order in Permutations::new(n) {
        let energy = evaluator.total_energy(&order);
        if best.as_ref().is_none_or(|(_, e)| energy < *e) {
            trace!(?order, energy, "new best ordering");
            best = Some((order, energy));
        }
    }

    // Permutations always yields at least one ordering.
    let order = best.map(|(o, _)| o).unwrap_or_default();
    let plan = evaluator.build_plan(&order);
    info!(
        route = %plan.route_label(),
        total_kwh = plan.total_energy(),
        "selected minimum-energy route"
    );
    plan
}

/// Prices every ordering and returns them sorted by energy, ascending.
///
/// The sort is stable, so equal energies keep lexicographic order and the
/// first entry is the ordering [`optimize`] selects.
pub fn rank_orderings(stops: &[Stop], params: &VehicleParams) -> crate::Result<Vec<RankedOrdering>> {
    params.validate()?;
    validate_stops(stops)?;

    let distances = DistanceMatrix::from_stops(stops);
    let evaluator = RouteEvaluator::new(stops, &distances, params);
    let mut ranked: Vec<RankedOrdering> = Permutations::new(stops.len())
        .map(|order| {
            let total_energy = evaluator.total_energy(&order);
            RankedOrdering {
                order,
                total_energy,
            }
        })
        .collect();
    ranked.sort_by(|a, b| a.total_energy.total_cmp(&b.total_energy));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgvError;
    use crate::models::BASE_NAME;
    use proptest::prelude::*;

    fn reference_stops() -> Vec<Stop> {
        vec![
            Stop::new("A", 3.0, 0.0),
            Stop::new("B", 0.0, 4.0),
            Stop::new("C", -3.0, -2.0),
        ]
    }

    #[test]
    fn test_reference_scenario() {
        let plan = optimize(&reference_stops(), &VehicleParams::default()).expect("valid");
        assert_eq!(plan.legs().len(), 4);
        assert!(plan.total_energy() > 0.0);
        assert_eq!(plan.legs()[0].from, BASE_NAME);
        assert_eq!(plan.legs()[3].to, BASE_NAME);
        let mut names: Vec<&str> = plan.ordering().iter().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_deterministic() {
        let p = VehicleParams::default();
        let a = optimize(&reference_stops(), &p).expect("valid");
        let b = optimize(&reference_stops(), &p).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_stops() {
        let plan = optimize(&[], &VehicleParams::default()).expect("valid");
        assert!(plan.ordering().is_empty());
        assert_eq!(plan.legs().len(), 1);
        assert_eq!(plan.total_energy(), 0.0);
        assert_eq!(plan.route_label(), "Base → Base");
    }

    #[test]
    fn test_tie_keeps_first_ordering() {
        // Mirror-symmetric stops: both orderings cost exactly the same.
        let stops = vec![Stop::new("A", 1.0, 0.0), Stop::new("B", -1.0, 0.0)];
        let p = VehicleParams::default();
        let ranked = rank_orderings(&stops, &p).expect("valid");
        assert_eq!(ranked[0].total_energy, ranked[1].total_energy);
        let plan = optimize(&stops, &p).expect("valid");
        assert_eq!(plan.ordering(), ["A", "B"]);
    }

    #[test]
    fn test_optimize_agrees_with_ranking() {
        let stops = vec![Stop::new("near", 1.0, 0.0), Stop::new("far", 30.0, 0.0)];
        let p = VehicleParams {
            mass_package: 50.0,
            ..VehicleParams::default()
        };
        let ranked = rank_orderings(&stops, &p).expect("valid");
        let plan = optimize(&stops, &p).expect("valid");
        let best: Vec<String> = ranked[0]
            .order
            .iter()
            .map(|&i| stops[i].name().to_string())
            .collect();
        assert_eq!(plan.ordering(), best.as_slice());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let p = VehicleParams {
            max_velocity: 0.0,
            ..VehicleParams::default()
        };
        assert_eq!(
            optimize(&reference_stops(), &p),
            Err(AgvError::invalid("max_velocity", 0.0))
        );
    }

    #[test]
    fn test_duplicate_stop_rejected() {
        let stops = vec![Stop::new("A", 1.0, 0.0), Stop::new("A", 2.0, 0.0)];
        assert!(matches!(
            optimize(&stops, &VehicleParams::default()),
            Err(AgvError::DuplicateStop(_))
        ));
    }

    #[test]
    fn test_rank_covers_all_orderings() {
        let ranked = rank_orderings(&reference_stops(), &VehicleParams::default()).expect("valid");
        assert_eq!(ranked.len(), 6);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].total_energy <= w[1].total_energy));
    }

    fn stops_strategy(max: usize) -> impl Strategy<Value = Vec<Stop>> {
        prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 0..=max).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| Stop::new(format!("S{i}"), x, y))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_optimum_beats_every_ordering(stops in stops_strategy(4)) {
            let p = VehicleParams::default();
            let plan = optimize(&stops, &p).expect("valid");
            let dm = DistanceMatrix::from_stops(&stops);
            let eval = RouteEvaluator::new(&stops, &dm, &p);
            for order in Permutations::new(stops.len()) {
                prop_assert!(plan.total_energy() <= eval.total_energy(&order));
            }
        }

        #[test]
        fn prop_plan_is_permutation_bookended_by_base(stops in stops_strategy(4)) {
            let plan = optimize(&stops, &VehicleParams::default()).expect("valid");
            let mut got: Vec<String> = plan.ordering().to_vec();
            let mut want: Vec<String> = stops.iter().map(|s| s.name().to_string()).collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
            prop_assert_eq!(plan.legs().len(), stops.len() + 1);
            prop_assert_eq!(plan.legs()[0].from.as_str(), BASE_NAME);
            prop_assert_eq!(plan.legs()[stops.len()].to.as_str(), BASE_NAME);
        }

        #[test]
        fn prop_total_is_sum_of_legs(stops in stops_strategy(4)) {
            let plan = optimize(&stops, &VehicleParams::default()).expect("valid");
            let sum: f64 = plan.legs().iter().map(|l| l.energy.total()).sum();
            prop_assert!((plan.total_energy() - sum).abs() < 1e-15);
        }

        #[test]
        fn prop_mass_follows_pickup_count(stops in stops_strategy(4)) {
            let p = VehicleParams::default();
            let plan = optimize(&stops, &p).expect("valid");
            for (k, leg) in plan.legs().iter().enumerate() {
                prop_assert_eq!(leg.mass, p.mass_robot + k as f64 * p.mass_package);
            }
        }
    }
}
