//! Minimum-energy route search.
//!
//! - [`Permutations`] — Lexicographic ordering generator, n! items
//! - [`optimize`] — Exhaustive search returning the optimal [`RoutePlan`](crate::models::RoutePlan)
//! - [`rank_orderings`] — Every ordering priced and sorted, for reporting and checks

mod optimizer;
mod permutations;

pub use optimizer::{optimize, optimize_unchecked, rank_orderings, RankedOrdering, SCALABILITY_LIMIT};
pub use permutations::{next_permutation, Permutations};
