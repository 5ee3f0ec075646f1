//! Lexicographic permutation generator.
//!
//! # Algorithm
//!
//! Starts from the identity `[0, 1, .., n-1]` and repeatedly applies the
//! classic next-permutation step:
//!
//! 1. Find the largest `i` with `p[i] < p[i+1]`; stop if none exists.
//! 2. Find the largest `j > i` with `p[i] < p[j]` and swap them.
//! 3. Reverse `p[i+1..]`.
//!
//! Orderings come out in lexicographic order over the input indices, which
//! is the order in which ties are resolved by the optimizer.
//!
//! # Complexity
//!
//! `n!` items, amortized O(1) per step (O(n) per yielded clone).

/// Iterator over all orderings of `0..n` in lexicographic order.
///
/// `n = 0` yields a single empty ordering.
///
/// # Examples
///
/// ```
/// use agv_routing::optimize::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[1], vec![0, 2, 1]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
}

impl Permutations {
    /// Creates a generator over orderings of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            current: Some((0..n).collect()),
        }
    }

    /// Number of orderings of `n` items, saturating at `u128::MAX`.
    pub fn count_for(n: usize) -> u128 {
        (1..=n as u128).fold(1u128, |acc, k| acc.saturating_mul(k))
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut perm = self.current.take()?;
        let out = perm.clone();
        if next_permutation(&mut perm) {
            self.current = Some(perm);
        }
        Some(out)
    }
}

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns `false` (leaving `perm` unchanged) if it is already the last
/// ordering.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let Some(i) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };
    // A j > i with perm[j] > perm[i] exists because perm[i + 1] qualifies.
    let j = (i + 1..n).rev().find(|&j| perm[j] > perm[i]).unwrap_or(i + 1);
    perm.swap(i, j);
    perm[i + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_items() {
        let all: Vec<Vec<usize>> = Permutations::new(0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_one_item() {
        let all: Vec<Vec<usize>> = Permutations::new(1).collect();
        assert_eq!(all, vec![vec![0]]);
    }

    #[test]
    fn test_three_items_lexicographic() {
        let all: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_counts_and_uniqueness() {
        for n in 0..=6 {
            let all: Vec<Vec<usize>> = Permutations::new(n).collect();
            assert_eq!(all.len() as u128, Permutations::count_for(n));
            let unique: HashSet<Vec<usize>> = all.iter().cloned().collect();
            assert_eq!(unique.len(), all.len());
            assert!(all.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_next_permutation_last() {
        let mut p = vec![2, 1, 0];
        assert!(!next_permutation(&mut p));
        assert_eq!(p, vec![2, 1, 0]);
    }

    #[test]
    fn test_count_saturates() {
        assert_eq!(Permutations::count_for(0), 1);
        assert_eq!(Permutations::count_for(4), 24);
        assert_eq!(Permutations::count_for(100), u128::MAX);
    }
}
