//! Counting helpers: products, factorials, binomials and subsets.

use std::collections::BTreeSet;

use itertools::Itertools;

/// Multiply all values together (1 for an empty input).
///
/// None if the product does not fit in a u64.
///
/// # Example
///
/// ```
/// use math::combinatorics::{factorial, product};
///
/// assert_eq!(product([2, 3]), Some(6));
/// assert_eq!(product(1..6), factorial(5));
/// assert_eq!(product([u64::MAX, 2]), None);
/// ```
pub fn product<I: IntoIterator<Item = u64>>(values: I) -> Option<u64> {
    values.into_iter().try_fold(1u64, u64::checked_mul)
}

/// Compute factorial of n (n!), or None past 20!.
pub fn factorial(n: u64) -> Option<u64> {
    product(2..=n)
}

/// Number of ways to choose `r` items from `n`.
///
/// Zero when `r > n`; None if the result does not fit in a u64.
///
/// # Example
///
/// ```
/// use math::combinatorics::comb;
///
/// assert_eq!(comb(5, 2), Some(10));
/// assert_eq!(comb(40, 20), Some(137846528820));
/// assert_eq!(comb(2, 3), Some(0));
/// ```
pub fn comb(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    // C(n, i) * (n - i) is always divisible by i + 1.
    (0..r).try_fold(1u64, |acc, i| {
        let next = u128::from(acc) * u128::from(n - i) / u128::from(i + 1);
        u64::try_from(next).ok()
    })
}

/// Every combination of `values` of every size from 1 up to `values.len()`,
/// smallest first.
pub fn all_combos<T: Clone>(values: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..=values.len()).flat_map(move |size| values.iter().cloned().combinations(size))
}

/// Every subset of `values`, including the empty set.
pub fn powerset<T: Ord + Clone>(values: &[T]) -> BTreeSet<BTreeSet<T>> {
    values
        .iter()
        .cloned()
        .powerset()
        .map(BTreeSet::from_iter)
        .collect()
}
