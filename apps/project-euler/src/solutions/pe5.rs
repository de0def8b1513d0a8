use std::collections::BTreeMap;

use itertools::Itertools;
use math::{prime_factors, product};

/// PE5: Smallest Multiple
/// Find the smallest positive number evenly divisible by all numbers from 1 to 20.
/// Each prime appears in the LCM with its highest exponent among 1..=20.
pub fn solve(_verbose: bool) -> String {
    let mut exponents: BTreeMap<u64, usize> = BTreeMap::new();
    for n in 2..=20 {
        for (exponent, p) in prime_factors(n).dedup_with_count() {
            let best = exponents.entry(p).or_default();
            *best = (*best).max(exponent);
        }
    }

    product(
        exponents
            .into_iter()
            .flat_map(|(p, exponent)| std::iter::repeat_n(p, exponent)),
    )
    .expect("lcm of 1..=20 fits in u64")
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve(false), "232792560");
    }
}
