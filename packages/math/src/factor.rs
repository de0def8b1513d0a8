//! Prime factorization and divisors, driven by the shared prime cache.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::cache::{CachedSequence, Iter};
use crate::prime::primes;

/// Iterator over the prime factors of a number, smallest first, with
/// multiplicity.
pub struct PrimeFactors {
    remaining: u64,
    primes: Iter<u64>,
    current: Option<u64>,
}

impl Iterator for PrimeFactors {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= 1 {
            return None;
        }

        loop {
            let p = match self.current {
                Some(p) => p,
                None => {
                    let p = self.primes.next()?;
                    self.current = Some(p);
                    p
                }
            };

            // No factor up to the square root: what's left is prime.
            if p.checked_mul(p).is_none_or(|square| square > self.remaining) {
                let last = self.remaining;
                self.remaining = 1;
                return Some(last);
            }

            if self.remaining.is_multiple_of(p) {
                self.remaining /= p;
                return Some(p);
            }
            self.current = None;
        }
    }
}

/// Returns the prime factors of `n` in increasing order, with multiplicity.
///
/// Walks the shared prime cache from the start, so primes found by earlier
/// calls are reused. `0` and `1` have no prime factors.
///
/// # Example
///
/// ```
/// use math::factor::prime_factors;
///
/// assert_eq!(prime_factors(84).collect::<Vec<_>>(), vec![2, 2, 3, 7]);
/// assert_eq!(prime_factors(1).count(), 0);
/// ```
pub fn prime_factors(n: u64) -> PrimeFactors {
    PrimeFactors {
        remaining: n,
        primes: primes().iter(),
        current: None,
    }
}

/// Every divisor of the product of `factors`.
///
/// That is 1 together with the product of each distinct non-empty
/// sub-multiset of `factors`. Repeated primes are expanded by exponent, so
/// `[2, 2]` contributes 2 and 4 once each.
///
/// # Example
///
/// ```
/// use math::factor::divisors_from_prime_factors;
/// use std::collections::BTreeSet;
///
/// let divisors = divisors_from_prime_factors(&[2, 2, 3]);
/// assert_eq!(divisors, BTreeSet::from([1, 2, 3, 4, 6, 12]));
/// ```
pub fn divisors_from_prime_factors(factors: &[u64]) -> BTreeSet<u64> {
    let mut divisors = BTreeSet::from([1]);

    for (exponent, prime) in factors.iter().copied().sorted_unstable().dedup_with_count() {
        let smaller: Vec<u64> = divisors.iter().copied().collect();
        for divisor in smaller {
            let mut multiple = divisor;
            for _ in 0..exponent {
                multiple *= prime;
                divisors.insert(multiple);
            }
        }
    }

    divisors
}

/// Every divisor of `n`, including 1 and `n`. Empty for `0`.
///
/// # Example
///
/// ```
/// use math::factor::divisors;
/// use std::collections::BTreeSet;
///
/// assert_eq!(divisors(12), BTreeSet::from([1, 2, 3, 4, 6, 12]));
/// assert_eq!(divisors(1), BTreeSet::from([1]));
/// ```
pub fn divisors(n: u64) -> BTreeSet<u64> {
    if n == 0 {
        return BTreeSet::new();
    }
    let factors: Vec<u64> = prime_factors(n).collect();
    divisors_from_prime_factors(&factors)
}

/// Count the number of divisors of n from its prime exponents.
///
/// # Example
///
/// ```
/// use math::factor::count_divisors;
///
/// assert_eq!(count_divisors(28), 6); // 1, 2, 4, 7, 14, 28
/// assert_eq!(count_divisors(12), 6); // 1, 2, 3, 4, 6, 12
/// ```
pub fn count_divisors(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    prime_factors(n)
        .dedup_with_count()
        .map(|(exponent, _)| exponent as u64 + 1)
        .product()
}

/// Divisors of `n` other than `n` itself.
pub fn proper_divisors(n: u64) -> BTreeSet<u64> {
    let mut divisors = divisors(n);
    divisors.remove(&n);
    divisors
}
