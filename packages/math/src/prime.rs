//! Prime number utilities: an incremental sieve, the shared prime cache, and
//! a bounded sieve for known limits.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ascending::AscendingCachedIter;
use crate::cache::CachedSequence;

/// Gaps between consecutive numbers coprime to 30, starting from 7.
const WHEEL_GAPS: [u64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Primes emitted before the wheel takes over.
const WHEEL_PRIMES: [u64; 3] = [2, 3, 5];

fn on_wheel(n: u64) -> bool {
    n % 2 != 0 && n % 3 != 0 && n % 5 != 0
}

/// Incremental sieve of Eratosthenes yielding every prime in order.
///
/// A prime starts sieving only once the candidates reach its square, so the
/// map of pending composites holds one entry per prime up to the square root
/// of the current candidate. Those base primes come from a nested `Sieve`,
/// created the first time one is needed. Candidates skip multiples of 2, 3
/// and 5.
///
/// # Example
///
/// ```
/// use math::prime::Sieve;
///
/// let first_ten: Vec<u64> = Sieve::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Sieve {
    composites: HashMap<u64, u64>,
    seeded: usize,
    candidate: u64,
    gap: usize,
    base: Option<Box<Sieve>>,
    base_prime: u64,
    base_square: u64,
}

impl Sieve {
    pub fn new() -> Self {
        Sieve {
            composites: HashMap::new(),
            seeded: 0,
            candidate: 7,
            gap: 0,
            base: None,
            base_prime: 7,
            base_square: 49,
        }
    }

    /// Moves the pending composite of `prime` past `composite` to the next
    /// odd multiple on the wheel that no other prime has claimed.
    fn reschedule(&mut self, composite: u64, prime: u64) {
        let step = 2 * prime;
        let mut next = composite + step;
        while self.composites.contains_key(&next) || !on_wheel(next) {
            next += step;
        }
        self.composites.insert(next, prime);
    }

    /// Takes the next base prime from the nested sieve.
    fn advance_base(&mut self) {
        let last = self.base_prime;
        let base = self.base.get_or_insert_with(|| Box::new(Sieve::new()));
        match base.find(|&p| p > last) {
            Some(p) => {
                self.base_prime = p;
                // Past u64 there is nothing left to sieve.
                self.base_square = p.checked_mul(p).unwrap_or(u64::MAX);
            }
            None => self.base_square = u64::MAX,
        }
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Sieve {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&p) = WHEEL_PRIMES.get(self.seeded) {
            self.seeded += 1;
            return Some(p);
        }

        loop {
            let c = self.candidate;
            self.candidate += WHEEL_GAPS[self.gap];
            self.gap = (self.gap + 1) % WHEEL_GAPS.len();

            if let Some(p) = self.composites.remove(&c) {
                self.reschedule(c, p);
            } else if c < self.base_square {
                return Some(c);
            } else {
                // c is the square of the base prime, which starts sieving here.
                self.reschedule(c, self.base_prime);
                self.advance_base();
            }
        }
    }
}

static PRIMES: Lazy<AscendingCachedIter<u64>> = Lazy::new(|| {
    tracing::debug!("initialising shared prime cache");
    AscendingCachedIter::new(Sieve::new())
});

/// The process-wide cache of primes: 2, 3, 5, 7, 11, ...
///
/// Created on first use and never reset, so every caller benefits from
/// primes found earlier. Tests that need a fresh cache should build their own
/// `AscendingCachedIter::new(Sieve::new())`.
///
/// # Example
///
/// ```
/// use math::cache::CachedSequence;
/// use math::prime::primes;
///
/// let first_five: Vec<u64> = primes().iter().take(5).collect();
/// assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
/// assert!(primes().contains(&97));
/// ```
pub fn primes() -> &'static AscendingCachedIter<u64> {
    &PRIMES
}

/// Returns the nth prime number (1-indexed: nth_prime(1) = 2, nth_prime(2) = 3, ...).
///
/// Returns None if n is 0.
///
/// # Example
///
/// ```
/// use math::prime::nth_prime;
///
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(6), Some(13));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    let index = isize::try_from(n.checked_sub(1)?).ok()?;
    primes().get(index).ok()
}

/// Check if a number is prime by trial division with the shared primes.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    primes()
        .iter()
        .take_while(|&p| p.checked_mul(p).is_some_and(|square| square <= n))
        .all(|p| !n.is_multiple_of(p))
}

/// Finds all prime numbers less than a given limit `n`.
pub fn primes_below(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let mut sieve = vec![true; n_usize];
    sieve[0] = false;
    sieve[1] = false;

    for i in 2..=(n_usize as f64).sqrt() as usize {
        if sieve[i] {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple] = false;
            }
        }
    }

    (2..n_usize)
        .filter_map(|i| if sieve[i] { Some(i as u32) } else { None })
        .collect()
}
