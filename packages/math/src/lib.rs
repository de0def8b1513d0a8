pub mod ascending;
pub mod cache;
pub mod combinatorics;
pub mod error;
pub mod factor;
pub mod fibonacci;
pub mod prime;
pub mod sequence;

pub use ascending::{AscendingCachedIter, make_ascending_cache};
pub use cache::{CachedIter, CachedSequence, Slice, make_cache};
pub use combinatorics::{all_combos, comb, factorial, powerset, product};
pub use error::{Result, SequenceError};
pub use factor::{count_divisors, divisors, divisors_from_prime_factors, prime_factors, proper_divisors};
pub use fibonacci::{Fibonacci, fibonacci, fibonacci_numbers, nth_fibonacci};
pub use prime::{Sieve, is_prime, nth_prime, primes, primes_below};
pub use sequence::{TriangleNumbers, triangle_numbers};
