use once_cell::sync::Lazy;

use crate::ascending::AscendingCachedIter;
use crate::cache::CachedSequence;

/// Iterator that generates Fibonacci numbers.
///
/// Ends once the next term would overflow `u64`.
///
/// # Example
///
/// ```
/// use math::fibonacci::Fibonacci;
///
/// // Get first 10 Fibonacci numbers
/// let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
pub struct Fibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::with_start(1, 1)
    }

    /// Start with custom initial values (a, b) where the sequence is a, b, a+b, ...
    pub fn with_start(a: u64, b: u64) -> Self {
        Fibonacci {
            curr: Some(a),
            next: Some(b),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        self.curr = self.next;
        self.next = self.next.and_then(|next| curr.checked_add(next));
        Some(curr)
    }
}

/// Returns an iterator over Fibonacci numbers starting with 1, 1, 2, 3, 5, ...
///
/// # Example
///
/// ```
/// use math::fibonacci::fibonacci;
///
/// let first_five: Vec<u64> = fibonacci().take(5).collect();
/// assert_eq!(first_five, vec![1, 1, 2, 3, 5]);
/// ```
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

static FIBONACCI_NUMBERS: Lazy<AscendingCachedIter<u64>> = Lazy::new(|| {
    tracing::debug!("initialising shared fibonacci cache");
    AscendingCachedIter::new(Fibonacci::new())
});

/// The process-wide cache of Fibonacci numbers.
///
/// # Example
///
/// ```
/// use math::fibonacci::fibonacci_numbers;
///
/// assert!(fibonacci_numbers().contains(&144));
/// assert!(!fibonacci_numbers().contains(&150));
/// ```
pub fn fibonacci_numbers() -> &'static AscendingCachedIter<u64> {
    &FIBONACCI_NUMBERS
}

/// Returns the nth Fibonacci number (1-indexed: fib(1) = 1, fib(2) = 1, fib(3) = 2, ...).
///
/// Returns None if n is 0 or if the result overflows u64.
///
/// # Example
///
/// ```
/// use math::fibonacci::nth_fibonacci;
///
/// assert_eq!(nth_fibonacci(1), Some(1));
/// assert_eq!(nth_fibonacci(10), Some(55));
/// assert_eq!(nth_fibonacci(0), None);
/// ```
pub fn nth_fibonacci(n: usize) -> Option<u64> {
    let index = isize::try_from(n.checked_sub(1)?).ok()?;
    fibonacci_numbers().get(index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;

    #[test]
    fn test_fibonacci_iterator() {
        let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
        assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_fibonacci_function() {
        let fibs: Vec<u64> = fibonacci().take(5).collect();
        assert_eq!(fibs, vec![1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_fibonacci_ends_before_overflow() {
        let last = fibonacci().last();
        assert_eq!(last, Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci().count(), 93);
    }

    #[test]
    fn test_nth_fibonacci() {
        assert_eq!(nth_fibonacci(0), None);
        assert_eq!(nth_fibonacci(1), Some(1));
        assert_eq!(nth_fibonacci(2), Some(1));
        assert_eq!(nth_fibonacci(3), Some(2));
        assert_eq!(nth_fibonacci(10), Some(55));
        assert_eq!(nth_fibonacci(20), Some(6765));
        assert_eq!(nth_fibonacci(94), None);
    }

    #[test]
    fn test_shared_cache_is_finite() {
        assert_eq!(
            fibonacci_numbers().get(93),
            Err(SequenceError::OutOfRange { index: 93, len: 93 })
        );
        assert!(!fibonacci_numbers().contains(&u64::MAX));
        assert_eq!(fibonacci_numbers().index_of(&1), Ok(0));
    }

    #[test]
    fn test_fibonacci_with_custom_start() {
        // Lucas numbers: 2, 1, 3, 4, 7, 11, ...
        let lucas: Vec<u64> = Fibonacci::with_start(2, 1).take(6).collect();
        assert_eq!(lucas, vec![2, 1, 3, 4, 7, 11]);
    }
}
