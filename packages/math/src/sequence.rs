/// Iterator that yields triangle numbers: 1, 3, 6, 10, 15, ...
///
/// Ends instead of wrapping once the next number no longer fits in a u64.
pub struct TriangleNumbers {
    n: u64,
    current: Option<u64>,
}

impl TriangleNumbers {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Triangle numbers from T(start + 1) onwards.
    pub fn starting_after(start: u64) -> Self {
        let current = u128::from(start) * (u128::from(start) + 1) / 2;
        Self {
            n: start,
            current: u64::try_from(current).ok(),
        }
    }
}

impl Default for TriangleNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TriangleNumbers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.n.checked_add(1);
        let next = self.current.zip(n).and_then(|(current, n)| current.checked_add(n));
        match (n, next) {
            (Some(n), Some(next)) => {
                self.n = n;
                self.current = Some(next);
                Some(next)
            }
            _ => {
                self.current = None;
                None
            }
        }
    }
}

/// Returns triangle numbers beginning with T(start + 1) = (start + 1)(start + 2) / 2.
///
/// # Example
///
/// ```
/// use math::sequence::triangle_numbers;
///
/// let first: Vec<u64> = triangle_numbers(0).take(5).collect();
/// assert_eq!(first, vec![1, 3, 6, 10, 15]);
/// assert_eq!(triangle_numbers(3).next(), Some(10));
/// ```
pub fn triangle_numbers(start: u64) -> TriangleNumbers {
    TriangleNumbers::starting_after(start)
}
