use math::nth_prime;

/// PE7: 10001st Prime
/// The shared prime cache is infinite, so the 10001st prime always exists.
pub fn solve(_verbose: bool) -> String {
    nth_prime(10_001)
        .expect("the prime sequence never ends")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve(false), "104743");
    }
}
