use math::{divisors, triangle_numbers};

/// Candidates are searched from T(10001) onwards.
const START: u64 = 10_000;

/// PE12: Highly Divisible Triangular Number
/// Find the first triangle number with over five hundred divisors.
pub fn solve(verbose: bool) -> String {
    for t in triangle_numbers(START) {
        let divisor_count = divisors(t).len();

        if verbose {
            println!("{} {}", t, divisor_count);
        }

        if divisor_count > 500 {
            return t.to_string();
        }
    }

    unreachable!()
}
