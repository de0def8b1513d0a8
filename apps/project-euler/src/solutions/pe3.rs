use math::prime_factors;

/// PE3: Largest Prime Factor
/// Find the largest prime factor of 600851475143.
pub fn solve(verbose: bool) -> String {
    let factors: Vec<u64> = prime_factors(600851475143).collect();
    if verbose {
        println!("Prime factors: {:?}", factors);
    }
    factors.last().copied().unwrap_or(1).to_string()
}
