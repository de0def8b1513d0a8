use math::primes;

/// PE10: Summation of Primes
/// Sum all primes below two million.
pub fn solve(verbose: bool) -> String {
    let sum: u64 = primes().into_iter().take_while(|&p| p < 2_000_000).sum();
    if verbose {
        println!("Largest cached prime: {}", primes().cached_max().unwrap_or_default());
    }
    sum.to_string()
}
