use math::proper_divisors;

const LIMIT: u64 = 10_000;

/// PE21: Amicable Numbers
/// Sum all amicable numbers under 10000.
pub fn solve(verbose: bool) -> String {
    let divisor_sums: Vec<u64> = (0..LIMIT)
        .map(|n| proper_divisors(n).iter().sum())
        .collect();

    let amicable = (1..LIMIT).filter(|&a| {
        let b = divisor_sums[a as usize];
        let back = match divisor_sums.get(b as usize) {
            Some(&sum) => sum,
            None => proper_divisors(b).iter().sum(),
        };
        back == a && a != b
    });

    let mut sum = 0u64;
    for a in amicable {
        if verbose {
            println!("{} and {} are amicable", a, divisor_sums[a as usize]);
        }
        sum += a;
    }
    sum.to_string()
}
