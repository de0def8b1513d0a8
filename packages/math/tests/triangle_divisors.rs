use math::{CachedSequence, divisors, primes, triangle_numbers};

#[test]
fn first_triangle_number_with_over_500_divisors() {
    let (triangle, count) = triangle_numbers(10_000)
        .map(|t| (t, divisors(t).len()))
        .find(|&(_, count)| count > 500)
        .unwrap();

    assert_eq!(triangle, 76576500);
    assert_eq!(count, 576);
}

#[test]
fn factorization_fills_shared_prime_cache() {
    let _ = divisors(2 * 3 * 5 * 7 * 11 * 13 * 17 * 19 * 23);
    assert!(primes().cached_len() >= 9);
    assert_eq!(
        primes().slice(0, Some(9), 1).unwrap().into_values(),
        Some(vec![2, 3, 5, 7, 11, 13, 17, 19, 23])
    );
}
