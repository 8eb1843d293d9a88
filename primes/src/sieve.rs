//! Sieve of Eratosthenes over a bounded range.

/// Computes primality for every integer in `0..=limit`.
///
/// Index `i` of the returned table is `true` iff `i` is prime.
pub fn primality_table(limit: usize) -> Vec<bool> {
    let mut table = vec![true; limit + 1];
    for entry in table.iter_mut().take(2) {
        // 0 and 1 are not prime
        *entry = false;
    }
    let mut i = 2;
    while i * i <= limit {
        if table[i] {
            // multiples below i * i were already crossed off by a smaller factor
            for multiple in (i * i..=limit).step_by(i) {
                table[multiple] = false;
            }
        }
        i += 1;
    }
    table
}

/// Collects the first `count` primes from a primality table, ascending.
///
/// Returns fewer than `count` values when the table holds fewer primes.
pub fn first_primes(table: &[bool], count: usize) -> Vec<i32> {
    table
        .iter()
        .enumerate()
        .filter_map(|(i, &is_prime)| is_prime.then_some(i as i32))
        .take(count)
        .collect()
}
