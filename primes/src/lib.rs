//! Bounded prime sequence generation for algorithmic puzzle solving.
//!
//! The first N primes are either computed on the fly — a sieve of
//! Eratosthenes whose search space is capped by an n-th-prime
//! approximation — or loaded from a pre-computed flat binary file.
//!
//! ```
//! let primes = primes::generate(5)?;
//! assert_eq!(primes, [2, 3, 5, 7, 11]);
//! # primes::Result::Ok(())
//! ```

pub mod bound;
pub mod error;
pub mod file;
pub mod sieve;
pub mod timing;

pub use error::{PrimesError, Result};
pub use file::{from_file, from_file_exact};
pub use timing::time;

use bound::nth_prime_bound;
use sieve::{first_primes, primality_table};

/// Generates the first `count` primes in ascending order.
///
/// The sieve limit comes from [`bound::nth_prime_bound`], so the result
/// always holds exactly `count` primes. Fails with
/// [`PrimesError::InvalidCount`] when `count` is less than 1.
pub fn generate(count: i32) -> Result<Vec<i32>> {
    let limit = nth_prime_bound(count)?;
    let table = primality_table(limit as usize);
    Ok(first_primes(&table, count as usize))
}
