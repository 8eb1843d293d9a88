//! All primes below 2<sup>17</sup> in a const-sized [ `i32` ] array,
//! generated in build.rs by trial division. Reference data for testing
//! sieve output and n-th-prime bounds, long enough to cover the first
//! 10000 primes.

include!(concat!(env!("OUT_DIR"), "/primes.rs"));
