//! Wall-clock timing for benchmark runs.

use std::time::Instant;

/// Runs `f` synchronously and returns its result together with the elapsed
/// wall-clock time in whole milliseconds.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_millis() as u64)
}
