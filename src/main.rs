use std::fs::File;
use std::hint::black_box;
use std::io::{stdout, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use primes::{generate, time};

/// How many primes each benchmark round requests.
const PRIMES_PER_ROUND: i32 = 1_000_000;

fn main() {
    let mut stats = File::create("stats.tsv").unwrap();

    let last_ctrlc = Arc::new(Mutex::new(Instant::now()));
    ctrlc::set_handler(move || {
        stdout().flush().unwrap();

        let now = Instant::now();
        let mut lock = last_ctrlc.lock().unwrap();
        let last = *lock;
        *lock = now;

        if now - last < Duration::from_secs(2) {
            println!();
            std::process::exit(0);
        }
    })
    .expect("Error setting Ctrl-C handler");

    println!("Set Ctrl-C handler");

    let mut total_ms = 0;
    for i in 1u64.. {
        let (result, ms) = time(|| black_box(generate(PRIMES_PER_ROUND)));
        let primes = result.expect("prime generation failed");
        total_ms += ms;
        writeln!(stats, "{}\t{ms}", primes.len()).unwrap();
        print!(
            "Average elapsed: {}ms  (runs: {i})                \r",
            total_ms / i
        );
        stdout().flush().unwrap();
    }
}
