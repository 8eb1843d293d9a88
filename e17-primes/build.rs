use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("primes.rs");
    let mut file = File::create(dest_path).unwrap();

    let mut primes: Vec<i32> = vec![];

    'outer: for i in 2..1 << 17 {
        for &p in &primes {
            if p * p > i {
                break;
            }
            if i % p == 0 {
                continue 'outer;
            }
        }
        primes.push(i);
    }

    writeln!(
        file,
        "/// All primes below 2<sup>17</sup> in a const-sized `[i32; {}]`, generated in \
		 `build.rs`. See more information in crate-level documentation.",
        primes.len()
    )
    .unwrap();
    writeln!(file, "pub static PRIMES: [i32; {}] = [", primes.len()).unwrap();
    for prime in primes {
        writeln!(file, "    {},", prime).unwrap();
    }
    writeln!(file, "];").unwrap();
}
