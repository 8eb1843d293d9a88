//! Loading pre-computed prime sequences from flat binary files.
//!
//! The format is a headerless run of 4-byte signed integers in native byte
//! order, one per prime, ascending, with no delimiter or terminator.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::{PrimesError, Result};

/// Reads every 4-byte integer from `path` until end of file.
///
/// An empty file yields an empty sequence.
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<i32>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut primes = Vec::new();
    while let Some(value) = read_value(&mut reader)? {
        primes.push(value);
    }
    Ok(primes)
}

/// Reads 4-byte integers from `path` until `count` values have been read.
///
/// Fails with [`PrimesError::InsufficientData`] when the file ends before
/// `count` values were read. There is no partial result and no fallback to
/// sieve generation.
pub fn from_file_exact(path: impl AsRef<Path>, count: i32) -> Result<Vec<i32>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut primes = Vec::new();
    while primes.len() < count.max(0) as usize {
        match read_value(&mut reader)? {
            Some(value) => primes.push(value),
            None => {
                return Err(PrimesError::InsufficientData {
                    requested: count,
                    available: primes.len(),
                })
            }
        }
    }
    Ok(primes)
}

fn read_value(reader: &mut impl Read) -> Result<Option<i32>> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(Some(i32::from_ne_bytes(buf))),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    /// Writes `values` as native-endian 4-byte integers to a temp file.
    fn write_primes(name: &str, values: &[i32]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut bytes = Vec::with_capacity(values.len() * 4);
        for value in values {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn reads_until_end_of_file() {
        let path = write_primes("primes_eof.bin", &[2, 3, 5]);
        assert_eq!(from_file(&path).unwrap(), [2, 3, 5]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_file_yields_empty_sequence() {
        let path = write_primes("primes_empty.bin", &[]);
        assert_eq!(from_file(&path).unwrap(), []);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn exact_count_stops_early() {
        let path = write_primes("primes_exact.bin", &[2, 3, 5, 7, 11]);
        assert_eq!(from_file_exact(&path, 3).unwrap(), [2, 3, 5]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn short_file_is_insufficient() {
        let path = write_primes("primes_short.bin", &[2, 3, 5]);
        assert!(matches!(
            from_file_exact(&path, 5),
            Err(PrimesError::InsufficientData {
                requested: 5,
                available: 3,
            })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let missing = std::env::temp_dir().join("primes_missing.bin");
        assert!(matches!(from_file(&missing), Err(PrimesError::Io(_))));
    }
}
