//! List and byte-string generators.

use rand::Rng;
use record_core::BinValue;

/// Generate a list of random picks from `pool`.
///
/// The length is chosen uniformly in `[min_length, max_length]` and picks
/// may repeat.
pub fn generate_sample_list<R: Rng>(
    rng: &mut R,
    pool: &[BinValue],
    min_length: usize,
    max_length: usize,
) -> BinValue {
    let length = rng.random_range(min_length..=max_length);
    let items = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())].clone())
        .collect();
    BinValue::List(items)
}

/// Generate `length` random bytes.
pub fn generate_random_bytes<R: Rng>(rng: &mut R, length: usize) -> BinValue {
    let mut bytes = vec![0u8; length];
    rng.fill(bytes.as_mut_slice());
    BinValue::Bytes(bytes)
}
