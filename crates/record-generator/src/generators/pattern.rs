//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - row index
//! - `{uuid}` - UUID drawn from the generator's RNG
//! - `{rand:N}` - random N-digit number

use rand::Rng;
use record_core::BinValue;
use uuid::Builder;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> BinValue {
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        let uuid = Builder::from_random_bytes(rng.random()).into_uuid();
        result = result.replacen("{uuid}", &uuid.to_string(), 1);
    }

    // Replace {rand:N} patterns
    while let Some(start) = result.find("{rand:") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let Ok(digits) = result[start + 6..end].parse::<usize>() else {
            // Invalid format, leave the rest untouched
            break;
        };
        let random_num = generate_random_digits(rng, digits);
        result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
    }

    BinValue::String(result)
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|position| {
            // No leading zero
            let low = if position == 0 { 1 } else { 0 };
            char::from(b'0' + rng.random_range(low..10u8))
        })
        .collect()
}
