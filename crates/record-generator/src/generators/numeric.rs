//! Numeric value generators.

use crate::factory::{BinGenerator, InvocationError};
use rand::Rng;
use record_core::BinValue;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> BinValue {
    BinValue::Integer(rng.random_range(min..=max))
}

/// Generate a random double in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> BinValue {
    BinValue::Double(rng.random_range(min..=max))
}

/// Integer sequence `start, start + 1, ...`.
///
/// Fails once the next value no longer fits in an `i64`.
#[derive(Debug, Clone)]
pub struct Sequential {
    start: i64,
    index: u64,
}

impl Sequential {
    /// Create a sequence whose first value is `start + index`.
    pub fn new(start: i64, index: u64) -> Self {
        Self { start, index }
    }

    fn next_value(&mut self) -> Result<BinValue, InvocationError> {
        let value = i64::try_from(self.index)
            .ok()
            .and_then(|offset| self.start.checked_add(offset))
            .ok_or_else(|| {
                InvocationError::failed(format!(
                    "sequence starting at {} overflowed at index {}",
                    self.start, self.index
                ))
            })?;
        self.index += 1;
        Ok(BinValue::Integer(value))
    }
}

impl From<Sequential> for Box<dyn BinGenerator> {
    fn from(mut sequence: Sequential) -> Self {
        Box::new(move || sequence.next_value())
    }
}
