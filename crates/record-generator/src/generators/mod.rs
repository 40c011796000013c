//! Built-in bin generators.
//!
//! This module turns a [`GeneratorConfig`] from the fixture schema into a
//! boxed [`BinGenerator`]. Every generator owns its own seeded RNG and row
//! counter, so two generators built with the same seed and start index
//! produce the same sequence.

pub mod list;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod timestamp;

use crate::factory::{BinGenerator, InvocationError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use record_core::{BinValue, GeneratorConfig};

/// Upper bound for `random_bytes.length` and `sample_list.max_length`.
pub const MAX_GENERATED_LEN: usize = 8 * 1024 * 1024;

/// Error type for invalid generator configurations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// Lower bound above upper bound
    #[error("min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// Bound or span that is not a finite double
    #[error("range {min}..={max} is not finite")]
    NonFiniteRange { min: f64, max: f64 },

    /// Length above [`MAX_GENERATED_LEN`]
    #[error("{field} {len} exceeds the maximum of {max}", max = MAX_GENERATED_LEN)]
    TooLong { field: &'static str, len: usize },

    /// Probability outside [0, 1]
    #[error("true_weight {0} must be between 0.0 and 1.0")]
    InvalidWeight(f64),

    /// Nothing to pick from
    #[error("{0} pool must not be empty")]
    EmptyPool(&'static str),

    /// Timestamp that is not RFC 3339
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl ConfigError {
    fn range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Build a generator from its configuration.
///
/// `seed` seeds the generator's RNG and `start_index` is the row index of
/// the first value, used by `sequential` and the `{index}` placeholder.
pub fn build_generator(
    config: &GeneratorConfig,
    seed: u64,
    start_index: u64,
) -> Result<Box<dyn BinGenerator>, ConfigError> {
    let generator: Box<dyn BinGenerator> = match config {
        GeneratorConfig::Sequential { start } => numeric::Sequential::new(*start, start_index).into(),

        GeneratorConfig::IntRange { min, max } => {
            let (min, max) = (*min, *max);
            if min > max {
                return Err(ConfigError::range(min, max));
            }
            indexed(seed, start_index, move |rng, _| {
                numeric::generate_int_range(rng, min, max)
            })
        }

        GeneratorConfig::FloatRange { min, max } => {
            let (min, max) = (*min, *max);
            // Also rejects NaN bounds.
            if !(min <= max) {
                return Err(ConfigError::range(min, max));
            }
            if !(max - min).is_finite() {
                return Err(ConfigError::NonFiniteRange { min, max });
            }
            indexed(seed, start_index, move |rng, _| {
                numeric::generate_float_range(rng, min, max)
            })
        }

        GeneratorConfig::Pattern { pattern } => {
            let pattern = pattern.clone();
            indexed(seed, start_index, move |rng, index| {
                pattern::generate_pattern(&pattern, rng, index)
            })
        }

        GeneratorConfig::WeightedBool { true_weight } => {
            let weight = *true_weight;
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::InvalidWeight(weight));
            }
            indexed(seed, start_index, move |rng, _| {
                BinValue::Bool(rng.random_bool(weight))
            })
        }

        GeneratorConfig::OneOf { values } => {
            if values.is_empty() {
                return Err(ConfigError::EmptyPool("one_of"));
            }
            let values: Vec<BinValue> = values
                .iter()
                .map(static_value::yaml_to_bin_value)
                .collect();
            indexed(seed, start_index, move |rng, _| {
                values[rng.random_range(0..values.len())].clone()
            })
        }

        GeneratorConfig::SampleList {
            pool,
            min_length,
            max_length,
        } => {
            let (min_length, max_length) = (*min_length, *max_length);
            if pool.is_empty() {
                return Err(ConfigError::EmptyPool("sample_list"));
            }
            if min_length > max_length {
                return Err(ConfigError::range(min_length, max_length));
            }
            if max_length > MAX_GENERATED_LEN {
                return Err(ConfigError::TooLong {
                    field: "max_length",
                    len: max_length,
                });
            }
            let pool: Vec<BinValue> = pool.iter().map(static_value::yaml_to_bin_value).collect();
            indexed(seed, start_index, move |rng, _| {
                list::generate_sample_list(rng, &pool, min_length, max_length)
            })
        }

        GeneratorConfig::RandomBytes { length } => {
            let length = *length;
            if length > MAX_GENERATED_LEN {
                return Err(ConfigError::TooLong {
                    field: "length",
                    len: length,
                });
            }
            indexed(seed, start_index, move |rng, _| {
                list::generate_random_bytes(rng, length)
            })
        }

        GeneratorConfig::TimestampRange { start, end } => {
            let start = timestamp::parse_millis(start)?;
            let end = timestamp::parse_millis(end)?;
            if start > end {
                return Err(ConfigError::range(start, end));
            }
            indexed(seed, start_index, move |rng, _| {
                timestamp::generate_timestamp_range(rng, start, end)
            })
        }

        GeneratorConfig::Static { value } => {
            let value = static_value::yaml_to_bin_value(value);
            Box::new(move || -> Result<BinValue, InvocationError> { Ok(value.clone()) })
        }

        GeneratorConfig::Nil => {
            Box::new(|| -> Result<BinValue, InvocationError> { Ok(BinValue::Nil) })
        }
    };

    Ok(generator)
}

/// Wrap an infallible value function with its own RNG and row counter.
fn indexed<F>(seed: u64, start_index: u64, mut f: F) -> Box<dyn BinGenerator>
where
    F: FnMut(&mut StdRng, u64) -> BinValue + 'static,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut index = start_index;
    Box::new(move || -> Result<BinValue, InvocationError> {
        let value = f(&mut rng, index);
        index += 1;
        Ok(value)
    })
}
