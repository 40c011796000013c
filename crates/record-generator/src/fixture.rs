//! Schema-driven fixture generation.
//!
//! `FixtureGenerator` builds one [`RecordFactory`] per set of a
//! [`FixtureSchema`]: sets with a `constant` mapping use [`constant`], sets
//! with `bins` use [`record`] over the built-in generators. Records are then
//! produced per set, each with a freshly generated key.

use crate::factory::{
    constant, record, BinGenerator, BinGenerators, ConstantRecord, GeneratedRecord,
    InvocationError, RecordFactory,
};
use crate::generators::static_value::yaml_to_bin_value;
use crate::generators::{build_generator, ConfigError};
use record_core::{Bins, FixtureSchema, Key, KeyError, KeyValue, Metadata, Record, SetFixture};
use std::collections::HashMap;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Error type for fixture generation.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Set not found in schema
    #[error("Set not found: {0}")]
    SetNotFound(String),

    /// Generator configuration rejected
    #[error("Invalid generator for '{target}' in set '{set}': {source}")]
    InvalidGenerator {
        set: String,
        target: String,
        source: ConfigError,
    },

    /// Key could not be built
    #[error("Invalid key for set '{set}': {source}")]
    InvalidKey { set: String, source: KeyError },

    /// A bin or key generator failed
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

/// Factory behind one set.
#[derive(Debug)]
enum SetFactory {
    Constant(ConstantRecord),
    Generated(GeneratedRecord),
}

impl RecordFactory for SetFactory {
    fn produce(&mut self, key: &Key, metadata: &Metadata) -> Result<Bins, InvocationError> {
        match self {
            Self::Constant(factory) => factory.produce(key, metadata),
            Self::Generated(factory) => factory.produce(key, metadata),
        }
    }
}

struct SetState {
    namespace: String,
    name: String,
    metadata: Metadata,
    key: Box<dyn BinGenerator>,
    factory: SetFactory,
    index: u64,
}

/// Produces fixture records for the sets of a schema.
///
/// Every key and bin generator gets its own RNG seeded from the base seed
/// and its position in the schema, so the same schema, seed and start index
/// always produce the same records.
pub struct FixtureGenerator {
    schema: FixtureSchema,
    seed: u64,
    sets: HashMap<String, SetState>,
}

impl FixtureGenerator {
    /// Create a generator for every set in `schema`.
    ///
    /// Fails if any generator configuration or namespace is invalid.
    pub fn new(schema: FixtureSchema, seed: u64) -> Result<Self, FixtureError> {
        let sets = build_sets(&schema, seed, 0)?;
        Ok(Self { schema, seed, sets })
    }

    /// Restart every set at row `index`.
    ///
    /// Sequences and `{index}` placeholders resume from `index`. The RNGs are
    /// re-seeded from the base seed and `index`.
    pub fn with_start_index(mut self, index: u64) -> Result<Self, FixtureError> {
        self.sets = build_sets(&self.schema, self.seed, index)?;
        Ok(self)
    }

    /// Get the index of the next record of a set.
    pub fn current_index(&self, set: &str) -> Option<u64> {
        self.sets.get(set).map(|state| state.index)
    }

    /// Generate the next record for the given set.
    ///
    /// The row index advances as soon as a key has been drawn, so it stays
    /// in step with the key and bin counters even when building the key or
    /// the bins fails.
    pub fn next_record(&mut self, set: &str) -> Result<Record, FixtureError> {
        let state = self
            .sets
            .get_mut(set)
            .ok_or_else(|| FixtureError::SetNotFound(set.to_string()))?;

        let user_key = state.key.generate()?;
        state.index += 1;

        let key = KeyValue::try_from(user_key)
            .and_then(|value| Key::new(state.namespace.clone(), state.name.clone(), value))
            .map_err(|source| FixtureError::InvalidKey {
                set: set.to_string(),
                source,
            })?;

        let bins = state.factory.produce(&key, &state.metadata)?;

        Ok(Record::new(key, state.metadata, bins))
    }

    /// Generate `count` records for the given set.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, set: &str, count: u64) -> Result<RecordIterator<'_>, FixtureError> {
        if !self.sets.contains_key(set) {
            return Err(FixtureError::SetNotFound(set.to_string()));
        }

        Ok(RecordIterator {
            generator: self,
            set: set.to_string(),
            remaining: count,
        })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &FixtureSchema {
        &self.schema
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Iterator that lazily generates records of one set.
pub struct RecordIterator<'a> {
    generator: &'a mut FixtureGenerator,
    set: String,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<Record, FixtureError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(&self.set))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

fn build_sets(
    schema: &FixtureSchema,
    seed: u64,
    start_index: u64,
) -> Result<HashMap<String, SetState>, FixtureError> {
    schema
        .sets
        .iter()
        .enumerate()
        .map(|(position, set)| -> Result<(String, SetState), FixtureError> {
            let state = build_set(set, position as u64, seed, start_index)?;
            Ok((set.name.clone(), state))
        })
        .collect()
}

fn build_set(
    set: &SetFixture,
    position: u64,
    seed: u64,
    start_index: u64,
) -> Result<SetState, FixtureError> {
    // Reject bad namespaces and set names before the first record.
    Key::new(set.namespace.as_str(), set.name.as_str(), 0).map_err(|source| {
        FixtureError::InvalidKey {
            set: set.name.clone(),
            source,
        }
    })?;

    let invalid = |target: &str| {
        let set = set.name.clone();
        let target = target.to_string();
        move |source| FixtureError::InvalidGenerator {
            set,
            target,
            source,
        }
    };

    let key = build_generator(
        &set.key_generator(),
        slot_seed(seed, position, 0, start_index),
        start_index,
    )
    .map_err(invalid("key"))?;

    let factory = match (&set.bins, &set.constant) {
        (Some(bins), _) => {
            let generators = bins
                .iter()
                .enumerate()
                .map(|(slot, bin)| -> Result<(String, Box<dyn BinGenerator>), FixtureError> {
                    let generator = build_generator(
                        &bin.generator,
                        slot_seed(seed, position, slot as u64 + 1, start_index),
                        start_index,
                    )
                    .map_err(invalid(&bin.name))?;
                    Ok((bin.name.clone(), generator))
                })
                .collect::<Result<BinGenerators, FixtureError>>()?;
            SetFactory::Generated(record(generators))
        }
        (None, Some(literal)) => {
            let bins: Bins = literal
                .iter()
                .filter_map(|(name, value)| {
                    Some((name.as_str()?.to_string(), yaml_to_bin_value(value)))
                })
                .collect();
            SetFactory::Constant(constant(bins))
        }
        (None, None) => SetFactory::Constant(constant(Bins::new())),
    };

    tracing::debug!(
        set = %set.name,
        namespace = %set.namespace,
        constant = set.is_constant(),
        bins = set.bin_names().len(),
        start_index,
        "Built fixture set"
    );

    Ok(SetState {
        namespace: set.namespace.clone(),
        name: set.name.clone(),
        metadata: Metadata::new(set.ttl, set.generation),
        key,
        factory,
        index: start_index,
    })
}

/// Seed for one generator slot (0 is the key, bins start at 1).
fn slot_seed(seed: u64, position: u64, slot: u64, start_index: u64) -> u64 {
    let slot_id = (position << 32) | slot;
    seed.wrapping_add(slot_id.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
        .wrapping_add(start_index.wrapping_mul(GOLDEN_GAMMA.rotate_left(17)))
}
