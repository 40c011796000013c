//! Record factories and fixture generation for bin-fixtures.
//!
//! The core of this crate is two factories that turn a key and its
//! metadata into the bins of a test record:
//!
//! - [`constant`] - the same literal bins for every record
//! - [`record`] - fresh bins built by invoking one [`BinGenerator`] per bin
//!
//! On top of them, [`FixtureGenerator`] produces whole records from a YAML
//! [`FixtureSchema`](record_core::FixtureSchema), using seeded built-in
//! generators so every run with the same seed yields the same data.
//!
//! # Architecture
//!
//! ```text
//! FixtureSchema (YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   FixtureGenerator   │
//! │                      │
//! │  per set:            │
//! │   - key generator    │
//! │   - RecordFactory    │──► constant(bins) | record(generators)
//! │   - metadata         │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     Record { key, metadata, bins }
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{Key, Metadata};
//! use record_generator::{from_fn, record, BinGenerators, RecordFactory};
//!
//! let mut next_id = 0i64;
//! let mut factory = record(
//!     BinGenerators::new()
//!         .with("id", from_fn(move || {
//!             next_id += 1;
//!             next_id
//!         }))
//!         .with("kind", from_fn(|| "order")),
//! );
//!
//! let key = Key::new("test", "orders", 1).unwrap();
//! let bins = factory.produce(&key, &Metadata::default()).unwrap();
//! assert_eq!(bins["id"].as_i64(), Some(1));
//! ```
//!
//! # Generators
//!
//! The following generator types can be named in a fixture schema:
//!
//! - `sequential` - Sequential integers
//! - `int_range` - Random integers in a range
//! - `float_range` - Random doubles in a range
//! - `pattern` - Pattern strings with placeholders (`{index}`, `{uuid}`, `{rand:N}`)
//! - `weighted_bool` - Boolean with configurable true probability
//! - `one_of` - Random selection from a list
//! - `sample_list` - List of random samples from a pool
//! - `random_bytes` - Random byte strings
//! - `timestamp_range` - Epoch milliseconds in a date range
//! - `static` - Static value
//! - `nil` - Nil value

pub mod factory;
pub mod fixture;
pub mod generators;

// Re-exports for convenience
pub use factory::{
    constant, from_fn, record, BinGenerator, BinGenerators, ConstantRecord, GeneratedRecord,
    InvocationError, RecordFactory,
};
pub use fixture::{FixtureError, FixtureGenerator, RecordIterator};
pub use generators::{build_generator, ConfigError};
