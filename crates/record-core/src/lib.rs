//! Core types for the bin-fixtures framework.
//!
//! This crate provides the foundational types shared by the fixture
//! generator and the output crates:
//!
//! - [`BinValue`] - Closed set of values a bin can hold
//! - [`Bins`] - Bin name to value mapping
//! - [`Key`], [`KeyValue`] - Record addressing (namespace, set, user key)
//! - [`Metadata`] - Per-record TTL and generation
//! - [`Record`] - A fully generated fixture record
//! - [`FixtureSchema`] - Fixture definitions loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! record-core (this crate)
//!    │
//!    ├─── record-generator  (factories and built-in generators)
//!    │
//!    └─── record-json       (JSON rendering of records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{BinValue, Key, Metadata};
//!
//! let key = Key::new("test", "users", 42).unwrap();
//! let metadata = Metadata::never_expire();
//! let value = BinValue::from("alice");
//!
//! assert_eq!(key.namespace, "test");
//! assert_eq!(metadata.ttl, record_core::TTL_NEVER_EXPIRE);
//! assert_eq!(value.as_str(), Some("alice"));
//! ```

pub mod key;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use key::{
    Key, KeyError, KeyValue, Metadata, NAMESPACE_MAX_LEN, SET_MAX_LEN, TTL_DONT_UPDATE,
    TTL_NAMESPACE_DEFAULT, TTL_NEVER_EXPIRE,
};
pub use schema::{BinFixture, FixtureSchema, GeneratorConfig, SchemaError, SetFixture};
pub use values::{BinValue, Bins, Record};
