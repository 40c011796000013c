//! bin-fixtures library
//!
//! Record fixture generation for the test suites of a key-value database
//! client.
//!
//! # Features
//!
//! - Record factories: `constant` and `record` callbacks producing bins for a key
//! - Built-in seeded generators: sequences, ranges, patterns, samples, timestamps
//! - YAML fixture schemas describing sets, keys, TTLs and bins
//! - JSON Lines output for feeding fixtures into other tools
//!
//! # Crates
//!
//! - `record_core` - values, keys, metadata and the fixture schema
//! - `record_generator` - factories, generators and `FixtureGenerator`
//! - `record_json` - JSON rendering of records
//!
//! # CLI Usage
//!
//! ```bash
//! # Write 100 records of every set as JSON Lines
//! bin-fixtures generate --schema fixtures.yaml --count 100
//!
//! # Only the users set, resuming at row 1000, into a file
//! bin-fixtures generate --schema fixtures.yaml --set users --start-index 1000 --output users.jsonl
//!
//! # Check a schema without generating anything
//! bin-fixtures validate --schema fixtures.yaml
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod fixtures;

#[derive(Parser, Clone, Debug)]
pub struct SchemaOpts {
    /// Path to the YAML fixture schema
    #[arg(long, value_name = "PATH", env = "BIN_FIXTURES_SCHEMA")]
    pub schema: PathBuf,
}

#[derive(Parser, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub schema_opts: SchemaOpts,

    /// Sets to generate (all sets when omitted)
    #[arg(long = "set", value_name = "NAME")]
    pub sets: Vec<String>,

    /// Number of records per set
    #[arg(long, default_value_t = 10)]
    pub count: u64,

    /// Seed for the generators (defaults to the schema seed, then 0)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Row index to start generating from
    #[arg(long, default_value_t = 0)]
    pub start_index: u64,

    /// File to write JSON Lines to (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub schema_opts: SchemaOpts,
}
