//! Fixture command handlers.
//!
//! This module contains handlers for the generate and validate commands.

pub mod generate;
pub mod validate;

use anyhow::Context;
use record_core::FixtureSchema;
use std::path::Path;

/// Load a fixture schema, attaching the path to any error.
pub fn load_schema(path: &Path) -> anyhow::Result<FixtureSchema> {
    FixtureSchema::from_file(path)
        .with_context(|| format!("Failed to load fixture schema from {path:?}"))
}
