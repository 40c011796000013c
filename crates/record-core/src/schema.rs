//! Fixture schema definitions.
//!
//! A fixture schema is a YAML document listing the sets to generate records
//! for. Each set either lists its bins with a generator per bin, or gives a
//! literal `constant` mapping returned unchanged for every record.
//!
//! ```yaml
//! version: 1
//! seed: 42
//! sets:
//!   - name: users
//!     namespace: test
//!     ttl: 3600
//!     key:
//!       type: sequential
//!       start: 1
//!     bins:
//!       - name: email
//!         generator:
//!           type: pattern
//!           pattern: "user_{index}@example.com"
//!   - name: settings
//!     namespace: test
//!     constant:
//!       region: eu-west
//!       version: 3
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two sets share a name
    #[error("Set '{0}' is defined more than once")]
    DuplicateSet(String),

    /// Two bins of one set share a name
    #[error("Bin '{bin}' is defined more than once in set '{set}'")]
    DuplicateBin { set: String, bin: String },

    /// Set defines both `bins` and `constant`
    #[error("Set '{0}' must define either 'bins' or 'constant', not both")]
    AmbiguousSet(String),

    /// Set defines neither `bins` nor `constant`
    #[error("Set '{0}' must define 'bins' or 'constant'")]
    EmptySet(String),

    /// Constant mapping has a non-string key
    #[error("Set '{0}' has a constant bin whose name is not a string")]
    InvalidBinName(String),
}

/// Generator configuration for a bin or key.
///
/// This enum defines the different types of value generators available
/// for producing fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate sequential integers
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Generate random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random doubles in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Generate strings from a pattern with placeholders
    Pattern {
        /// Pattern string (supports {index}, {uuid}, {rand:N})
        pattern: String,
    },

    /// Generate weighted boolean values
    WeightedBool {
        /// Probability of `true` (0.0 to 1.0)
        true_weight: f64,
    },

    /// Pick one literal at random
    ///
    /// YAML tags such as `!geojson` are not supported here, so values never
    /// become GeoJSON. Use a `constant` set for GeoJSON literals.
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// Generate lists by sampling from a pool
    SampleList {
        /// Pool of values to sample from
        pool: Vec<serde_yaml::Value>,
        /// Minimum list length
        #[serde(default)]
        min_length: usize,
        /// Maximum list length
        max_length: usize,
    },

    /// Generate random byte strings
    RandomBytes {
        /// Number of bytes
        length: usize,
    },

    /// Generate epoch milliseconds between two instants
    TimestampRange {
        /// Start instant (RFC 3339)
        start: String,
        /// End instant (RFC 3339)
        end: String,
    },

    /// Always produce the same literal
    ///
    /// YAML tags such as `!geojson` are not supported here, so values never
    /// become GeoJSON. Use a `constant` set for GeoJSON literals.
    Static {
        /// The literal value
        value: serde_yaml::Value,
    },

    /// Always produce nil
    Nil,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::Sequential { start: 0 }
    }
}

/// A generated bin of a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinFixture {
    /// Bin name
    pub name: String,

    /// Generator configuration for the bin
    pub generator: GeneratorConfig,
}

/// Fixture definition for one set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFixture {
    /// Set name
    pub name: String,

    /// Namespace the set lives in
    pub namespace: String,

    /// TTL in seconds passed as record metadata
    #[serde(default)]
    pub ttl: u32,

    /// Generation passed as record metadata
    #[serde(default)]
    pub generation: u16,

    /// Generator for the user key (sequential from 0 when omitted)
    #[serde(default)]
    pub key: Option<GeneratorConfig>,

    /// Generated bins
    #[serde(default)]
    pub bins: Option<Vec<BinFixture>>,

    /// Literal bins returned for every record
    #[serde(default)]
    pub constant: Option<serde_yaml::Mapping>,
}

impl SetFixture {
    /// Whether records of this set are constant.
    pub fn is_constant(&self) -> bool {
        self.constant.is_some()
    }

    /// Get the key generator, falling back to a sequence from 0.
    pub fn key_generator(&self) -> GeneratorConfig {
        self.key.clone().unwrap_or_default()
    }

    /// Get all bin names of this set.
    pub fn bin_names(&self) -> Vec<&str> {
        match (&self.bins, &self.constant) {
            (Some(bins), _) => bins.iter().map(|b| b.name.as_str()).collect(),
            (None, Some(constant)) => constant.keys().filter_map(|k| k.as_str()).collect(),
            (None, None) => Vec::new(),
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        match (&self.bins, &self.constant) {
            (Some(_), Some(_)) => Err(SchemaError::AmbiguousSet(self.name.clone())),
            (None, None) => Err(SchemaError::EmptySet(self.name.clone())),
            (Some(bins), None) => {
                let mut seen = HashSet::new();
                for bin in bins {
                    if !seen.insert(bin.name.as_str()) {
                        return Err(SchemaError::DuplicateBin {
                            set: self.name.clone(),
                            bin: bin.name.clone(),
                        });
                    }
                }
                Ok(())
            }
            (None, Some(constant)) => {
                if constant.keys().any(|k| !k.is_string()) {
                    return Err(SchemaError::InvalidBinName(self.name.clone()));
                }
                Ok(())
            }
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Full fixture schema.
///
/// Loaded from a YAML file, it is the source of truth for which sets exist
/// and how their records are produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed used when none is given on the command line
    #[serde(default)]
    pub seed: Option<u64>,

    /// Set definitions
    pub sets: Vec<SetFixture>,

    /// Cached set lookup (not serialized)
    #[serde(skip)]
    set_map: HashMap<String, usize>,
}

impl FixtureSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        schema.build_set_map();
        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for set in &self.sets {
            if !seen.insert(set.name.as_str()) {
                return Err(SchemaError::DuplicateSet(set.name.clone()));
            }
            set.validate()?;
        }
        Ok(())
    }

    /// Build the internal set lookup map.
    fn build_set_map(&mut self) {
        self.set_map = self
            .sets
            .iter()
            .enumerate()
            .map(|(idx, set)| (set.name.clone(), idx))
            .collect();
    }

    /// Get a set fixture by name.
    pub fn get_set(&self, name: &str) -> Option<&SetFixture> {
        self.set_map.get(name).and_then(|&idx| self.sets.get(idx))
    }

    /// Get all set names in schema order.
    pub fn set_names(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
version: 1
seed: 7
sets:
  - name: users
    namespace: test
    ttl: 3600
    key:
      type: pattern
      pattern: "user-{index}"
    bins:
      - name: email
        generator:
          type: pattern
          pattern: "user_{index}@example.com"
      - name: age
        generator:
          type: int_range
          min: 18
          max: 80
      - name: tags
        generator:
          type: sample_list
          pool: [a, b, c]
          max_length: 2
      - name: deleted
        generator:
          type: nil
  - name: settings
    namespace: test
    constant:
      region: eu-west
      version: 3
"#;

    #[test]
    fn test_parse_schema() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.set_names(), vec!["users", "settings"]);

        let users = schema.get_set("users").unwrap();
        assert_eq!(users.ttl, 3600);
        assert_eq!(users.generation, 0);
        assert!(!users.is_constant());
        assert_eq!(users.bin_names(), vec!["email", "age", "tags", "deleted"]);
        assert_eq!(
            users.bins.as_ref().unwrap()[1].generator,
            GeneratorConfig::IntRange { min: 18, max: 80 }
        );
        assert!(matches!(
            users.bins.as_ref().unwrap()[2].generator,
            GeneratorConfig::SampleList { min_length: 0, max_length: 2, .. }
        ));

        let settings = schema.get_set("settings").unwrap();
        assert!(settings.is_constant());
        assert_eq!(settings.key_generator(), GeneratorConfig::Sequential { start: 0 });
        assert_eq!(settings.bin_names(), vec!["region", "version"]);
    }

    #[test]
    fn test_defaults() {
        let schema = FixtureSchema::from_yaml(
            r#"
sets:
  - name: empty
    namespace: test
    bins: []
"#,
        )
        .unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, None);
        assert!(schema.get_set("empty").unwrap().bin_names().is_empty());
        assert!(schema.get_set("missing").is_none());
    }

    #[test]
    fn test_duplicate_set_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
    bins: []
  - name: a
    namespace: test
    bins: []
"#,
        );
        assert!(matches!(result, Err(SchemaError::DuplicateSet(name)) if name == "a"));
    }

    #[test]
    fn test_duplicate_bin_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
    bins:
      - name: x
        generator: { type: nil }
      - name: x
        generator: { type: nil }
"#,
        );
        assert!(matches!(result, Err(SchemaError::DuplicateBin { bin, .. }) if bin == "x"));
    }

    #[test]
    fn test_set_needs_exactly_one_body() {
        let both = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
    bins: []
    constant: { x: 1 }
"#,
        );
        assert!(matches!(both, Err(SchemaError::AmbiguousSet(_))));

        let neither = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
"#,
        );
        assert!(matches!(neither, Err(SchemaError::EmptySet(_))));
    }

    #[test]
    fn test_constant_keys_must_be_strings() {
        let result = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
    constant:
      1: one
"#,
        );
        assert!(matches!(result, Err(SchemaError::InvalidBinName(_))));
    }

    #[test]
    fn test_unknown_generator_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
sets:
  - name: a
    namespace: test
    bins:
      - name: x
        generator: { type: fibonacci }
"#,
        );
        assert!(matches!(result, Err(SchemaError::YamlError(_))));
    }
}
