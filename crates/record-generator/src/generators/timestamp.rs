//! Timestamp generators.
//!
//! Timestamps are stored as integer milliseconds since the Unix epoch.

use super::ConfigError;
use chrono::DateTime;
use rand::Rng;
use record_core::BinValue;

/// Parse an RFC 3339 instant into epoch milliseconds.
pub fn parse_millis(value: &str) -> Result<i64, ConfigError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| ConfigError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Generate a random timestamp in the given range (inclusive).
pub fn generate_timestamp_range<R: Rng>(rng: &mut R, start: i64, end: i64) -> BinValue {
    BinValue::Integer(rng.random_range(start..=end))
}
