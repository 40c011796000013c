//! JSON rendering for bin-fixtures records.
//!
//! This crate converts [`BinValue`](record_core::BinValue) and
//! [`Record`](record_core::Record) into `serde_json::Value`, the format
//! written by the `bin-fixtures generate` command.
//!
//! # Conversions
//!
//! - nil → `null`
//! - bytes → standard base64 string
//! - GeoJSON → parsed JSON object (the raw string when it is not valid JSON)
//! - list / map → array / object
//!
//! # Example
//!
//! ```rust
//! use record_core::BinValue;
//! use record_json::JsonValue;
//!
//! let json = JsonValue::from(&BinValue::Bytes(vec![1, 2, 3]));
//! assert_eq!(json.into_inner(), serde_json::json!("AQID"));
//! ```

mod forward;

pub use forward::{record_to_json, JsonValue};
