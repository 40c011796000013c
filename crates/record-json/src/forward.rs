//! Forward conversion: BinValue / Record → JSON value.

use base64::Engine;
use record_core::{BinValue, KeyValue, Record};
use serde_json::{json, Map};

/// Wrapper for JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue(pub serde_json::Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<&BinValue> for JsonValue {
    fn from(value: &BinValue) -> Self {
        let json = match value {
            BinValue::Nil => serde_json::Value::Null,
            BinValue::Bool(b) => json!(*b),
            BinValue::Integer(i) => json!(*i),
            // Non-finite doubles have no JSON form and become null.
            BinValue::Double(f) => json!(*f),
            BinValue::String(s) => json!(s),
            BinValue::Bytes(b) => json!(encode_bytes(b)),
            BinValue::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| JsonValue::from(item).into_inner())
                    .collect(),
            ),
            BinValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), JsonValue::from(v).into_inner()))
                    .collect(),
            ),
            BinValue::GeoJson(s) => {
                serde_json::from_str::<serde_json::Value>(s).unwrap_or_else(|_| json!(s))
            }
        };
        JsonValue(json)
    }
}

impl From<BinValue> for JsonValue {
    fn from(value: BinValue) -> Self {
        JsonValue::from(&value)
    }
}

impl From<&KeyValue> for JsonValue {
    fn from(value: &KeyValue) -> Self {
        JsonValue(match value {
            KeyValue::Integer(i) => json!(*i),
            KeyValue::String(s) => json!(s),
            KeyValue::Bytes(b) => json!(encode_bytes(b)),
        })
    }
}

/// Render a record as a JSON object.
///
/// The object has the fields `namespace`, `set`, `key`, `ttl`, `generation`
/// and `bins`.
pub fn record_to_json(record: &Record) -> serde_json::Value {
    let bins: Map<String, serde_json::Value> = record
        .bins
        .iter()
        .map(|(name, value)| (name.clone(), JsonValue::from(value).into_inner()))
        .collect();

    json!({
        "namespace": record.key.namespace,
        "set": record.key.set,
        "key": JsonValue::from(&record.key.value).into_inner(),
        "ttl": record.metadata.ttl,
        "generation": record.metadata.generation,
        "bins": bins,
    })
}

fn encode_bytes(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
