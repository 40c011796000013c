//! Value representations for bins and records.
//!
//! `BinValue` is the closed value domain of a bin. `Record` bundles the
//! generated bins with the key and metadata they were produced for.

use crate::key::{Key, Metadata};
use std::collections::HashMap;

/// Mapping from bin name to value.
pub type Bins = HashMap<String, BinValue>;

/// Value stored in a single bin.
#[derive(Debug, Clone, PartialEq)]
pub enum BinValue {
    /// Absent value
    Nil,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Double(f64),

    /// UTF-8 string
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Ordered list of values
    List(Vec<BinValue>),

    /// Map with string keys
    Map(HashMap<String, BinValue>),

    /// GeoJSON document, kept as its text form
    GeoJson(String),
}

impl BinValue {
    /// Create a GeoJSON value.
    pub fn geojson(value: impl Into<String>) -> Self {
        Self::GeoJson(value.into())
    }

    /// Check if this value is nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    ///
    /// GeoJSON values are returned as their text form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::GeoJson(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&Vec<BinValue>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a map.
    pub fn as_map(&self) -> Option<&HashMap<String, BinValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::GeoJson(_) => "geojson",
        }
    }
}

impl From<bool> for BinValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for BinValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i64> for BinValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for BinValue {
    fn from(value: u32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for BinValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for BinValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for BinValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for BinValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<BinValue>> for BinValue {
    fn from(value: Vec<BinValue>) -> Self {
        Self::List(value)
    }
}

impl From<HashMap<String, BinValue>> for BinValue {
    fn from(value: HashMap<String, BinValue>) -> Self {
        Self::Map(value)
    }
}

/// A generated fixture record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Key the record was generated for
    pub key: Key,

    /// TTL and generation passed to the factory
    pub metadata: Metadata,

    /// Generated bins
    pub bins: Bins,
}

impl Record {
    /// Create a new record.
    pub fn new(key: Key, metadata: Metadata, bins: Bins) -> Self {
        Self {
            key,
            metadata,
            bins,
        }
    }

    /// Get a bin value by name.
    pub fn get_bin(&self, name: &str) -> Option<&BinValue> {
        self.bins.get(name)
    }

    /// Get the number of bins.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_value_accessors() {
        assert_eq!(BinValue::Bool(true).as_bool(), Some(true));
        assert_eq!(BinValue::Integer(42).as_i64(), Some(42));
        assert_eq!(BinValue::Double(3.15).as_f64(), Some(3.15));
        assert_eq!(BinValue::from("test").as_str(), Some("test"));
        assert_eq!(BinValue::from(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert!(BinValue::Nil.is_nil());

        // No implicit cross-type conversions
        assert_eq!(BinValue::Double(1.0).as_i64(), None);
        assert_eq!(BinValue::Bool(true).as_i64(), None);
    }

    #[test]
    fn test_geojson_reads_as_str() {
        let point = BinValue::geojson(r#"{"type":"Point","coordinates":[0,0]}"#);
        assert!(point.as_str().unwrap().contains("Point"));
        assert_eq!(point.type_name(), "geojson");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(BinValue::from(7i32), BinValue::Integer(7));
        assert_eq!(BinValue::from(7u32), BinValue::Integer(7));
        assert_eq!(
            BinValue::from(vec![BinValue::from(1i64), BinValue::Nil]),
            BinValue::List(vec![BinValue::Integer(1), BinValue::Nil])
        );

        let map: HashMap<String, BinValue> = HashMap::from([("a".to_string(), 1i64.into())]);
        assert_eq!(
            BinValue::from(map).as_map().unwrap().get("a"),
            Some(&BinValue::Integer(1))
        );
    }

    #[test]
    fn test_record_accessors() {
        let key = Key::new("test", "users", 1).unwrap();
        let bins = Bins::from([
            ("name".to_string(), BinValue::from("Alice")),
            ("age".to_string(), BinValue::from(30i64)),
        ]);
        let record = Record::new(key, Metadata::default(), bins);

        assert_eq!(record.bin_count(), 2);
        assert_eq!(record.get_bin("name"), Some(&BinValue::from("Alice")));
        assert_eq!(record.get_bin("missing"), None);
    }
}
