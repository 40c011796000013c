//! Record addressing and per-record metadata.

use crate::values::BinValue;
use std::fmt;

/// Maximum namespace length in bytes (exclusive).
pub const NAMESPACE_MAX_LEN: usize = 32;

/// Maximum set name length in bytes (exclusive).
pub const SET_MAX_LEN: usize = 64;

/// The record adopts the namespace's default TTL.
pub const TTL_NAMESPACE_DEFAULT: u32 = 0;

/// The record never expires.
pub const TTL_NEVER_EXPIRE: u32 = 0xFFFF_FFFF;

/// The record keeps its current TTL when updated.
pub const TTL_DONT_UPDATE: u32 = 0xFFFF_FFFE;

/// Error type for key construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyError {
    /// Namespace is empty
    #[error("Namespace must not be empty")]
    EmptyNamespace,

    /// Namespace is too long
    #[error("Namespace '{0}' must be shorter than {max} bytes", max = NAMESPACE_MAX_LEN)]
    NamespaceTooLong(String),

    /// Set name is too long
    #[error("Set '{0}' must be shorter than {max} bytes", max = SET_MAX_LEN)]
    SetTooLong(String),

    /// Value cannot be used as a user key
    #[error("A {0} value cannot be used as a record key")]
    UnsupportedKeyValue(&'static str),
}

/// User-supplied part of a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
    Integer(i64),
    String(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Bytes(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i32> for KeyValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i64> for KeyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for KeyValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl TryFrom<BinValue> for KeyValue {
    type Error = KeyError;

    fn try_from(value: BinValue) -> Result<Self, Self::Error> {
        match value {
            BinValue::Integer(i) => Ok(Self::Integer(i)),
            BinValue::String(s) => Ok(Self::String(s)),
            BinValue::Bytes(b) => Ok(Self::Bytes(b)),
            other => Err(KeyError::UnsupportedKeyValue(other.type_name())),
        }
    }
}

impl From<KeyValue> for BinValue {
    fn from(value: KeyValue) -> Self {
        match value {
            KeyValue::Integer(i) => BinValue::Integer(i),
            KeyValue::String(s) => BinValue::String(s),
            KeyValue::Bytes(b) => BinValue::Bytes(b),
        }
    }
}

/// Locates a record: namespace, set and user key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub namespace: String,
    pub set: String,
    pub value: KeyValue,
}

impl Key {
    /// Create a new key, validating namespace and set lengths.
    pub fn new(
        namespace: impl Into<String>,
        set: impl Into<String>,
        value: impl Into<KeyValue>,
    ) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let set = set.into();

        if namespace.is_empty() {
            return Err(KeyError::EmptyNamespace);
        }
        if namespace.len() >= NAMESPACE_MAX_LEN {
            return Err(KeyError::NamespaceTooLong(namespace));
        }
        if set.len() >= SET_MAX_LEN {
            return Err(KeyError::SetTooLong(set));
        }

        Ok(Self {
            namespace,
            set,
            value: value.into(),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.set, self.value)
    }
}

/// Record-level metadata.
///
/// `ttl` is in seconds and accepts the special values
/// [`TTL_NAMESPACE_DEFAULT`], [`TTL_NEVER_EXPIRE`] and [`TTL_DONT_UPDATE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metadata {
    pub ttl: u32,
    pub generation: u16,
}

impl Metadata {
    /// Create metadata with the given TTL and generation.
    pub fn new(ttl: u32, generation: u16) -> Self {
        Self { ttl, generation }
    }

    /// Create metadata with the given TTL and generation 0.
    pub fn with_ttl(ttl: u32) -> Self {
        Self::new(ttl, 0)
    }

    /// Metadata for a record that never expires.
    pub fn never_expire() -> Self {
        Self::with_ttl(TTL_NEVER_EXPIRE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_new() {
        let key = Key::new("test", "users", "alice").unwrap();
        assert_eq!(key.namespace, "test");
        assert_eq!(key.set, "users");
        assert_eq!(key.value, KeyValue::String("alice".to_string()));
        assert_eq!(key.to_string(), "test:users:alice");
    }

    #[test]
    fn test_key_allows_empty_set() {
        let key = Key::new("test", "", 1).unwrap();
        assert_eq!(key.set, "");
    }

    #[test]
    fn test_key_validation() {
        assert_eq!(Key::new("", "users", 1), Err(KeyError::EmptyNamespace));

        let long_ns = "n".repeat(NAMESPACE_MAX_LEN);
        assert!(matches!(
            Key::new(long_ns, "users", 1),
            Err(KeyError::NamespaceTooLong(_))
        ));
        assert!(Key::new("n".repeat(NAMESPACE_MAX_LEN - 1), "users", 1).is_ok());

        let long_set = "s".repeat(SET_MAX_LEN);
        assert!(matches!(
            Key::new("test", long_set, 1),
            Err(KeyError::SetTooLong(_))
        ));
    }

    #[test]
    fn test_key_value_from_bin_value() {
        assert_eq!(
            KeyValue::try_from(BinValue::Integer(5)),
            Ok(KeyValue::Integer(5))
        );
        assert_eq!(
            KeyValue::try_from(BinValue::Bytes(vec![0xab, 0x01])).map(|k| k.to_string()),
            Ok("ab01".to_string())
        );
        assert_eq!(
            KeyValue::try_from(BinValue::Double(1.5)),
            Err(KeyError::UnsupportedKeyValue("double"))
        );
    }

    #[test]
    fn test_metadata_constructors() {
        assert_eq!(Metadata::default().ttl, TTL_NAMESPACE_DEFAULT);
        assert_eq!(Metadata::never_expire().ttl, TTL_NEVER_EXPIRE);
        assert_eq!(Metadata::new(TTL_DONT_UPDATE, 3).generation, 3);
    }
}
