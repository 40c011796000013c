//! Record factories.
//!
//! A [`RecordFactory`] turns a key and its metadata into the bins of a
//! fixture record. Two factories are provided:
//!
//! - [`constant`] returns the same literal bins for every call.
//! - [`record`] builds fresh bins on every call by invoking one
//!   [`BinGenerator`] per bin.
//!
//! Neither factory looks at the key or the metadata. They are accepted so
//! that every factory has the calling shape test harnesses expect, and both
//! parameters are fully generic so callers can pass whatever they key
//! records with (including `Option<Key>` or `()`).

use record_core::{BinValue, Bins, Key, Metadata};
use std::collections::HashMap;
use std::fmt;

/// Error raised while invoking a bin generator.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// Generator reported a failure
    #[error("Generator failed: {0}")]
    Failed(String),

    /// Generator failed with an underlying error
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl InvocationError {
    /// Create a failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Produces the value of one bin each time it is invoked.
///
/// Implemented for every `FnMut() -> Result<BinValue, InvocationError>`
/// closure. Use [`from_fn`] to adapt an infallible closure.
pub trait BinGenerator {
    /// Produce the next value.
    fn generate(&mut self) -> Result<BinValue, InvocationError>;
}

impl<F> BinGenerator for F
where
    F: FnMut() -> Result<BinValue, InvocationError>,
{
    fn generate(&mut self) -> Result<BinValue, InvocationError> {
        self()
    }
}

/// Adapt an infallible closure into a [`BinGenerator`].
///
/// ```rust
/// use record_generator::{from_fn, BinGenerator};
///
/// let mut counter = 0i64;
/// let mut next = from_fn(move || {
///     counter += 1;
///     counter
/// });
/// assert_eq!(next.generate().unwrap().as_i64(), Some(1));
/// assert_eq!(next.generate().unwrap().as_i64(), Some(2));
/// ```
pub fn from_fn<F, V>(mut f: F) -> impl BinGenerator
where
    F: FnMut() -> V,
    V: Into<BinValue>,
{
    move || -> Result<BinValue, InvocationError> { Ok(f().into()) }
}

/// Bin name to generator mapping consumed by [`record`].
#[derive(Default)]
pub struct BinGenerators {
    generators: HashMap<String, Box<dyn BinGenerator>>,
}

impl BinGenerators {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generator for a bin, builder style.
    pub fn with(mut self, name: impl Into<String>, generator: impl BinGenerator + 'static) -> Self {
        self.insert(name, generator);
        self
    }

    /// Add a generator for a bin, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        generator: impl BinGenerator + 'static,
    ) -> Option<Box<dyn BinGenerator>> {
        self.insert_boxed(name, Box::new(generator))
    }

    /// Add an already boxed generator for a bin.
    pub fn insert_boxed(
        &mut self,
        name: impl Into<String>,
        generator: Box<dyn BinGenerator>,
    ) -> Option<Box<dyn BinGenerator>> {
        self.generators.insert(name.into(), generator)
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether there are no bins.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Bin names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }
}

impl fmt::Debug for BinGenerators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.generators.keys()).finish()
    }
}

impl FromIterator<(String, Box<dyn BinGenerator>)> for BinGenerators {
    fn from_iter<I: IntoIterator<Item = (String, Box<dyn BinGenerator>)>>(iter: I) -> Self {
        Self {
            generators: iter.into_iter().collect(),
        }
    }
}

/// Produces record bins for a key and its metadata.
pub trait RecordFactory<K: ?Sized = Key, M: ?Sized = Metadata> {
    /// Produce the bins of one record.
    fn produce(&mut self, key: &K, metadata: &M) -> Result<Bins, InvocationError>;
}

impl<K, M, F> RecordFactory<K, M> for Box<F>
where
    K: ?Sized,
    M: ?Sized,
    F: RecordFactory<K, M> + ?Sized,
{
    fn produce(&mut self, key: &K, metadata: &M) -> Result<Bins, InvocationError> {
        (**self).produce(key, metadata)
    }
}

/// Factory returning the same bins for every record. See [`constant`].
///
/// The factory owns its bins and hands out a fresh copy on every call, so
/// mutating a produced mapping never leaks into later records. Use
/// [`ConstantRecord::bins`] to read the stored mapping without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantRecord {
    bins: Bins,
}

impl ConstantRecord {
    /// The bins returned by every call.
    pub fn bins(&self) -> &Bins {
        &self.bins
    }
}

impl<K: ?Sized, M: ?Sized> RecordFactory<K, M> for ConstantRecord {
    fn produce(&mut self, _key: &K, _metadata: &M) -> Result<Bins, InvocationError> {
        Ok(self.bins.clone())
    }
}

/// Factory invoking one generator per bin on every call. See [`record`].
#[derive(Debug)]
pub struct GeneratedRecord {
    generators: BinGenerators,
}

impl GeneratedRecord {
    /// Names of the generated bins, in no particular order.
    pub fn bin_names(&self) -> impl Iterator<Item = &str> {
        self.generators.names()
    }
}

impl<K: ?Sized, M: ?Sized> RecordFactory<K, M> for GeneratedRecord {
    fn produce(&mut self, _key: &K, _metadata: &M) -> Result<Bins, InvocationError> {
        // Collecting into a Result stops at the first failure, so a failing
        // generator never yields a partial record.
        self.generators
            .generators
            .iter_mut()
            .map(|(name, generator)| generator.generate().map(|value| (name.clone(), value)))
            .collect()
    }
}

/// Create a factory that returns `bins` unchanged for any key and metadata.
///
/// ```rust
/// use record_core::{BinValue, Bins, Key, Metadata};
/// use record_generator::{constant, RecordFactory};
///
/// let bins = Bins::from([("a".to_string(), BinValue::Integer(1))]);
/// let mut factory = constant(bins.clone());
/// let key = Key::new("test", "demo", 1).unwrap();
/// assert_eq!(factory.produce(&key, &Metadata::default()).unwrap(), bins);
/// ```
pub fn constant(bins: Bins) -> ConstantRecord {
    ConstantRecord { bins }
}

/// Create a factory that builds every record by calling each generator once.
///
/// ```rust
/// use record_core::{Key, Metadata};
/// use record_generator::{from_fn, record, BinGenerators, RecordFactory};
///
/// let mut factory = record(
///     BinGenerators::new()
///         .with("a", from_fn(|| 1i64))
///         .with("b", from_fn(|| "two")),
/// );
/// let key = Key::new("test", "demo", 1).unwrap();
/// let bins = factory.produce(&key, &Metadata::default()).unwrap();
/// assert_eq!(bins["a"].as_i64(), Some(1));
/// assert_eq!(bins["b"].as_str(), Some("two"));
/// ```
pub fn record(bins: BinGenerators) -> GeneratedRecord {
    GeneratedRecord { generators: bins }
}
