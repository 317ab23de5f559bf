//! Memoized function wrapper.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{CreateOptions, SharedOptions};
use crate::error::Result;
use crate::registry::{CacheHandle, Registry};
use crate::value::Value;

/// Wraps `f` with a dedicated anonymous cache in `registry`.
///
/// ```
/// use memo_cache::{memoize, CreateOptions, Registry, Value};
///
/// let registry = Registry::new();
/// let square = memoize(
///     &registry,
///     |args: &[Value]| Value::from(args[0].as_f64().unwrap_or(0.0).powi(2)),
///     CreateOptions::new(),
/// );
///
/// assert_eq!(*square.call1(3).unwrap(), Value::from(9));
/// assert_eq!(square.size(), 1);
/// ```
pub fn memoize<F>(registry: &Registry, f: F, options: CreateOptions) -> Memoized<F>
where
    F: Fn(&[Value]) -> Value,
{
    registry.memoize(f, options)
}

// == Memoized ==
/// A function whose results are cached by argument hash.
///
/// `f` runs at most once per distinct hash key until that key is cleared or
/// evicted. The backing cache takes part in LRU eviction like any other, so
/// `max_size` bounds how many results are retained.
pub struct Memoized<F> {
    cache: CacheHandle,
    f: F,
}

impl<F> Memoized<F>
where
    F: Fn(&[Value]) -> Value,
{
    pub(crate) fn new(cache: CacheHandle, f: F) -> Self {
        Self { cache, f }
    }

    // == Call ==
    /// Returns the cached result for `args`, computing it on a miss.
    ///
    /// `f` runs without the registry lock held, so it may use the registry
    /// itself. A call whose hash key is empty is computed but not cached.
    pub fn call(&self, args: &[Value]) -> Result<Arc<Value>> {
        let key = self.hash_key(args);

        if key.is_empty() {
            return Ok(Arc::new((self.f)(args)));
        }

        if let Some(cached) = self.cache.get(&key)? {
            trace!(cache = self.cache.name(), key = %key, "memoized hit");
            return Ok(cached);
        }

        debug!(cache = self.cache.name(), key = %key, "memoized miss, computing");
        let result = (self.f)(args);
        // Memo caches are never unregistered and the key is non-empty, so the
        // write always lands
        Ok(self.cache.set(&key, result)?.unwrap_or_default())
    }

    /// Shorthand for a single-argument call.
    pub fn call1(&self, arg: impl Into<Value>) -> Result<Arc<Value>> {
        self.call(&[arg.into()])
    }

    /// Drops every memoized result.
    pub fn clear(&self) -> bool {
        self.cache.clear()
    }

    /// Number of memoized results currently held.
    pub fn size(&self) -> usize {
        self.cache.size().unwrap_or(0)
    }

    /// Live options of the backing cache.
    pub fn options(&self) -> Option<SharedOptions> {
        self.cache.options()
    }

    fn hash_key(&self, args: &[Value]) -> String {
        match self.cache.options() {
            Some(options) => {
                let hash = Arc::clone(&options.read().memo_hash_function);
                hash(args)
            }
            None => crate::memo::default_memo_hash(args),
        }
    }
}

impl<F> fmt::Debug for Memoized<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cache", &self.cache.name())
            .finish_non_exhaustive()
    }
}
