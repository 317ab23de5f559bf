//! Cache Options Module
//!
//! The live, shared options record of a cache and the partial form used when
//! creating one.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::memo::default_memo_hash;
use crate::value::Value;

/// Maps the arguments of a memoized call to the key its result is stored under.
pub type MemoHashFn = Arc<dyn Fn(&[Value]) -> String + Send + Sync>;

/// Options shared between a registered cache and every handle bound to it.
pub type SharedOptions = Arc<RwLock<CacheOptions>>;

// == Cache Options ==
/// Options in effect for one cache.
///
/// Changes made through a [`SharedOptions`] apply from the next operation on;
/// entries already stored are not re-evaluated.
#[derive(Clone)]
pub struct CacheOptions {
    /// Deep-copy values on the way in and on the way out
    pub clone_values: bool,
    /// Maximum number of entries, None = unbounded
    pub max_size: Option<NonZeroUsize>,
    /// Key function used by memoized wrappers
    pub memo_hash_function: MemoHashFn,
}

impl CacheOptions {
    /// Computes the memoization key for a call.
    pub fn hash_args(&self, args: &[Value]) -> String {
        (self.memo_hash_function)(args)
    }

    /// Wraps the options for sharing.
    pub fn into_shared(self) -> SharedOptions {
        Arc::new(RwLock::new(self))
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        CreateOptions::default().resolve(&Config::default())
    }
}

impl fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheOptions")
            .field("clone_values", &self.clone_values)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

// == Create Options ==
/// Options supplied when creating a cache; unset fields fall back to the
/// registry defaults.
///
/// ```
/// use memo_cache::CreateOptions;
///
/// let options = CreateOptions::new().clone_values(true).max_size(5);
/// ```
#[derive(Clone, Default)]
pub struct CreateOptions {
    clone_values: Option<bool>,
    max_size: Option<Option<NonZeroUsize>>,
    memo_hash_function: Option<MemoHashFn>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clone_values(mut self, clone_values: bool) -> Self {
        self.clone_values = Some(clone_values);
        self
    }

    /// Bounds the cache to `max_size` entries. Zero means unbounded.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(NonZeroUsize::new(max_size));
        self
    }

    /// Explicitly lifts any size bound, overriding the registry default.
    pub fn unbounded(mut self) -> Self {
        self.max_size = Some(None);
        self
    }

    pub fn memo_hash_function<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Value]) -> String + Send + Sync + 'static,
    {
        self.memo_hash_function = Some(Arc::new(f));
        self
    }

    // == Resolve ==
    /// Merges the explicitly set fields over the registry defaults.
    pub fn resolve(self, defaults: &Config) -> CacheOptions {
        CacheOptions {
            clone_values: self.clone_values.unwrap_or(defaults.clone_values),
            max_size: self.max_size.unwrap_or(defaults.max_size),
            memo_hash_function: self
                .memo_hash_function
                .unwrap_or_else(|| Arc::new(default_memo_hash) as MemoHashFn),
        }
    }
}

impl fmt::Debug for CreateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateOptions")
            .field("clone_values", &self.clone_values)
            .field("max_size", &self.max_size)
            .field("memo_hash_function", &self.memo_hash_function.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CacheOptions::default();
        assert!(!options.clone_values);
        assert!(options.max_size.is_none());
        assert_eq!(options.hash_args(&[]), "__noArgs");
        assert_eq!(options.hash_args(&[Value::from("test")]), "test");
    }

    #[test]
    fn test_explicit_fields_win() {
        let defaults = Config {
            clone_values: true,
            max_size: NonZeroUsize::new(10),
        };

        let options = CreateOptions::new().clone_values(false).resolve(&defaults);
        assert!(!options.clone_values);
        assert_eq!(options.max_size, NonZeroUsize::new(10));

        let options = CreateOptions::new().unbounded().resolve(&defaults);
        assert!(options.clone_values);
        assert!(options.max_size.is_none());

        let options = CreateOptions::new().max_size(0).resolve(&defaults);
        assert!(options.max_size.is_none());
    }

    #[test]
    fn test_custom_hash_function() {
        let options = CreateOptions::new()
            .memo_hash_function(|args| format!("{}", args.len()))
            .resolve(&Config::default());
        assert_eq!(options.hash_args(&[Value::Null, Value::Null]), "2");
    }

    #[test]
    fn test_shared_options_are_live() {
        let shared = CacheOptions::default().into_shared();
        let other = Arc::clone(&shared);

        other.write().max_size = NonZeroUsize::new(3);
        assert_eq!(shared.read().max_size, NonZeroUsize::new(3));
    }
}
