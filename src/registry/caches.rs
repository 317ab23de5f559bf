//! Cache Registry
//!
//! Owns every named cache and mediates all name-qualified operations.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, CreateOptions, SharedOptions};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::memo::Memoized;
use crate::registry::CacheHandle;
use crate::value::Value;

/// Prefix of the internal names given to memoization caches.
const ANONYMOUS_PREFIX: &str = "__memo_";

#[derive(Debug, Default)]
struct RegistryState {
    /// Registered caches by name
    caches: HashMap<String, CacheStore>,
    /// Defaults merged under every `CreateOptions`
    config: Config,
    /// Counter for anonymous cache names
    next_anonymous: u64,
}

// == Registry ==
/// The registry of named caches.
///
/// Cloning a `Registry` yields another handle to the same caches. Every
/// operation runs under one lock covering all caches, so cross-cache reads
/// such as [`Registry::total_size`] see a consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    state: Arc<Mutex<RegistryState>>,
}

impl Registry {
    // == Constructors ==
    /// Creates an empty registry using the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose caches default to the given config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState {
                config: config.clone(),
                ..RegistryState::default()
            })),
        }
    }

    /// Returns the registry-wide defaults.
    pub fn config(&self) -> Config {
        self.state.lock().config.clone()
    }

    // == Create ==
    /// Creates (or recreates) the cache `name` and returns a handle bound to it.
    ///
    /// An existing cache with the same name is replaced: its entries and
    /// options are discarded.
    pub fn create(&self, name: &str, options: CreateOptions) -> Result<CacheHandle> {
        if name.is_empty() {
            return Err(CacheError::InvalidArgument(
                "cache name cannot be empty".to_string(),
            ));
        }

        let mut state = self.state.lock();
        let resolved = options.resolve(&state.config);
        debug!(
            cache = name,
            clone_values = resolved.clone_values,
            max_size = ?resolved.max_size,
            "creating cache"
        );
        if state
            .caches
            .insert(name.to_string(), CacheStore::new(name, resolved))
            .is_some()
        {
            debug!(cache = name, "replaced existing cache");
        }

        Ok(CacheHandle::new(self.clone(), name))
    }

    /// Creates a cache under a fresh internal name.
    pub(crate) fn create_anonymous(&self, options: CreateOptions) -> CacheHandle {
        let mut state = self.state.lock();
        let name = loop {
            let candidate = format!("{}{}", ANONYMOUS_PREFIX, state.next_anonymous);
            state.next_anonymous += 1;
            if !state.caches.contains_key(&candidate) {
                break candidate;
            }
        };

        let resolved = options.resolve(&state.config);
        debug!(cache = %name, max_size = ?resolved.max_size, "creating memoization cache");
        state
            .caches
            .insert(name.clone(), CacheStore::new(name.as_str(), resolved));

        CacheHandle::new(self.clone(), name)
    }

    /// Returns a handle to an already registered cache.
    pub fn handle(&self, name: &str) -> Option<CacheHandle> {
        self.state
            .lock()
            .caches
            .contains_key(name)
            .then(|| CacheHandle::new(self.clone(), name))
    }

    // == Memoize ==
    /// Wraps `f` with a dedicated anonymous cache. See [`Memoized`].
    pub fn memoize<F>(&self, f: F, options: CreateOptions) -> Memoized<F>
    where
        F: Fn(&[Value]) -> Value,
    {
        Memoized::new(self.create_anonymous(options), f)
    }

    // == Entry Operations ==
    /// Stores `value` under `key` in cache `name`.
    ///
    /// Returns `Ok(None)` if the cache is unknown or `key` is empty, and
    /// otherwise the value as handed back by the clone policy.
    pub fn set(&self, name: &str, key: &str, value: impl Into<Value>) -> Result<Option<Arc<Value>>> {
        let value = value.into();
        self.with_cache(name, |cache| cache.set(key, value))
            .unwrap_or(Ok(None))
    }

    /// Retrieves the value under `key`, refreshing its LRU position.
    pub fn get(&self, name: &str, key: &str) -> Result<Option<Arc<Value>>> {
        self.with_cache(name, |cache| cache.get(key))
            .unwrap_or(Ok(None))
    }

    /// Checks for a key without refreshing its LRU position.
    pub fn exists(&self, name: &str, key: &str) -> bool {
        self.with_cache(name, |cache| cache.exists(key))
            .unwrap_or(false)
    }

    /// Deletes the entry under `key` and returns its stored value.
    pub fn remove(&self, name: &str, key: &str) -> Option<Arc<Value>> {
        self.with_cache(name, |cache| cache.remove(key)).flatten()
    }

    /// Empties cache `name`, keeping its options. Returns false if unknown.
    pub fn clear(&self, name: &str) -> bool {
        self.with_cache(name, CacheStore::clear).is_some()
    }

    /// Returns every entry of cache `name`, ordered by key.
    pub fn get_all(&self, name: &str) -> Result<Option<BTreeMap<String, Arc<Value>>>> {
        self.with_cache(name, |cache| cache.get_all())
            .transpose()
    }

    // == Size ==
    /// Returns the number of entries in cache `name`.
    pub fn size(&self, name: &str) -> Option<usize> {
        self.with_cache(name, |cache| cache.len())
    }

    /// Returns the number of entries across every registered cache,
    /// memoization caches included.
    pub fn total_size(&self) -> usize {
        self.state.lock().caches.values().map(CacheStore::len).sum()
    }

    // == Introspection ==
    /// Returns the live options of cache `name`.
    pub fn options(&self, name: &str) -> Option<SharedOptions> {
        self.with_cache(name, |cache| cache.options())
    }

    pub fn stats(&self, name: &str) -> Option<CacheStats> {
        self.with_cache(name, |cache| cache.stats())
    }

    /// Lists registered cache names in sorted order.
    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.lock().caches.keys().cloned().collect();
        names.sort();
        names
    }

    fn with_cache<R>(&self, name: &str, f: impl FnOnce(&mut CacheStore) -> R) -> Option<R> {
        let mut state = self.state.lock();
        state.caches.get_mut(name).map(f)
    }
}
