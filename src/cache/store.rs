//! Cache Store Module
//!
//! One named cache: HashMap storage with LRU tracking, the clone policy and
//! bounded-size eviction.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheEntry, CacheOptions, CacheStats, LruTracker, SharedOptions};
use crate::error::Result;
use crate::value::Value;

// == Cache Store ==
/// Storage for a single named cache.
#[derive(Debug)]
pub struct CacheStore {
    /// Name the cache is registered under
    name: String,
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Per-cache statistics
    stats: CacheStats,
    /// Live options, shared with handles
    options: SharedOptions,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty cache with the given options.
    pub fn new(name: impl Into<String>, options: CacheOptions) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            options: options.into_shared(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the live options record.
    pub fn options(&self) -> SharedOptions {
        Arc::clone(&self.options)
    }

    // == Set ==
    /// Stores a value under `key` and returns the value handed back to the caller.
    ///
    /// Returns `Ok(None)` without touching the cache if `key` is empty. When
    /// `max_size` is set and the cache holds at least that many entries, exactly
    /// one least recently used entry is removed before the write, even if
    /// `key` is already present.
    pub fn set(&mut self, key: &str, value: Value) -> Result<Option<Arc<Value>>> {
        if key.is_empty() {
            return Ok(None);
        }

        let (clone_values, max_size) = {
            let options = self.options.read();
            (options.clone_values, options.max_size)
        };

        // Clone before evicting so a failed copy leaves the cache untouched
        let (stored, returned) = if clone_values {
            let stored = Arc::new(value.deep_clone()?);
            let returned = Arc::new(stored.deep_clone()?);
            (stored, returned)
        } else {
            let stored = Arc::new(value);
            (Arc::clone(&stored), stored)
        };

        if let Some(max) = max_size {
            if self.entries.len() >= max.get() {
                self.evict_lru();
            }
        }

        let stamp = self.lru.touch(key);
        self.entries
            .insert(key.to_string(), CacheEntry::new(stored, stamp));
        self.stats.set_total_entries(self.entries.len());

        Ok(Some(returned))
    }

    // == Get ==
    /// Retrieves a value by key, refreshing its position in the LRU order.
    ///
    /// Returns `Ok(None)` if `key` is empty or missing.
    pub fn get(&mut self, key: &str) -> Result<Option<Arc<Value>>> {
        if key.is_empty() {
            return Ok(None);
        }

        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return Ok(None);
        };

        let value = self.hand_out(&entry.value)?;
        let stamp = self.lru.touch(key);
        if let Some(entry) = self.entries.get_mut(key) {
            entry.touch(stamp);
        }
        self.stats.record_hit();

        Ok(Some(value))
    }

    // == Exists ==
    /// Checks for a key without affecting the LRU order.
    pub fn exists(&self, key: &str) -> bool {
        !key.is_empty() && self.entries.contains_key(key)
    }

    // == Remove ==
    /// Deletes an entry and returns the stored value.
    pub fn remove(&mut self, key: &str) -> Option<Arc<Value>> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.stats.set_total_entries(self.entries.len());
        Some(entry.value)
    }

    // == Clear ==
    /// Removes every entry; options and statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        debug!(cache = %self.name, "cache cleared");
    }

    // == Get All ==
    /// Returns every entry ordered by key, without refreshing access order.
    pub fn get_all(&self) -> Result<BTreeMap<String, Arc<Value>>> {
        self.entries
            .iter()
            .map(|(key, entry)| Ok((key.clone(), self.hand_out(&entry.value)?)))
            .collect()
    }

    /// Returns the logical time of the last access to `key`.
    pub fn last_access(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.last_access)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies a stored value if the clone policy asks for it.
    fn hand_out(&self, stored: &Arc<Value>) -> Result<Arc<Value>> {
        if self.options.read().clone_values {
            Ok(Arc::new(stored.deep_clone()?))
        } else {
            Ok(Arc::clone(stored))
        }
    }

    // == Evict ==
    /// Removes the least recently used entry.
    fn evict_lru(&mut self) {
        let Some(key) = self.lru.peek_oldest().cloned() else {
            return;
        };
        if self.remove(&key).is_some() {
            self.stats.record_eviction();
            debug!(cache = %self.name, key = %key, "evicted least recently used entry");
        }
    }
}
