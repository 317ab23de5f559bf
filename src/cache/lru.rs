//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch draws a fresh stamp from a monotonically increasing logical
/// clock, so two keys never share a stamp and the oldest key is always
/// unambiguous:
/// - `order` maps stamp -> key (first entry = least recently used)
/// - `stamps` maps key -> its current stamp
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Keys ordered by access stamp
    order: BTreeMap<u64, String>,
    /// Current stamp of each tracked key
    stamps: HashMap<String, u64>,
    /// Last stamp handed out
    clock: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used and returns its new stamp.
    pub fn touch(&mut self, key: &str) -> u64 {
        self.clock += 1;
        let stamp = self.clock;

        match self.stamps.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = stamp;
                self.order.insert(stamp, key.to_string());
            }
            None => {
                self.stamps.insert(key.to_string(), stamp);
                self.order.insert(stamp, key.to_string());
            }
        }

        stamp
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(stamp) = self.stamps.remove(key) {
            self.order.remove(&stamp);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.stamps.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.values().next()
    }

    /// Returns the current stamp of a key.
    pub fn stamp(&self, key: &str) -> Option<u64> {
        self.stamps.get(key).copied()
    }

    // == Clear ==
    /// Forgets every key. The clock keeps running.
    pub fn clear(&mut self) {
        self.order.clear();
        self.stamps.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.stamps.contains_key(key)
    }
}
