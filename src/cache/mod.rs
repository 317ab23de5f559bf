//! Cache Module
//!
//! One named cache: entry storage, LRU ordering, clone policy and statistics.

mod entry;
mod lru;
mod options;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use options::{CacheOptions, CreateOptions, MemoHashFn, SharedOptions};
pub use stats::CacheStats;
pub use store::CacheStore;
