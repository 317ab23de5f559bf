//! Memo Cache - named in-memory caches and function memoization
//!
//! A [`Registry`] owns any number of named caches. Each cache can deep-copy
//! its values and can be bounded in size, in which case the least recently
//! used entry is evicted on write. [`memoize`] wraps a function with a
//! dedicated anonymous cache.
//!
//! ```
//! use memo_cache::{CreateOptions, Registry};
//!
//! let registry = Registry::new();
//! let cache = registry.create("c", CreateOptions::new().max_size(2)).unwrap();
//!
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! cache.set("c", 3).unwrap();
//!
//! assert!(!cache.exists("a"));
//! assert_eq!(cache.size(), Some(2));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod memo;
pub mod registry;
pub mod value;

pub use cache::{CacheOptions, CacheStats, CreateOptions, SharedOptions};
pub use config::Config;
pub use error::{CacheError, Result};
pub use memo::{memoize, Memoized};
pub use registry::{CacheHandle, Registry};
pub use value::{Callable, Value};
