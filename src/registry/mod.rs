//! Registry Module
//!
//! The registry of named caches and the name-bound handles it hands out.

mod caches;
mod handle;

pub use caches::Registry;
pub use handle::CacheHandle;
