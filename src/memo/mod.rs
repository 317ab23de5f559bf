//! Memoization Module
//!
//! Wraps functions with a dedicated anonymous cache.

mod hash;
mod memoize;

pub use hash::{default_memo_hash, NO_ARGS_KEY};
pub use memoize::{memoize, Memoized};
