//! Error types for the cache registry
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses, unknown cache names and empty keys are not errors: they come
//! back as `None` so call sites can treat them as ordinary data flow.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Missing or malformed argument (e.g. empty cache name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value could not be deep-copied
    #[error("Value cannot be cloned: {0}")]
    CloneError(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache registry.
pub type Result<T> = std::result::Result<T, CacheError>;
