//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access stamps.

use std::sync::Arc;

use crate::value::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: Arc<Value>,
    /// Logical time of the last `get` or `set` touching this entry
    pub last_access: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given logical time.
    pub fn new(value: Arc<Value>, stamp: u64) -> Self {
        Self {
            value,
            last_access: stamp,
        }
    }

    // == Touch ==
    /// Records an access at the given logical time.
    pub fn touch(&mut self, stamp: u64) {
        self.last_access = stamp;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(Arc::new(Value::from("test_value")), 7);

        assert_eq!(*entry.value, Value::from("test_value"));
        assert_eq!(entry.last_access, 7);
    }

    #[test]
    fn test_entry_touch() {
        let mut entry = CacheEntry::new(Arc::new(Value::Null), 1);
        entry.touch(42);
        assert_eq!(entry.last_access, 42);
    }
}
