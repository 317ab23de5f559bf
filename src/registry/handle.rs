//! Cache Handle
//!
//! A name-bound view over one registered cache.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cache::{CacheStats, SharedOptions};
use crate::error::Result;
use crate::registry::Registry;
use crate::value::Value;

// == Cache Handle ==
/// Forwards every call to the [`Registry`] with the cache name pre-bound.
///
/// A handle owns no cache state: whatever it changes is visible through the
/// registry's name-qualified calls and the other way around.
#[derive(Debug, Clone)]
pub struct CacheHandle {
    registry: Registry,
    name: String,
}

impl CacheHandle {
    pub(crate) fn new(registry: Registry, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    /// Name of the cache this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<Option<Arc<Value>>> {
        self.registry.set(&self.name, key, value)
    }

    pub fn get(&self, key: &str) -> Result<Option<Arc<Value>>> {
        self.registry.get(&self.name, key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.registry.exists(&self.name, key)
    }

    pub fn remove(&self, key: &str) -> Option<Arc<Value>> {
        self.registry.remove(&self.name, key)
    }

    pub fn clear(&self) -> bool {
        self.registry.clear(&self.name)
    }

    pub fn get_all(&self) -> Result<Option<BTreeMap<String, Arc<Value>>>> {
        self.registry.get_all(&self.name)
    }

    pub fn size(&self) -> Option<usize> {
        self.registry.size(&self.name)
    }

    pub fn options(&self) -> Option<SharedOptions> {
        self.registry.options(&self.name)
    }

    pub fn stats(&self) -> Option<CacheStats> {
        self.registry.stats(&self.name)
    }
}
