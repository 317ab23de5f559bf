//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the size bound, LRU order, clone policy and clear.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::{CacheStore, CreateOptions};
use crate::config::Config;
use crate::value::Value;

// == Strategies ==
/// Generates valid cache keys (non-empty)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}".prop_map(|s| s)
}

/// Generates plain (callable-free) values up to a small depth
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

fn store(options: CreateOptions) -> CacheStore {
    CacheStore::new("prop", options.resolve(&Config::default()))
}

/// Deduplicates keys, keeping first-seen order
fn unique(keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Size bound: after any sequence of operations the cache never holds
    // more than max_size entries.
    #[test]
    fn prop_capacity_enforcement(
        max_size in 1usize..20,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut store = store(CreateOptions::new().max_size(max_size));

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(&key, value).unwrap();
                }
                CacheOp::Get { key } => {
                    store.get(&key).unwrap();
                }
                CacheOp::Remove { key } => {
                    store.remove(&key);
                }
            }
            prop_assert!(
                store.len() <= max_size,
                "Cache size {} exceeds max {}",
                store.len(),
                max_size
            );
        }
    }

    // LRU order: filling to capacity and inserting one more key evicts the
    // first key inserted.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::vec(valid_key_strategy(), 2..10),
        new_key in valid_key_strategy()
    ) {
        let keys = unique(keys);
        prop_assume!(keys.len() >= 2);
        prop_assume!(!keys.contains(&new_key));

        let mut store = store(CreateOptions::new().max_size(keys.len()));
        for key in &keys {
            store.set(key, Value::from(key.as_str())).unwrap();
        }

        store.set(&new_key, Value::from(0)).unwrap();

        prop_assert_eq!(store.len(), keys.len());
        prop_assert!(!store.exists(&keys[0]), "Oldest key should have been evicted");
        prop_assert!(store.exists(&new_key));
        for key in keys.iter().skip(1) {
            prop_assert!(store.exists(key), "Key '{}' should still exist", key);
        }
    }

    // LRU access tracking: a get refreshes the oldest key so the next-oldest
    // untouched key is evicted instead.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::vec(valid_key_strategy(), 3..8),
        new_key in valid_key_strategy()
    ) {
        let keys = unique(keys);
        prop_assume!(keys.len() >= 3);
        prop_assume!(!keys.contains(&new_key));

        let mut store = store(CreateOptions::new().max_size(keys.len()));
        for key in &keys {
            store.set(key, Value::from(key.as_str())).unwrap();
        }

        store.get(&keys[0]).unwrap();
        store.set(&new_key, Value::from(0)).unwrap();

        prop_assert!(store.exists(&keys[0]), "Accessed key should survive");
        prop_assert!(!store.exists(&keys[1]), "Next-oldest key should be evicted");
    }

    // Round trip without cloning hands back the very value stored.
    #[test]
    fn prop_roundtrip_without_clone(key in valid_key_strategy(), value in value_strategy()) {
        let mut store = store(CreateOptions::new());

        let returned = store.set(&key, value.clone()).unwrap().unwrap();
        let fetched = store.get(&key).unwrap().unwrap();

        prop_assert_eq!(&*fetched, &value);
        prop_assert!(Arc::ptr_eq(&returned, &fetched));
    }

    // Round trip with cloning returns equal but independent copies.
    #[test]
    fn prop_roundtrip_with_clone(key in valid_key_strategy(), value in value_strategy()) {
        let mut store = store(CreateOptions::new().clone_values(true));

        let mut returned = store.set(&key, value.clone()).unwrap().unwrap();
        *Arc::make_mut(&mut returned) = Value::from("mutated");

        let fetched = store.get(&key).unwrap().unwrap();
        prop_assert_eq!(&*fetched, &value);
    }

    // Clearing twice leaves an empty cache both times.
    #[test]
    fn prop_clear_idempotent(
        entries in prop::collection::vec((valid_key_strategy(), value_strategy()), 0..30)
    ) {
        let mut store = store(CreateOptions::new());
        for (key, value) in entries {
            store.set(&key, value).unwrap();
        }

        store.clear();
        prop_assert_eq!(store.len(), 0);
        store.clear();
        prop_assert_eq!(store.len(), 0);
    }
}
