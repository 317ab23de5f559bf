//! Memo Cache demo
//!
//! Walks through the registry, handle and memoization APIs, logging each step.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_cache::{memoize, Config, CreateOptions, Registry, Value};

fn main() -> anyhow::Result<()> {
    // Defaults to "debug" for this crate, can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_cache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: clone_values={}, max_size={:?}",
        config.clone_values, config.max_size
    );
    let registry = Registry::from_config(&config);

    // Named cache, driven through both the handle and the registry
    let cache = registry
        .create("new_cache", CreateOptions::new().max_size(10))
        .context("creating new_cache")?;
    registry.set("new_cache", "test", 3)?;
    info!("registry get: {:?}", registry.get("new_cache", "test")?);
    info!("handle get: {:?}", cache.get("test")?);
    info!("cache size: {:?}, total size: {}", cache.size(), registry.total_size());
    registry.clear("new_cache");
    info!("after clear: {:?}", registry.get("new_cache", "test")?);

    // Bounded cache evicting its least recently used entry
    let lru = registry.create("lru", CreateOptions::new().max_size(2))?;
    lru.set("a", 1)?;
    lru.set("b", 2)?;
    lru.set("c", 3)?;
    info!(
        "lru: a={} b={} c={} size={:?}",
        lru.exists("a"),
        lru.exists("b"),
        lru.exists("c"),
        lru.size()
    );

    // Memoized function
    let to_text = memoize(
        &registry,
        |args: &[Value]| {
            info!("cache miss!");
            Value::from(args.first().map(Value::to_string).unwrap_or_default())
        },
        CreateOptions::new(),
    );
    info!("first call: {}", to_text.call1("test")?);
    info!("memo size: {}", to_text.size());
    info!("second call: {}", to_text.call1("test")?);
    to_text.call1("test2")?;
    info!("cleared: {}, size after clear: {}", to_text.clear(), to_text.size());

    if let Some(stats) = registry.stats("lru") {
        info!("lru stats: {}", serde_json::to_string(&stats)?);
    }
    info!("registered caches: {:?}", registry.cache_names());

    Ok(())
}
