//! Configuration Module
//!
//! Handles loading registry-wide cache defaults from environment variables.

use std::env;
use std::num::NonZeroUsize;

/// Registry-wide defaults applied to every cache created without explicit options.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether values are deep-copied on the way in and out of a cache
    pub clone_values: bool,
    /// Maximum number of entries per cache, None = unbounded
    pub max_size: Option<NonZeroUsize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_CLONE_VALUES` - `true`/`false`/`1`/`0` (default: false)
    /// - `MEMO_CACHE_MAX_SIZE` - Positive entry limit (default: unbounded)
    pub fn from_env() -> Self {
        Self {
            clone_values: env::var("MEMO_CACHE_CLONE_VALUES")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            max_size: env::var("MEMO_CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.trim().parse::<usize>().ok())
                .and_then(NonZeroUsize::new),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.clone_values);
        assert!(config.max_size.is_none());
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("MEMO_CACHE_CLONE_VALUES", "true");
        env::set_var("MEMO_CACHE_MAX_SIZE", "25");
        let config = Config::from_env();
        assert!(config.clone_values);
        assert_eq!(config.max_size, NonZeroUsize::new(25));

        // Zero and garbage both fall back to unbounded
        env::set_var("MEMO_CACHE_MAX_SIZE", "0");
        env::set_var("MEMO_CACHE_CLONE_VALUES", "maybe");
        let config = Config::from_env();
        assert!(!config.clone_values);
        assert!(config.max_size.is_none());

        env::remove_var("MEMO_CACHE_CLONE_VALUES");
        env::remove_var("MEMO_CACHE_MAX_SIZE");
        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
