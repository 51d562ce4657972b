use std::env;
use crate::core::error::{Error, ErrorKind, Result};

pub const ENV_QUERY_CACHE_SIZE: &str = "ARTICLEDEX_QUERY_CACHE_SIZE";
pub const ENV_LOG_LEVEL: &str = "ARTICLEDEX_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub query_cache_size: usize,    // Cached search results, 0 disables
    pub log_level: String,          // Passed to logging::init_logging
}

impl Default for Config {
    fn default() -> Self {
        Config {
            query_cache_size: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `ARTICLEDEX_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_QUERY_CACHE_SIZE) {
            config.query_cache_size = raw.trim().parse().map_err(|_| {
                Error::new(
                    ErrorKind::InvalidArgument,
                    format!("{} must be a non-negative integer, got `{}`", ENV_QUERY_CACHE_SIZE, raw),
                )
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }

        Ok(config)
    }
}
