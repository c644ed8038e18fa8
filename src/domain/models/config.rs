//! Runtime configuration models.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the queue engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Aggregate cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Aggregate cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// TTL in seconds for cached wait-time estimates
    #[serde(default = "default_wait_ttl_secs")]
    pub wait_ttl_secs: u64,

    /// TTL in seconds for cached open/closed decisions
    #[serde(default = "default_hours_ttl_secs")]
    pub hours_ttl_secs: u64,

    /// Maximum number of cached entries
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_wait_ttl_secs() -> u64 {
    30
}

const fn default_hours_ttl_secs() -> u64 {
    300
}

const fn default_max_entries() -> u64 {
    1024
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            wait_ttl_secs: default_wait_ttl_secs(),
            hours_ttl_secs: default_hours_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
