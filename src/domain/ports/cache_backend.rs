//! Key/value cache backend port.
//!
//! Values are serialized strings so backends can be in-process or external.
//! Callers must treat every method as allowed to fail and fall back to
//! recomputation; correctness never depends on a cache hit.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Cache backend failure.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend failure: {0}")]
    Backend(String),
}

/// TTL key/value store port.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetch a value; `None` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value with a per-entry TTL.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Drop one key.
    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;

    /// Drop everything.
    async fn clear(&self) -> Result<(), CacheError>;
}
