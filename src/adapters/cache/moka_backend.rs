//! In-process cache backend using moka with per-entry TTL.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};

use crate::domain::ports::{CacheBackend, CacheError};

#[derive(Debug, Clone)]
struct CachedValue {
    payload: String,
    ttl: Duration,
}

/// Expiry policy that reads the TTL stored with each entry.
struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// moka-backed implementation of [`CacheBackend`].
pub struct MokaCacheBackend {
    inner: Cache<String, CachedValue>,
}

impl MokaCacheBackend {
    /// Create a backend bounded to `max_entries` cached values.
    pub fn new(max_entries: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_entries)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }
}

#[async_trait]
impl CacheBackend for MokaCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).await.map(|value| value.payload))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.inner
            .insert(key.to_string(), CachedValue { payload: value, ttl })
            .await;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.inner.invalidate(key).await;
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.inner.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let backend = MokaCacheBackend::new(16);
        backend
            .set("wait:a", "42".to_string(), Duration::from_secs(30))
            .await
            .unwrap();

        assert_eq!(backend.get("wait:a").await.unwrap(), Some("42".to_string()));
        assert_eq!(backend.get("wait:b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalidate_drops_key() {
        let backend = MokaCacheBackend::new(16);
        backend
            .set("open:a", "true".to_string(), Duration::from_secs(300))
            .await
            .unwrap();
        backend.invalidate("open:a").await.unwrap();

        assert_eq!(backend.get("open:a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_drops_everything() {
        let backend = MokaCacheBackend::new(16);
        backend
            .set("a", "1".to_string(), Duration::from_secs(30))
            .await
            .unwrap();
        backend
            .set("b", "2".to_string(), Duration::from_secs(30))
            .await
            .unwrap();
        backend.clear().await.unwrap();

        assert_eq!(backend.get("a").await.unwrap(), None);
        assert_eq!(backend.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_per_entry_ttl_expires() {
        let backend = MokaCacheBackend::new(16);
        backend
            .set("short", "x".to_string(), Duration::from_millis(50))
            .await
            .unwrap();
        backend
            .set("long", "y".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(backend.get("short").await.unwrap(), None);
        assert_eq!(backend.get("long").await.unwrap(), Some("y".to_string()));
    }
}
