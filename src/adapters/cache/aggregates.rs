//! Short-TTL memoization of per-location aggregates.
//!
//! Wraps a [`CacheBackend`] with the two aggregate keys the engine serves
//! hot: the estimated wait and the open/closed decision. Every method fails
//! open: a backend fault degrades to a miss or a skipped write, never to an
//! error on the caller's request. A cold or absent cache must produce the
//! same results, only slower.

use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::models::{CacheConfig, LocationId};
use crate::domain::ports::CacheBackend;

/// Memoizes estimated-wait and open/closed per location.
#[derive(Clone)]
pub struct AggregateCache {
    backend: Arc<dyn CacheBackend>,
    wait_ttl: Duration,
    hours_ttl: Duration,
}

impl AggregateCache {
    pub fn new(backend: Arc<dyn CacheBackend>, config: &CacheConfig) -> Self {
        Self {
            backend,
            wait_ttl: Duration::from_secs(config.wait_ttl_secs),
            hours_ttl: Duration::from_secs(config.hours_ttl_secs),
        }
    }

    fn wait_key(location_id: LocationId) -> String {
        format!("wait:{location_id}")
    }

    fn open_key(location_id: LocationId) -> String {
        format!("open:{location_id}")
    }

    /// Cached wait estimate in minutes, if fresh.
    pub async fn cached_wait(&self, location_id: LocationId) -> Option<u64> {
        self.read(&Self::wait_key(location_id)).await
    }

    /// Memoize a freshly computed wait estimate.
    pub async fn store_wait(&self, location_id: LocationId, minutes: u64) {
        self.write(Self::wait_key(location_id), &minutes, self.wait_ttl)
            .await;
    }

    /// Cached open/closed decision, if fresh.
    pub async fn cached_open(&self, location_id: LocationId) -> Option<bool> {
        self.read(&Self::open_key(location_id)).await
    }

    /// Memoize a freshly computed open/closed decision.
    pub async fn store_open(&self, location_id: LocationId, open: bool) {
        self.write(Self::open_key(location_id), &open, self.hours_ttl)
            .await;
    }

    /// Drop both aggregates for a location.
    ///
    /// Mutation paths call this strictly after their own state change has
    /// committed, so a concurrent reader can never re-cache a value computed
    /// from data that is about to change.
    pub async fn invalidate_location(&self, location_id: LocationId) {
        for key in [Self::wait_key(location_id), Self::open_key(location_id)] {
            if let Err(err) = self.backend.invalidate(&key).await {
                warn!(%key, %err, "cache invalidation failed; entry will age out via TTL");
            }
        }
    }

    /// Drop every cached aggregate.
    pub async fn clear(&self) {
        if let Err(err) = self.backend.clear().await {
            warn!(%err, "cache clear failed; entries will age out via TTL");
        }
    }

    async fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(%key, %err, "undecodable cache entry treated as miss");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(%key, %err, "cache read failed; recomputing");
                None
            }
        }
    }

    async fn write<T: serde::Serialize>(&self, key: String, value: &T, ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%key, %err, "cache value failed to serialize; skipping write");
                return;
            }
        };
        if let Err(err) = self.backend.set(&key, raw, ttl).await {
            warn!(%key, %err, "cache write failed; continuing uncached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::MokaCacheBackend;
    use crate::domain::ports::CacheError;
    use async_trait::async_trait;

    /// Backend whose every operation fails.
    struct BrokenBackend;

    #[async_trait]
    impl CacheBackend for BrokenBackend {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        async fn set(
            &self,
            _key: &str,
            _value: String,
            _ttl: Duration,
        ) -> Result<(), CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        async fn invalidate(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        async fn clear(&self) -> Result<(), CacheError> {
            Err(CacheError::Backend("down".into()))
        }
    }

    #[tokio::test]
    async fn test_round_trip_and_invalidate() {
        let cache = AggregateCache::new(
            Arc::new(MokaCacheBackend::new(16)),
            &CacheConfig::default(),
        );
        let location = LocationId::new();

        assert_eq!(cache.cached_wait(location).await, None);

        cache.store_wait(location, 75).await;
        cache.store_open(location, true).await;
        assert_eq!(cache.cached_wait(location).await, Some(75));
        assert_eq!(cache.cached_open(location).await, Some(true));

        cache.invalidate_location(location).await;
        assert_eq!(cache.cached_wait(location).await, None);
        assert_eq!(cache.cached_open(location).await, None);
    }

    #[tokio::test]
    async fn test_locations_are_keyed_independently() {
        let cache = AggregateCache::new(
            Arc::new(MokaCacheBackend::new(16)),
            &CacheConfig::default(),
        );
        let a = LocationId::new();
        let b = LocationId::new();

        cache.store_wait(a, 10).await;
        cache.store_wait(b, 99).await;
        cache.invalidate_location(a).await;

        assert_eq!(cache.cached_wait(a).await, None);
        assert_eq!(cache.cached_wait(b).await, Some(99));
    }

    #[tokio::test]
    async fn test_broken_backend_fails_open() {
        let cache = AggregateCache::new(Arc::new(BrokenBackend), &CacheConfig::default());
        let location = LocationId::new();

        // Every operation degrades silently instead of erroring
        cache.store_wait(location, 75).await;
        assert_eq!(cache.cached_wait(location).await, None);
        cache.invalidate_location(location).await;
        cache.clear().await;
    }
}
