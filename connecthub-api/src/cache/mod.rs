mod noop_store;
mod redis_store;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use noop_store::NoopCacheStore;
use redis_store::RedisCacheStore;

pub const STATS_CACHE_TTL: Duration = Duration::from_secs(30);
pub const CATALOG_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Debug)]
enum CacheBackend {
    Disabled(NoopCacheStore),
    Redis(RedisCacheStore),
}

#[derive(Clone, Debug)]
pub struct CacheService {
    key_prefix: String,
    backend: CacheBackend,
}

impl CacheService {
    pub fn disabled(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Disabled(NoopCacheStore),
        }
    }

    pub fn redis(redis_url: &str, prefix: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Redis(RedisCacheStore::from_url(redis_url)?),
        })
    }

    pub fn is_redis_enabled(&self) -> bool {
        matches!(self.backend, CacheBackend::Redis(_))
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled(_) => Ok(()),
            CacheBackend::Redis(store) => store.ping().await,
        }
    }

    pub fn key(&self, suffix: impl AsRef<str>) -> String {
        format!("{}:{}", self.key_prefix, suffix.as_ref())
    }

    pub async fn get_json<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let value = match &self.backend {
            CacheBackend::Disabled(store) => store.get(key).await,
            CacheBackend::Redis(store) => store.get(key).await,
        }?;

        match value {
            Some(bytes) => {
                let parsed = serde_json::from_slice(&bytes).map_err(|e| {
                    anyhow::anyhow!("failed to deserialize cache value for `{key}`: {e}")
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    pub async fn set_json<T>(&self, key: &str, value: &T, ttl: Duration) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let ttl_seconds = ttl.as_secs().max(1);
        let payload = serde_json::to_vec(value)
            .map_err(|e| anyhow::anyhow!("failed to serialize cache value for `{key}`: {e}"))?;

        match &self.backend {
            CacheBackend::Disabled(store) => store.set(key, payload, ttl_seconds).await,
            CacheBackend::Redis(store) => store.set(key, payload, ttl_seconds).await,
        }
    }

    pub async fn del(&self, keys: &[String]) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled(store) => store.del(keys).await,
            CacheBackend::Redis(store) => store.del(keys).await,
        }
    }

    pub async fn get_or_load_json<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> anyhow::Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        match self.get_json::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(
                ?e,
                cache_key = key,
                "cache get failed; falling back to backend api"
            ),
        }

        let loaded = loader().await?;

        if let Err(e) = self.set_json(key, &loaded, ttl).await {
            warn!(
                ?e,
                cache_key = key,
                "cache set failed; returning backend value"
            );
        }

        Ok(loaded)
    }
}

pub fn stats_key(cache: &CacheService, user_id: &str) -> String {
    cache.key(format!("gamification:stats:{user_id}"))
}

pub fn daily_challenges_key(cache: &CacheService, user_id: &str) -> String {
    cache.key(format!("gamification:challenges:daily:{user_id}"))
}

pub fn achievements_key(cache: &CacheService, user_id: &str) -> String {
    cache.key(format!("gamification:achievements:{user_id}"))
}

pub fn rewards_key(cache: &CacheService, user_id: &str) -> String {
    cache.key(format!("gamification:rewards:{user_id}"))
}

/// Drop everything an award can change: points, level, coins and unlocks.
pub async fn invalidate_after_award(cache: &CacheService, user_id: &str) -> anyhow::Result<()> {
    cache
        .del(&[
            stats_key(cache, user_id),
            achievements_key(cache, user_id),
            daily_challenges_key(cache, user_id),
        ])
        .await
}

pub async fn invalidate_stats(cache: &CacheService, user_id: &str) -> anyhow::Result<()> {
    cache.del(&[stats_key(cache, user_id)]).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use super::{CacheService, achievements_key, stats_key};

    #[test]
    fn keys_are_prefixed_per_user() {
        let cache = CacheService::disabled("connecthub:test");
        assert_eq!(
            stats_key(&cache, "u42"),
            "connecthub:test:gamification:stats:u42"
        );
        assert_eq!(
            achievements_key(&cache, "me"),
            "connecthub:test:gamification:achievements:me"
        );
        assert!(!cache.is_redis_enabled());
    }

    #[tokio::test]
    async fn disabled_cache_always_runs_loader() {
        let cache = CacheService::disabled("connecthub:test");
        let counter = AtomicU32::new(0);
        let calls = &counter;

        for _ in 0..2 {
            let value = cache
                .get_or_load_json("k", Duration::from_secs(5), || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7_u32)
                })
                .await
                .unwrap();
            assert_eq!(value, 7);
        }

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(cache.ping().await.is_ok());
    }

    #[tokio::test]
    async fn loader_errors_propagate() {
        let cache = CacheService::disabled("connecthub:test");
        let result = cache
            .get_or_load_json::<u32, _, _>("k", Duration::from_secs(5), || async {
                Err(anyhow::anyhow!("backend down"))
            })
            .await;

        assert!(result.is_err());
    }
}
