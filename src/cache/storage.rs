use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::cache::{CacheKey, CacheStats};
use crate::models::Article;

/// TTL applied to every entry unless the store is built with another one
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Process-wide in-memory store of article lists with a uniform TTL
///
/// Expiry is handled by moka: an entry older than the TTL is never returned
/// and is evicted during the cache's own maintenance. Concurrent writers to
/// the same key race; the last write wins.
#[derive(Debug)]
pub struct CacheStore {
    cache: Cache<CacheKey, Arc<[Article]>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    /// Create an empty store using [`DEFAULT_TTL`]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create an empty store whose entries live for `ttl`
    pub fn with_ttl(ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).build();

        Self {
            cache,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// TTL applied to every entry
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a live entry, or `None` if absent or expired
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<[Article]>> {
        let result = self.cache.get(key).await;

        if result.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        result
    }

    /// Store a value, replacing any previous entry and restarting its TTL
    pub async fn set(&self, key: CacheKey, value: impl Into<Arc<[Article]>>) {
        self.cache.insert(key, value.into()).await;
    }

    /// Snapshot of live entry count and hit/miss counters
    ///
    /// Runs pending maintenance first so expired entries are not counted.
    pub async fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks().await;

        CacheStats {
            keys: self.cache.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles(titles: &[&str]) -> Vec<Article> {
        titles.iter().map(|t| Article::titled(*t)).collect()
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = CacheStore::new();
        let key = CacheKey::search("ai");

        assert!(cache.get(&key).await.is_none());

        cache.set(key.clone(), articles(&["A", "B"])).await;

        let cached = cache.get(&key).await.unwrap();
        assert_eq!(&*cached, articles(&["A", "B"]).as_slice());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = CacheStore::new();
        let key = CacheKey::article("x");

        cache.set(key.clone(), articles(&["old"])).await;
        cache.set(key.clone(), articles(&["new"])).await;

        let cached = cache.get(&key).await.unwrap();
        assert_eq!(&*cached, articles(&["new"]).as_slice());
        assert_eq!(cache.stats().await.keys, 1);
    }

    #[tokio::test]
    async fn test_empty_list_is_cached() {
        let cache = CacheStore::new();
        let key = CacheKey::search("nothing");

        cache.set(key.clone(), Vec::<Article>::new()).await;

        let cached = cache.get(&key).await;
        assert!(cached.is_some());
        assert!(cached.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = CacheStore::with_ttl(Duration::from_millis(50));
        let key = CacheKey::articles(Some(5));

        cache.set(key.clone(), articles(&["A"])).await;
        assert!(cache.get(&key).await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(&key).await.is_none());
        assert_eq!(cache.stats().await.keys, 0);
    }

    #[tokio::test]
    async fn test_rewrite_resets_expiry() {
        let cache = CacheStore::with_ttl(Duration::from_millis(200));
        let key = CacheKey::search("ai");

        cache.set(key.clone(), articles(&["A"])).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        cache.set(key.clone(), articles(&["B"])).await;
        tokio::time::sleep(Duration::from_millis(120)).await;

        let cached = cache.get(&key).await.unwrap();
        assert_eq!(&*cached, articles(&["B"]).as_slice());
    }

    #[tokio::test]
    async fn test_stats_count_hits_and_misses() {
        let cache = CacheStore::new();
        let key = CacheKey::search("ai");

        cache.get(&key).await;
        cache.set(key.clone(), articles(&["A"])).await;
        cache.get(&key).await;
        cache.get(&key).await;

        let stats = cache.stats().await;
        assert_eq!(stats.keys, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }
}
