use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::NewsClient;
use crate::cache::{CacheKey, CacheStore};
use crate::error::{QueryError, UpstreamFetchError};
use crate::models::Article;

/// Answers queries from the cache, falling back to the provider on a miss
///
/// Each call is independent. Concurrent misses on the same key may each
/// fetch and store; the last write wins and the values are equivalent.
pub struct Resolver {
    cache: Arc<CacheStore>,
    client: NewsClient,
}

impl Resolver {
    pub fn new(cache: Arc<CacheStore>, client: NewsClient) -> Self {
        Self { cache, client }
    }

    /// The shared response cache
    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Top headlines, limited to `max`
    pub async fn articles(&self, max: Option<i64>) -> Result<Arc<[Article]>, QueryError> {
        let key = CacheKey::articles(max);
        self.resolve(key, || self.client.fetch_top_headlines(max))
            .await
            .map_err(|e| Self::fail(QueryError::ArticlesFetch(e)))
    }

    /// Articles whose title matches `title`
    pub async fn article(&self, title: &str) -> Result<Arc<[Article]>, QueryError> {
        let key = CacheKey::article(title);
        self.resolve(key, || self.client.fetch_by_title(title))
            .await
            .map_err(|e| Self::fail(QueryError::ArticleFetch(e)))
    }

    /// Articles matching `keyword`
    pub async fn search(&self, keyword: &str) -> Result<Arc<[Article]>, QueryError> {
        let key = CacheKey::search(keyword);
        self.resolve(key, || self.client.fetch_by_keyword(keyword))
            .await
            .map_err(|e| Self::fail(QueryError::SearchFetch(e)))
    }

    async fn resolve<F, Fut>(
        &self,
        key: CacheKey,
        fetch: F,
    ) -> Result<Arc<[Article]>, UpstreamFetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Article>, UpstreamFetchError>>,
    {
        if let Some(articles) = self.cache.get(&key).await {
            debug!(%key, "cache hit");
            return Ok(articles);
        }

        debug!(%key, "cache miss");
        let articles: Arc<[Article]> = fetch().await?.into();
        self.cache.set(key, Arc::clone(&articles)).await;
        Ok(articles)
    }

    fn fail(err: QueryError) -> QueryError {
        warn!(operation = err.operation(), error = %err.upstream(), "query failed");
        err
    }
}
