use anyhow::{Context, Result};
use tracing::debug;

use crate::api::Transport;
use crate::error::{redact_api_key, UpstreamFetchError};
use crate::models::{Article, ArticleList};

/// Client for the upstream news-article provider
///
/// Turns caller-neutral parameters into the provider's query strings and
/// the provider's response into [`Article`] values.
pub struct NewsClient {
    transport: Box<dyn Transport>,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Create a client fetching through `transport`
    pub fn with_transport(
        base_url: &str,
        api_key: &str,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        reqwest::Url::parse(base_url)
            .with_context(|| format!("Invalid provider base URL: {}", base_url))?;

        Ok(Self {
            transport: Box::new(transport),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// General-category headlines, at most `max` of them
    ///
    /// `max` is passed through unchecked; without it the provider default applies.
    pub async fn fetch_top_headlines(
        &self,
        max: Option<i64>,
    ) -> Result<Vec<Article>, UpstreamFetchError> {
        self.fetch_articles(&self.top_headlines_url(max)).await
    }

    /// Articles whose title matches `title`
    pub async fn fetch_by_title(&self, title: &str) -> Result<Vec<Article>, UpstreamFetchError> {
        self.fetch_articles(&self.search_url(title, true)).await
    }

    /// Articles matching `keyword` anywhere
    pub async fn fetch_by_keyword(
        &self,
        keyword: &str,
    ) -> Result<Vec<Article>, UpstreamFetchError> {
        self.fetch_articles(&self.search_url(keyword, false)).await
    }

    fn top_headlines_url(&self, max: Option<i64>) -> String {
        let mut url = format!("{}/top-headlines?category=general", self.base_url);
        if let Some(max) = max {
            url.push_str(&format!("&max={}", max));
        }
        self.with_api_key(url)
    }

    fn search_url(&self, query: &str, title_only: bool) -> String {
        let query = urlencoding::encode(query);
        let mut url = format!("{}/search?q={}", self.base_url, query);
        if title_only {
            url.push_str("&in=title");
        }
        self.with_api_key(url)
    }

    fn with_api_key(&self, mut url: String) -> String {
        url.push_str(&format!("&apikey={}", urlencoding::encode(&self.api_key)));
        url
    }

    async fn fetch_articles(&self, url: &str) -> Result<Vec<Article>, UpstreamFetchError> {
        debug!(url = %redact_api_key(url), "fetching from provider");

        let body = self.transport.fetch(url).await?;
        let list: ArticleList = serde_json::from_str(&body)
            .map_err(|e| invalid_body(url, e))?;

        debug!(count = list.articles.len(), "provider returned articles");
        Ok(list.articles)
    }
}

fn invalid_body(url: &str, err: serde_json::Error) -> UpstreamFetchError {
    UpstreamFetchError::new(url, format!("invalid response body: {}", err))
}
