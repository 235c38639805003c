use std::fmt::Display;

use thiserror::Error;

/// The upstream provider could not deliver a usable article list
///
/// Transport failures, non-success statuses and unparsable bodies all land
/// here. The URL is stored with the API key redacted so the error can be
/// logged as is.
#[derive(Debug, Clone, Error)]
#[error("upstream request to {url} failed: {reason}")]
pub struct UpstreamFetchError {
    url: String,
    reason: String,
}

impl UpstreamFetchError {
    pub fn new(url: &str, reason: impl Display) -> Self {
        Self {
            url: redact_api_key(url),
            reason: reason.to_string(),
        }
    }

    /// Request URL, API key redacted
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A query operation failed
///
/// The display text is fixed per operation and never includes the upstream
/// cause; that stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to fetch articles!")]
    ArticlesFetch(#[source] UpstreamFetchError),

    #[error("Failed to find article!")]
    ArticleFetch(#[source] UpstreamFetchError),

    #[error("Failed to search article!")]
    SearchFetch(#[source] UpstreamFetchError),
}

impl QueryError {
    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            QueryError::ArticlesFetch(_) => "articles",
            QueryError::ArticleFetch(_) => "article",
            QueryError::SearchFetch(_) => "search",
        }
    }

    /// The upstream failure behind this error
    pub fn upstream(&self) -> &UpstreamFetchError {
        match self {
            QueryError::ArticlesFetch(e)
            | QueryError::ArticleFetch(e)
            | QueryError::SearchFetch(e) => e,
        }
    }
}

/// Replace the value of the `apikey` query parameter with `***`
pub(crate) fn redact_api_key(url: &str) -> String {
    let start = ["?apikey=", "&apikey="]
        .iter()
        .filter_map(|param| url.find(param).map(|i| i + param.len()))
        .min();

    match start {
        Some(start) => {
            let end = url[start..].find('&').map_or(url.len(), |i| start + i);
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}
