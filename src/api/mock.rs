//! In-memory transport for exercising the gateway without a live provider.
//!
//! Canned outcomes are matched by URL substring in the order they were
//! registered. Every fetch is recorded so tests can count upstream calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::Transport;
use crate::error::UpstreamFetchError;

#[derive(Debug, Clone)]
enum Outcome {
    Body(String),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    routes: Vec<(String, Outcome)>,
    calls: Vec<String>,
    delay: Option<Duration>,
}

/// [`Transport`] returning canned bodies, with call history
///
/// Clones share state, so a test can keep one handle and give another to
/// the client under test.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs containing `pattern` with `body`
    #[must_use]
    pub fn with_response(self, pattern: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(pattern, body);
        self
    }

    /// Fail URLs containing `pattern` with `reason`
    #[must_use]
    pub fn with_failure(self, pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        self.fail(pattern, reason);
        self
    }

    /// Delay every fetch, so concurrent callers overlap
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = Some(delay);
        self
    }

    /// Set or replace the body served for `pattern`
    pub fn respond(&self, pattern: impl Into<String>, body: impl Into<String>) {
        self.route(pattern.into(), Outcome::Body(body.into()));
    }

    /// Set or replace a failure for `pattern`
    pub fn fail(&self, pattern: impl Into<String>, reason: impl Into<String>) {
        self.route(pattern.into(), Outcome::Failure(reason.into()));
    }

    /// All fetched URLs, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Number of fetched URLs containing `pattern`
    #[must_use]
    pub fn calls_matching(&self, pattern: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|url| url.contains(pattern))
            .count()
    }

    fn route(&self, pattern: String, outcome: Outcome) {
        let mut state = self.lock();
        match state.routes.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, existing)) => *existing = outcome,
            None => state.routes.push((pattern, outcome)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<String, UpstreamFetchError> {
        let (outcome, delay) = {
            let mut state = self.lock();
            state.calls.push(url.to_string());
            let outcome = state
                .routes
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, outcome)| outcome.clone());
            (outcome, state.delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match outcome {
            Some(Outcome::Body(body)) => Ok(body),
            Some(Outcome::Failure(reason)) => Err(UpstreamFetchError::new(url, reason)),
            None => Err(UpstreamFetchError::new(url, "HTTP 404 Not Found")),
        }
    }
}
