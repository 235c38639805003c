//! HTTP surface of the gateway.
//!
//! `/graphql` answers GraphQL documents on POST and serves GraphiQL on GET.
//! `/health` and `/cache/stats` are plain JSON endpoints for operators.

use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cache::CacheStats;
use crate::graphql::build_schema;
use crate::resolver::Resolver;

const GRAPHQL_PATH: &str = "/graphql";

/// Build the router over a shared resolver
pub fn router(resolver: Arc<Resolver>) -> Router {
    let schema = build_schema(Arc::clone(&resolver));
    let graphql = get(graphiql).post_service(GraphQL::new(schema));

    Router::new()
        .route(GRAPHQL_PATH, graphql)
        .route("/health", get(health))
        .route("/cache/stats", get(cache_stats))
        .with_state(resolver)
}

/// Serve the router on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, resolver: Arc<Resolver>) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!(%addr, path = GRAPHQL_PATH, "server is running");

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn cache_stats(State(resolver): State<Arc<Resolver>>) -> Json<CacheStats> {
    Json(resolver.cache().stats().await)
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires
///
/// If the signal cannot be listened for, never resolves: the server keeps
/// running until the process is killed.
async fn shutdown_on(signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C, graceful shutdown disabled");
            std::future::pending::<()>().await
        }
    }
}
