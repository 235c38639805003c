use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use news_gateway::{logging, server, CacheStore, Config, HttpTransport, NewsClient, Resolver};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenv::dotenv().ok();

    let config = Config::parse();
    logging::init();

    let transport = HttpTransport::with_timeout(config.request_timeout())
        .context("Failed to set up provider transport")?;
    let client = NewsClient::with_transport(&config.base_url, &config.api_key, transport)?;

    let cache = Arc::new(CacheStore::with_ttl(config.cache_ttl()));
    info!(
        provider = %client.base_url(),
        ttl_secs = cache.ttl().as_secs(),
        "cache configured"
    );

    let resolver = Arc::new(Resolver::new(cache, client));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    server::serve(listener, resolver).await
}
