use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

/// Startup configuration, read from flags or the environment
#[derive(Debug, Clone, Parser)]
#[command(name = "news-gateway")]
#[command(about = "Caching GraphQL gateway for a news-article provider")]
#[command(version)]
pub struct Config {
    /// Provider base URL, e.g. https://gnews.io/api/v4
    #[arg(long, env = "BASE_URL")]
    pub base_url: String,

    /// Provider API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: u16,

    /// Address to listen on
    #[arg(long, env = "LISTEN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Seconds a cached response stays valid
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
