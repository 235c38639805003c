pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod server;

#[cfg(any(test, feature = "test-util"))]
pub use api::MockTransport;
pub use api::{HttpTransport, NewsClient, Transport};
pub use cache::{CacheKey, CacheStats, CacheStore, DEFAULT_TTL};
pub use config::Config;
pub use error::{QueryError, UpstreamFetchError};
pub use graphql::{build_schema, GatewaySchema, QueryRoot};
pub use models::Article;
pub use resolver::Resolver;
