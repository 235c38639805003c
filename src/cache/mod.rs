mod key;
mod stats;
mod storage;

pub use key::CacheKey;
pub use stats::CacheStats;
pub use storage::{CacheStore, DEFAULT_TTL};
