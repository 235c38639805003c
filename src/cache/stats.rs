use serde::{Deserialize, Serialize};

/// Point-in-time counters for the response cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Live (unexpired) entries
    pub keys: u64,
    /// Reads served from memory
    pub hits: u64,
    /// Reads that found nothing or only an expired entry
    pub misses: u64,
}
