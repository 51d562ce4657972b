use serde::{Serialize, Deserialize};
use crate::query::cache::CacheStats;

/// Database statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub uptime_secs: u64,

    // Content
    pub article_count: usize,
    pub keyword_count: usize,
    pub tag_count: usize,
    pub indexed_count: usize,

    // Traffic
    pub query_count: u64,
    pub write_count: u64,
    pub cache_stats: Option<CacheStats>,
}
