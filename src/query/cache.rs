use lru::LruCache;
use parking_lot::Mutex;
use serde::{Serialize, Deserialize};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::core::types::ArticleId;
use crate::search::query::SearchQuery;

/// Query cache for avoiding recomputation
///
/// Holds the ordered result ids of a search, not the articles; callers
/// resolve them against the store. Entries are only valid for the index
/// state they were computed from, so the owner clears the cache on every
/// insert.
pub struct QueryCache {
    pub cache: Mutex<LruCache<SearchQuery, Vec<ArticleId>>>,
    pub size_limit: usize,
    pub hit_count: AtomicUsize,
    pub miss_count: AtomicUsize,
}

impl QueryCache {
    /// Returns `None` when `size_limit` is zero.
    pub fn new(size_limit: usize) -> Option<Self> {
        let cap = NonZeroUsize::new(size_limit)?;
        Some(QueryCache {
            cache: Mutex::new(LruCache::new(cap)),
            size_limit,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        })
    }

    pub fn get(&self, key: &SearchQuery) -> Option<Vec<ArticleId>> {
        let mut cache = self.cache.lock();
        if let Some(ids) = cache.get(key) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            Some(ids.clone())
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn put(&self, key: SearchQuery, ids: Vec<ArticleId>) {
        self.cache.lock().put(key, ids);
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.cache.lock().len(),
            capacity: self.size_limit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
