use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use log::{debug, info};
use parking_lot::RwLock;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::DatabaseStats;
use crate::core::store::ArticleStore;
use crate::core::types::{Article, ArticleId, NewArticle};
use crate::index::inverted::InvertedIndex;
use crate::query::cache::QueryCache;
use crate::search::executor::SearchEngine;
use crate::search::query::SearchQuery;

/// Store and index behind one lock so an insert is never half-visible.
struct Catalog {
    store: ArticleStore,
    index: InvertedIndex,
}

/// Owner of all article state.
///
/// Writes take the lock exclusively; searches and lookups share it. Wrap in
/// an `Arc` to hand it to concurrent request handlers.
pub struct Database {
    catalog: RwLock<Catalog>,
    query_cache: Option<QueryCache>,

    // Metrics
    start_time: Instant,
    query_count: AtomicU64,
    write_count: AtomicU64,
}

impl Database {
    pub fn open(config: Config) -> Self {
        Self::open_with_index(config, InvertedIndex::new())
    }

    /// Opens with a caller-built index, e.g. one using another tokenizer.
    pub fn open_with_index(config: Config, index: InvertedIndex) -> Self {
        let query_cache = QueryCache::new(config.query_cache_size);

        info!(
            "opening article database (tokenizer={}, query_cache_size={})",
            index.tokenizer_name(),
            config.query_cache_size
        );

        Database {
            catalog: RwLock::new(Catalog {
                store: ArticleStore::new(),
                index,
            }),
            query_cache,
            start_time: Instant::now(),
            query_count: AtomicU64::new(0),
            write_count: AtomicU64::new(0),
        }
    }

    pub fn in_memory() -> Self {
        Self::open(Config::default())
    }

    /// Stores the article and indexes it before returning.
    pub fn add_article(&self, new_article: NewArticle) -> Result<Article> {
        let NewArticle { title, content, tags } = new_article;

        let article = {
            let mut catalog = self.catalog.write();
            let Catalog { store, index } = &mut *catalog;

            let article = store.insert(title, content, tags).clone();
            index.update(&article, article.id);

            // Invalidate while still holding the write lock so no reader
            // can repopulate the cache from the pre-insert state.
            if let Some(cache) = &self.query_cache {
                cache.clear();
            }
            article
        };

        self.write_count.fetch_add(1, Ordering::Relaxed);
        debug!("added article {} with {} tags", article.id, article.tags.len());

        Ok(article)
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Article>> {
        self.query_count.fetch_add(1, Ordering::Relaxed);

        // Cache reads and fills happen under the read lock, so they never
        // interleave with an insert and its cache clear.
        let catalog = self.catalog.read();
        let engine = SearchEngine::new(&catalog.store, &catalog.index);

        if let Some(ids) = self.query_cache.as_ref().and_then(|cache| cache.get(query)) {
            debug!("search served from cache ({} hits)", ids.len());
            return Ok(engine.resolve(&ids));
        }

        let results = engine.search(query);

        if let Some(cache) = &self.query_cache {
            cache.put(query.clone(), results.iter().map(|article| article.id).collect());
        }

        debug!(
            "search sort_by={:?} returned {} articles",
            query.sort_by,
            results.len()
        );
        Ok(results)
    }

    pub fn get_article(&self, id: ArticleId) -> Result<Article> {
        let catalog = self.catalog.read();
        SearchEngine::new(&catalog.store, &catalog.index)
            .get_by_id(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.catalog.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> DatabaseStats {
        let catalog = self.catalog.read();

        DatabaseStats {
            uptime_secs: self.start_time.elapsed().as_secs(),
            article_count: catalog.store.len(),
            keyword_count: catalog.index.keyword_count(),
            tag_count: catalog.index.tag_count(),
            indexed_count: catalog.index.doc_count,
            query_count: self.query_count.load(Ordering::Relaxed),
            write_count: self.write_count.load(Ordering::Relaxed),
            cache_stats: self.query_cache.as_ref().map(QueryCache::stats),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::in_memory()
    }
}
