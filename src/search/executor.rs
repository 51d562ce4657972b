use log::warn;
use crate::core::error::Result;
use crate::core::store::ArticleStore;
use crate::core::types::{Article, ArticleId};
use crate::index::inverted::InvertedIndex;
use crate::scoring::scorer::{OccurrenceScorer, Scorer};
use crate::search::query::{SearchQuery, SortBy};

/// Executes queries against a store and its index.
///
/// Borrows both for the duration of a request; the caller holds whatever
/// lock guards them.
pub struct SearchEngine<'a> {
    pub store: &'a ArticleStore,
    pub index: &'a InvertedIndex,
    pub scorer: Box<dyn Scorer>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a ArticleStore, index: &'a InvertedIndex) -> Self {
        SearchEngine {
            store,
            index,
            scorer: Box::new(OccurrenceScorer),
        }
    }

    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Runs `query` and returns matching articles.
    ///
    /// Without a ranking the result follows index append order, duplicate
    /// entries included. Both rankings are stable.
    pub fn search(&self, query: &SearchQuery) -> Vec<Article> {
        let keyword = query.active_keyword();

        let ids = if let Some(keyword) = keyword {
            self.index.lookup_keyword(keyword)
        } else if let Some(tag) = query.active_tag() {
            self.index.lookup_tag(tag)
        } else {
            return Vec::new();
        };

        let mut results = self.resolve(ids);

        match (query.sort_by, keyword) {
            (SortBy::Relevance, Some(keyword)) => {
                // stable: equal scores keep index order
                results.sort_by_cached_key(|article| {
                    std::cmp::Reverse(self.scorer.score(article, keyword))
                });
            }
            (SortBy::Date, _) => {
                results.sort_by(|a, b| b.date.cmp(&a.date));
            }
            _ => {}
        }

        results
    }

    pub fn get_by_id(&self, id: ArticleId) -> Result<&'a Article> {
        self.store.get_by_id(id)
    }

    /// Maps ids to articles in order; ids missing from the store are skipped.
    pub fn resolve(&self, ids: &[ArticleId]) -> Vec<Article> {
        ids.iter()
            .filter_map(|id| match self.store.get_by_id(*id) {
                Ok(article) => Some(article.clone()),
                Err(err) => {
                    warn!("dropping dangling index entry: {}", err);
                    None
                }
            })
            .collect()
    }
}
