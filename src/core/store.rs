use chrono::{DateTime, Utc};
use crate::core::error::{Error, Result};
use crate::core::types::{Article, ArticleId};

/// Canonical, append-only sequence of articles.
pub struct ArticleStore {
    pub articles: Vec<Article>,
    // Kept apart from `articles.len()` so ids are never reused.
    next_id: u64,
}

impl ArticleStore {
    pub fn new() -> Self {
        ArticleStore {
            articles: Vec::new(),
            next_id: 1,
        }
    }

    /// Stores a new article stamped with the current time.
    pub fn insert(&mut self, title: String, content: String, tags: Vec<String>) -> &Article {
        self.insert_with_date(title, content, tags, Utc::now())
    }

    /// Stores a new article with an explicit creation time.
    ///
    /// Title, content and tags are accepted as-is, empty values included.
    pub fn insert_with_date(
        &mut self,
        title: String,
        content: String,
        tags: Vec<String>,
        date: DateTime<Utc>,
    ) -> &Article {
        let id = ArticleId(self.next_id);
        self.next_id += 1;

        let index = self.articles.len();
        self.articles.push(Article {
            id,
            title,
            content,
            tags,
            date,
        });

        &self.articles[index]
    }

    /// Linear scan for the article with `id`.
    pub fn get_by_id(&self, id: ArticleId) -> Result<&Article> {
        self.articles
            .iter()
            .find(|article| article.id == id)
            .ok_or_else(|| Error::not_found(format!("Article {} not found", id)))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn insert(store: &mut ArticleStore, title: &str) -> ArticleId {
        store.insert(title.to_string(), String::new(), Vec::new()).id
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut store = ArticleStore::new();
        let ids: Vec<u64> = ["a", "b", "c"]
            .iter()
            .map(|t| insert(&mut store, t).value())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_by_id_returns_ith_article() {
        let mut store = ArticleStore::new();
        for title in ["first", "second", "third"] {
            insert(&mut store, title);
        }

        assert_eq!(store.get_by_id(ArticleId(1)).unwrap().title, "first");
        assert_eq!(store.get_by_id(ArticleId(2)).unwrap().title, "second");
        assert_eq!(store.get_by_id(ArticleId(3)).unwrap().title, "third");
    }

    #[test]
    fn test_get_by_id_out_of_range_is_not_found() {
        let mut store = ArticleStore::new();
        insert(&mut store, "only");

        assert!(store.get_by_id(ArticleId(0)).unwrap_err().is_not_found());
        assert!(store.get_by_id(ArticleId(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_inputs_are_accepted() {
        let mut store = ArticleStore::new();
        let article = store.insert(String::new(), String::new(), Vec::new()).clone();

        assert_eq!(article.id, ArticleId(1));
        assert!(article.title.is_empty());
        assert!(article.tags.is_empty());
    }

    #[test]
    fn test_insert_with_date_keeps_date() {
        let mut store = ArticleStore::new();
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let article = store
            .insert_with_date("t".into(), "c".into(), vec!["x".into()], date)
            .clone();

        assert_eq!(article.date, date);
        assert_eq!(store.get_by_id(article.id).unwrap(), &article);
    }
}
