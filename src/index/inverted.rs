//! Keyword and tag inverted index over stored articles.

use std::collections::{HashMap, HashSet};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::types::{Article, ArticleId};
use crate::index::posting::PostingList;

/// Inverted index structure
///
/// Both maps only ever grow. Every id they hold was handed out by the
/// `ArticleStore` that owns the indexed article.
pub struct InvertedIndex {
    pub keywords: HashMap<String, PostingList>,
    pub tags: HashMap<String, PostingList>,
    pub doc_count: usize,               // update() calls, re-indexing included
    tokenizer: Box<dyn Tokenizer>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(WhitespaceTokenizer))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        InvertedIndex {
            keywords: HashMap::new(),
            tags: HashMap::new(),
            doc_count: 0,
            tokenizer,
        }
    }

    /// Indexes `article` under `id`.
    ///
    /// Title and content tokens are deduplicated within this call, so a
    /// keyword gets `id` appended once no matter how often it occurs in the
    /// article. Tags are appended once per entry in `article.tags`.
    pub fn update(&mut self, article: &Article, id: ArticleId) {
        let mut tokens = self.tokenizer.tokenize(&article.title);
        tokens.extend(self.tokenizer.tokenize(&article.content));

        let mut seen: HashSet<&str> = HashSet::new();
        for token in &tokens {
            if seen.insert(token.text.as_str()) {
                self.keywords
                    .entry(token.text.clone())
                    .or_default()
                    .push(id);
            }
        }

        for tag in &article.tags {
            self.tags.entry(tag.clone()).or_default().push(id);
        }

        self.doc_count += 1;
    }

    /// Ids indexed under `keyword`, in append order. Empty when absent.
    pub fn lookup_keyword(&self, keyword: &str) -> &[ArticleId] {
        self.keywords
            .get(keyword)
            .map(PostingList::as_slice)
            .unwrap_or(&[])
    }

    /// Ids indexed under `tag`, in append order. Empty when absent.
    pub fn lookup_tag(&self, tag: &str) -> &[ArticleId] {
        self.tags
            .get(tag)
            .map(PostingList::as_slice)
            .unwrap_or(&[])
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: u64, title: &str, content: &str, tags: &[&str]) -> Article {
        Article {
            id: ArticleId(id),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: Utc::now(),
        }
    }

    fn index_all(articles: &[Article]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for a in articles {
            index.update(a, a.id);
        }
        index
    }

    #[test]
    fn test_keyword_shared_by_title_and_content_is_indexed_once() {
        let index = index_all(&[article(1, "foo bar", "bar baz", &[])]);

        assert_eq!(index.lookup_keyword("bar"), &[ArticleId(1)]);
        assert_eq!(index.lookup_keyword("foo"), &[ArticleId(1)]);
        assert_eq!(index.lookup_keyword("baz"), &[ArticleId(1)]);
    }

    #[test]
    fn test_repeated_word_in_content_is_indexed_once() {
        let index = index_all(&[article(1, "x", "x x x", &[])]);
        assert_eq!(index.lookup_keyword("x"), &[ArticleId(1)]);
    }

    #[test]
    fn test_ids_append_in_insertion_order() {
        let index = index_all(&[
            article(1, "rust", "", &[]),
            article(2, "go", "", &[]),
            article(3, "rust", "again", &[]),
        ]);

        assert_eq!(index.lookup_keyword("rust"), &[ArticleId(1), ArticleId(3)]);
    }

    #[test]
    fn test_tags_are_indexed() {
        let index = index_all(&[article(1, "t", "c", &["tech", "news"])]);

        assert_eq!(index.lookup_tag("tech"), &[ArticleId(1)]);
        assert_eq!(index.lookup_tag("news"), &[ArticleId(1)]);
        // tags do not leak into keywords
        assert!(index.lookup_keyword("tech").is_empty());
    }

    #[test]
    fn test_repeated_tag_appends_per_occurrence() {
        let index = index_all(&[article(1, "t", "c", &["dup", "dup"])]);
        assert_eq!(index.lookup_tag("dup"), &[ArticleId(1), ArticleId(1)]);
    }

    #[test]
    fn test_update_same_article_twice_duplicates_ids() {
        let a = article(1, "once", "", &["t"]);
        let mut index = InvertedIndex::new();
        index.update(&a, a.id);
        index.update(&a, a.id);

        assert_eq!(index.lookup_keyword("once"), &[ArticleId(1), ArticleId(1)]);
        assert_eq!(index.lookup_tag("t"), &[ArticleId(1), ArticleId(1)]);
        assert_eq!(index.doc_count, 2);
    }

    #[test]
    fn test_empty_tokens_are_indexed() {
        let index = index_all(&[article(1, "a  b", "", &[])]);
        // "" from the double space and from the empty content, deduped
        assert_eq!(index.lookup_keyword(""), &[ArticleId(1)]);
    }

    #[test]
    fn test_case_is_preserved() {
        let index = index_all(&[article(1, "Rust", "", &[])]);
        assert_eq!(index.lookup_keyword("Rust"), &[ArticleId(1)]);
        assert!(index.lookup_keyword("rust").is_empty());
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let index = InvertedIndex::new();
        assert!(index.lookup_keyword("missing").is_empty());
        assert!(index.lookup_tag("missing").is_empty());
        assert_eq!(index.keyword_count(), 0);
        assert_eq!(index.tag_count(), 0);
        assert_eq!(index.doc_count, 0);
    }
}
