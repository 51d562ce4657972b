use crate::core::types::Article;

/// Scorer trait
pub trait Scorer: Send + Sync {
    fn score(&self, article: &Article, keyword: &str) -> u64;

    fn name(&self) -> &str;
}

/// Relevance as raw occurrence count of the keyword.
///
/// Counts non-overlapping literal matches in the title plus those in the
/// content. Matches are substrings, not tokens: "cat" counts inside
/// "concatenate", and a multi-word keyword counts as a phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceScorer;

impl Scorer for OccurrenceScorer {
    fn score(&self, article: &Article, keyword: &str) -> u64 {
        count_occurrences(&article.title, keyword) + count_occurrences(&article.content, keyword)
    }

    fn name(&self) -> &str {
        "occurrence"
    }
}

/// Number of non-overlapping occurrences of `pattern` in `text`, scanning
/// left to right. An empty pattern matches between every pair of chars.
pub fn count_occurrences(text: &str, pattern: &str) -> u64 {
    if pattern.is_empty() {
        return text.chars().count().saturating_sub(1) as u64;
    }
    text.matches(pattern).count() as u64
}
