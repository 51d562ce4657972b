use serde::{Serialize, Deserialize};
use crate::core::types::ArticleId;

/// Ordered, append-only list of article ids for one index key.
///
/// Ids keep insertion order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub ids: Vec<ArticleId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { ids: Vec::new() }
    }

    pub fn push(&mut self, id: ArticleId) {
        self.ids.push(id);
    }

    pub fn as_slice(&self) -> &[ArticleId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut list = PostingList::new();
        list.push(ArticleId(3));
        list.push(ArticleId(1));
        list.push(ArticleId(3));

        assert_eq!(list.as_slice(), &[ArticleId(3), ArticleId(1), ArticleId(3)]);
    }
}
