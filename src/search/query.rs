use serde::{Serialize, Deserialize};

/// Result ordering requested by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Relevance,
    Date,
    #[default]
    None,
}

impl SortBy {
    /// `"relevance"` and `"date"` select a ranking; any other value keeps
    /// index order.
    pub fn parse(value: &str) -> Self {
        match value {
            "relevance" => SortBy::Relevance,
            "date" => SortBy::Date,
            _ => SortBy::None,
        }
    }
}

/// A keyword or tag lookup with optional ordering.
///
/// The keyword wins when both are set. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub tag: Option<String>,
    pub sort_by: SortBy,
}

impl SearchQuery {
    pub fn keyword(keyword: &str) -> Self {
        SearchQuery {
            keyword: Some(keyword.to_string()),
            ..Default::default()
        }
    }

    pub fn tag(tag: &str) -> Self {
        SearchQuery {
            tag: Some(tag.to_string()),
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn active_keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_by() {
        assert_eq!(SortBy::parse("relevance"), SortBy::Relevance);
        assert_eq!(SortBy::parse("date"), SortBy::Date);
        assert_eq!(SortBy::parse("Date"), SortBy::None);
        assert_eq!(SortBy::parse(""), SortBy::None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let query = SearchQuery {
            keyword: Some(String::new()),
            tag: Some(String::new()),
            sort_by: SortBy::None,
        };
        assert_eq!(query.active_keyword(), None);
        assert_eq!(query.active_tag(), None);
        assert_eq!(SearchQuery::tag("news").active_tag(), Some("news"));
    }
}
