//! Request handling for the create, search and get-by-id operations.
//!
//! Transport agnostic: requests and responses are serde types, so any
//! front end (HTTP, CLI, a message queue) can decode into them and encode
//! the results as JSON.

use serde::{Serialize, Deserialize};
use crate::core::database::Database;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Article, ArticleId, NewArticle};
use crate::search::query::{SearchQuery, SortBy};

pub const CREATED_MESSAGE: &str = "Article added!";
pub const NOT_FOUND_MESSAGE: &str = "Article not found!";

pub type CreateArticleRequest = NewArticle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Search parameters as they arrive from a query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

impl SearchParams {
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            keyword: self.keyword,
            tag: self.tag,
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortBy::parse)
                .unwrap_or_default(),
        }
    }
}

/// Error body returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let message = match err.kind {
            ErrorKind::NotFound => NOT_FOUND_MESSAGE.to_string(),
            _ => err.to_string(),
        };
        ErrorResponse { message }
    }
}

pub fn create_article(db: &Database, request: CreateArticleRequest) -> Result<CreateArticleResponse> {
    let article = db.add_article(request)?;
    Ok(CreateArticleResponse {
        message: CREATED_MESSAGE.to_string(),
        article,
    })
}

/// Never fails for a missing keyword or tag; the result is just empty.
pub fn search_articles(db: &Database, params: SearchParams) -> Result<Vec<Article>> {
    db.search(&params.into_query())
}

/// Parses `id` as a decimal integer, then looks the article up.
pub fn get_article(db: &Database, id: &str) -> Result<Article> {
    let id = parse_article_id(id)?;
    db.get_article(id)
}

/// Any optionally signed run of decimal digits is a well-formed id. Zero,
/// negative and out-of-range values are well-formed but never exist.
pub fn parse_article_id(raw: &str) -> Result<ArticleId> {
    let text = raw.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new(
            ErrorKind::Parse,
            format!("invalid article id `{}`: not an integer", raw),
        ));
    }

    match digits.parse::<u64>() {
        Ok(value) if !negative && value > 0 => Ok(ArticleId(value)),
        _ => Err(Error::not_found(format!("Article {} not found", text))),
    }
}

/// Decodes a JSON create request.
pub fn create_article_json(db: &Database, body: &str) -> Result<CreateArticleResponse> {
    let request: CreateArticleRequest = serde_json::from_str(body)?;
    create_article(db, request)
}
