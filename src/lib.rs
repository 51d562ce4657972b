pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod service;

pub use crate::core::config::Config;
pub use crate::core::database::Database;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Article, ArticleId, NewArticle};
pub use crate::search::query::{SearchQuery, SortBy};

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        ARTICLEDEX STRUCT ARCHITECTURE                     │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────┐
│  struct Database                                                         │
│  • config: Config                  // cache size, log level              │
│  • catalog: RwLock<Catalog>        // store + index, one lock            │
│  • query_cache: Option<QueryCache> // cleared on every insert            │
│  • query_count / write_count       // AtomicU64 metrics                  │
│                                                                          │
│  struct ArticleStore               struct Article                        │
│  • articles: Vec<Article>          • id: ArticleId(u64), 1-based         │
│  • next_id: u64                    • title, content: String              │
│                                    • tags: Vec<String>                   │
│                                    • date: DateTime<Utc>                 │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── INDEXING LAYER ────────────────────────────┐
│  struct InvertedIndex              struct PostingList                    │
│  • keywords: HashMap<String, PL>   • ids: Vec<ArticleId>  // append-only │
│  • tags: HashMap<String, PL>                                             │
│  • tokenizer: Box<dyn Tokenizer>   // WhitespaceTokenizer: split(' ')    │
└──────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── SEARCH LAYER ─────────────────────────────┐
│  struct SearchEngine<'a>           struct SearchQuery                    │
│  • store: &ArticleStore            • keyword / tag: Option<String>       │
│  • index: &InvertedIndex           • sort_by: Relevance | Date | None    │
│  • scorer: Box<dyn Scorer>         // OccurrenceScorer                   │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── SERVICE LAYER ─────────────────────────────┐
│  create_article / search_articles / get_article                          │
│  serde request + response types, id parsed from text                     │
└──────────────────────────────────────────────────────────────────────────┘
*/
