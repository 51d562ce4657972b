//! Articledex walkthrough
//!
//! Creates a few articles, then runs keyword, tag and ranked searches and a
//! lookup by id through the service handlers.

use articledex::core::logging::init_logging;
use articledex::service::handlers::{
    create_article, get_article, search_articles, ErrorResponse, SearchParams,
};
use articledex::{Config, Database, NewArticle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_logging(&config.log_level)?;

    let db = Database::open(config);

    println!("Step 1: CREATE");
    for (title, content, tags) in [
        ("Rust Programming", "Learn Rust the Rust way", vec!["tech", "rust"]),
        ("Database Systems", "SQL and NoSQL databases", vec!["tech"]),
        ("Weekend News", "Rust meetup this weekend", vec!["news"]),
    ] {
        let response = create_article(&db, NewArticle::new(title, content).with_tags(tags))?;
        println!("  {} -> {}", response.message, serde_json::to_string(&response.article)?);
    }

    println!("\nStep 2: SEARCH");
    let ranked = search_articles(
        &db,
        SearchParams {
            keyword: Some("Rust".into()),
            tag: None,
            sort_by: Some("relevance".into()),
        },
    )?;
    for article in &ranked {
        println!("  [relevance] #{} {}", article.id, article.title);
    }

    let tagged = search_articles(
        &db,
        SearchParams {
            keyword: None,
            tag: Some("tech".into()),
            sort_by: Some("date".into()),
        },
    )?;
    for article in &tagged {
        println!("  [tag=tech, newest first] #{} {}", article.id, article.title);
    }

    println!("\nStep 3: GET");
    println!("  id 2 -> {}", get_article(&db, "2")?.title);
    match get_article(&db, "42") {
        Ok(article) => println!("  id 42 -> {}", article.title),
        Err(err) => println!("  id 42 -> {}", serde_json::to_string(&ErrorResponse::from(&err))?),
    }

    println!("\nStats: {}", serde_json::to_string_pretty(&db.stats())?);
    Ok(())
}
