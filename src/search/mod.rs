pub mod executor;
pub mod query;
