pub mod types;
pub mod store;
pub mod database;
pub mod config;
pub mod error;
pub mod logging;
pub mod stats;
