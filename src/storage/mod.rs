/*!
 * Storage module for persistent articles.
 *
 * This module provides SQLite-based persistence for generated articles:
 * lookup by identity, enumerate all, insert, remove. The store survives
 * process restarts; the article service only ever produces records, it
 * never mutates stored ones.
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::StorageConnection;
pub use models::ArticleRecord;
pub use repository::ArticleRepository;
