/*!
 * Repository layer for article store operations.
 *
 * This module provides a high-level API for all database operations,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::StorageConnection;
use super::models::ArticleRecord;

/// Repository for article store operations
#[derive(Clone)]
pub struct ArticleRepository {
    /// Database connection
    db: StorageConnection,
}

impl ArticleRepository {
    /// Create a new repository with the given database connection
    pub fn new(db: StorageConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = StorageConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = StorageConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Insert a newly created article record
    pub async fn insert_article(&self, article: &ArticleRecord) -> Result<()> {
        let article = article.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO articles (
                        id, title, summary, content, original_srt, file_name, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    "#,
                    params![
                        article.id,
                        article.title,
                        article.summary,
                        article.content,
                        article.original_srt,
                        article.file_name,
                        article.created_at,
                    ],
                )?;
                debug!("Stored article {}", article.id);
                Ok(())
            })
            .await
    }

    /// Get an article by its identity
    pub async fn get_article(&self, article_id: &str) -> Result<Option<ArticleRecord>> {
        let article_id = article_id.to_string();

        self.db
            .execute_async(move |conn| Self::get_article_sync(conn, &article_id))
            .await
    }

    /// Get an article by its identity (synchronous version)
    fn get_article_sync(conn: &Connection, article_id: &str) -> Result<Option<ArticleRecord>> {
        let result = conn
            .query_row(
                r#"
                SELECT id, title, summary, content, original_srt, file_name, created_at
                FROM articles WHERE id = ?1
                "#,
                [article_id],
                Self::map_article_row,
            )
            .optional()?;

        Ok(result)
    }

    /// Enumerate all stored articles, newest first
    pub async fn list_articles(&self) -> Result<Vec<ArticleRecord>> {
        self.db
            .execute_async(|conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, title, summary, content, original_srt, file_name, created_at
                    FROM articles
                    ORDER BY CAST(id AS INTEGER) DESC
                    "#,
                )?;

                let articles = stmt
                    .query_map([], Self::map_article_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;

                Ok(articles)
            })
            .await
    }

    /// Remove an article by its identity
    ///
    /// Returns whether a row was removed; removing one article leaves the
    /// relative order of all others unchanged.
    pub async fn delete_article(&self, article_id: &str) -> Result<bool> {
        let article_id = article_id.to_string();

        self.db
            .execute_async(move |conn| {
                let removed = conn.execute("DELETE FROM articles WHERE id = ?1", [&article_id])?;
                if removed > 0 {
                    debug!("Deleted article {}", article_id);
                }
                Ok(removed > 0)
            })
            .await
    }

    /// Number of stored articles
    pub async fn count_articles(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }

    /// Map a database row to an ArticleRecord
    fn map_article_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ArticleRecord> {
        Ok(ArticleRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            summary: row.get(2)?,
            content: row.get(3)?,
            original_srt: row.get(4)?,
            file_name: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
