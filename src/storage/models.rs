/*!
 * Persisted entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::providers::GeneratedArticle;

/// Last identity issued, kept to guarantee uniqueness when two records are
/// minted within the same millisecond
static LAST_ID_MS: AtomicI64 = AtomicI64::new(0);

/// Mint a record identity from the creation instant.
///
/// Identities are millisecond timestamps, bumped past the previously issued
/// value so they stay unique and monotonically increasing within a process.
fn mint_id_ms() -> i64 {
    let mut last = LAST_ID_MS.load(Ordering::SeqCst);
    loop {
        let now = chrono::Utc::now().timestamp_millis();
        let candidate = now.max(last + 1);
        match LAST_ID_MS.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Persisted article record
///
/// Created exactly once per successful generation and immutable thereafter;
/// removed only by explicit user deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Unique identity derived from the creation time (millisecond timestamp)
    pub id: String,
    /// Article title
    pub title: String,
    /// 3-5 sentence abstract
    pub summary: String,
    /// Article prose with section and paragraph markup
    pub content: String,
    /// Raw subtitle text the article was generated from
    pub original_srt: String,
    /// Name of the source subtitle file
    pub file_name: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl ArticleRecord {
    /// Assemble a new record from a generated article, minting a fresh
    /// identity and creation timestamp
    pub fn new(generated: GeneratedArticle, file_name: String, original_srt: String) -> Self {
        Self {
            id: mint_id_ms().to_string(),
            title: generated.title,
            summary: generated.summary,
            content: generated.content,
            original_srt,
            file_name,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
