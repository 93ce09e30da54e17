//! Prompt store — record lookup and navigation queries.
//!
//! DESIGN
//! ======
//! Route handlers talk to a `PromptStore` trait object so they can be tested
//! against an in-memory double. `PgPromptStore` is the production
//! implementation over the shared `PgPool`. Not-found is `Ok(None)`; only
//! query or connection failures surface as `StoreError`.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::PromptRecord;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Accessor seam for prompt records.
#[async_trait::async_trait]
pub trait PromptStore: Send + Sync {
    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    async fn get_by_id(&self, id: i64) -> Result<Option<PromptRecord>, StoreError>;

    /// Smallest id strictly greater than `after` whose structure is non-null.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    async fn next_id(&self, after: i64) -> Result<Option<i64>, StoreError>;

    /// A uniformly chosen id among records with a usable structure.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails.
    async fn random_id(&self) -> Result<Option<i64>, StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

const SELECT_PROMPT: &str = r"SELECT id, model_name, prompt, prompt_cn, image_url, source, source_id,
        search_keyword, structure,
        to_char(created_at, 'YYYY-MM-DD HH24:MI:SS') AS created_at,
        to_char(updated_at, 'YYYY-MM-DD HH24:MI:SS') AS updated_at
 FROM prompts WHERE id = $1";

pub struct PgPromptStore {
    pool: PgPool,
    /// Random picks skip records whose structure text is this short or shorter.
    min_structure_len: i32,
}

impl PgPromptStore {
    #[must_use]
    pub fn new(pool: PgPool, min_structure_len: i32) -> Self {
        Self { pool, min_structure_len }
    }
}

fn record_from_row(row: &PgRow) -> PromptRecord {
    let structure: Option<String> = row.get("structure");
    PromptRecord {
        id: row.get("id"),
        model_name: row.get("model_name"),
        prompt: row.get("prompt"),
        prompt_cn: row.get("prompt_cn"),
        image_url: row.get("image_url"),
        source: row.get("source"),
        source_id: row.get("source_id"),
        search_keyword: row.get("search_keyword"),
        structure: structure.map(serde_json::Value::String),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait::async_trait]
impl PromptStore for PgPromptStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<PromptRecord>, StoreError> {
        let row = sqlx::query(SELECT_PROMPT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    async fn next_id(&self, after: i64) -> Result<Option<i64>, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM prompts WHERE id > $1 AND structure IS NOT NULL ORDER BY id ASC LIMIT 1",
        )
        .bind(after)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn random_id(&self) -> Result<Option<i64>, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM prompts
             WHERE structure IS NOT NULL AND LENGTH(structure) > $1
             ORDER BY random()
             LIMIT 1",
        )
        .bind(self.min_structure_len)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
