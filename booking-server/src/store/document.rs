/// Document store: the free-text corpus behind the chat assistant.
/// Search is literal substring matching via LIKE, by design.

use booking_core::Document;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

fn from_row(row: &SqliteRow) -> Result<Document, sqlx::Error> {
    Ok(Document {
        id: row.try_get("id")?,
        provider_name: row.try_get("provider_name")?,
        content: row.try_get("content")?,
    })
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Document>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, provider_name, content FROM bus_documents")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(from_row).collect()
    }

    /// Substring search over document content, capped at `limit` results.
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Document>, sqlx::Error> {
        let pattern = format!("%{}%", term);
        let rows = sqlx::query(
            "SELECT id, provider_name, content FROM bus_documents WHERE content LIKE ? LIMIT ?",
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn create(&self, provider_name: &str, content: &str) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO bus_documents (provider_name, content) VALUES (?, ?)")
                .bind(provider_name)
                .bind(content)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }
}
