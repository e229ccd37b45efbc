/// District store.

use booking_core::District;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct DistrictStore {
    pool: SqlitePool,
}

fn from_row(row: &SqliteRow) -> Result<District, sqlx::Error> {
    Ok(District {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

impl DistrictStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<District>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, name FROM districts ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<District>, sqlx::Error> {
        let row = sqlx::query("SELECT id, name FROM districts WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(from_row).transpose()
    }

    pub async fn create(&self, name: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO districts (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }
}
