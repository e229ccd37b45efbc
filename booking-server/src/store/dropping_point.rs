/// Dropping-point store. Queries join the owning district so callers
/// always see the district name alongside the point.

use booking_core::DroppingPoint;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct DroppingPointStore {
    pool: SqlitePool,
}

fn from_row(row: &SqliteRow) -> Result<DroppingPoint, sqlx::Error> {
    Ok(DroppingPoint {
        id: row.try_get("id")?,
        district_id: row.try_get("district_id")?,
        district_name: row.try_get("district_name")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
    })
}

impl DroppingPointStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_district_name(
        &self,
        district_name: &str,
    ) -> Result<Vec<DroppingPoint>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT dp.id, dp.district_id, dp.name, dp.price, d.name AS district_name
             FROM dropping_points dp
             JOIN districts d ON dp.district_id = d.id
             WHERE d.name = ?",
        )
        .bind(district_name)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    /// Full price list across all districts, for the chat grounding context.
    pub async fn get_all(&self) -> Result<Vec<DroppingPoint>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT dp.id, dp.district_id, dp.name, dp.price, d.name AS district_name
             FROM dropping_points dp
             JOIN districts d ON dp.district_id = d.id
             ORDER BY d.name, dp.name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn create(
        &self,
        district_id: i64,
        name: &str,
        price: i64,
    ) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO dropping_points (district_id, name, price) VALUES (?, ?, ?)")
                .bind(district_id)
                .bind(name)
                .bind(price)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }
}
