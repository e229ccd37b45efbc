/// Provider-route store (provider serves district, many-to-many).

use booking_core::RouteRecord;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct RouteStore {
    pool: SqlitePool,
}

fn from_row(row: &SqliteRow) -> Result<RouteRecord, sqlx::Error> {
    Ok(RouteRecord {
        id: row.try_get("id")?,
        provider_id: row.try_get("provider_id")?,
        district_id: row.try_get("district_id")?,
        provider_name: row.try_get("provider_name")?,
        district_name: row.try_get("district_name")?,
    })
}

impl RouteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<RouteRecord>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT pr.id, pr.provider_id, pr.district_id,
                    bp.name AS provider_name, d.name AS district_name
             FROM provider_routes pr
             JOIN bus_providers bp ON pr.provider_id = bp.id
             JOIN districts d ON pr.district_id = d.id
             ORDER BY pr.id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn create(&self, provider_id: i64, district_id: i64) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO provider_routes (provider_id, district_id) VALUES (?, ?)")
                .bind(provider_id)
                .bind(district_id)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }
}
