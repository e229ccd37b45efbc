/// Bus-provider store.

use booking_core::Provider;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct ProviderStore {
    pool: SqlitePool,
}

fn from_row(row: &SqliteRow) -> Result<Provider, sqlx::Error> {
    Ok(Provider {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        contact_info: row.try_get("contact_info")?,
        address: row.try_get("address")?,
        privacy_policy: row.try_get("privacy_policy")?,
    })
}

impl ProviderStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Provider>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, name, contact_info, address, privacy_policy
             FROM bus_providers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Provider>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, name, contact_info, address, privacy_policy
             FROM bus_providers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(from_row).transpose()
    }

    pub async fn get_serving_district(
        &self,
        district_name: &str,
    ) -> Result<Vec<Provider>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT DISTINCT bp.id, bp.name, bp.contact_info, bp.address, bp.privacy_policy
             FROM bus_providers bp
             JOIN provider_routes pr ON bp.id = pr.provider_id
             JOIN districts d ON pr.district_id = d.id
             WHERE d.name = ?",
        )
        .bind(district_name)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn create(
        &self,
        name: &str,
        contact_info: &str,
        address: &str,
        privacy_policy: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO bus_providers (name, contact_info, address, privacy_policy)
             VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(contact_info)
        .bind(address)
        .bind(privacy_policy)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
