/// Seed-data loading.
/// Populates the catalog, routes and document corpus from a JSON data
/// file. Safe to re-run: records that already exist are skipped.

use anyhow::Result;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::store::{DistrictStore, DocumentStore, DroppingPointStore, ProviderStore, RouteStore};

#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub districts: Vec<SeedDistrict>,
    pub bus_providers: Vec<SeedProvider>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDistrict {
    pub name: String,
    pub dropping_points: Vec<SeedDroppingPoint>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDroppingPoint {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct SeedProvider {
    pub name: String,
    pub coverage_districts: Vec<String>,
    /// Free-text info sheet: privacy policy plus tagged contact and
    /// address lines. Also seeded into the document corpus.
    #[serde(default)]
    pub info: String,
}

/// Pull a "<marker> value" line out of an info sheet.
fn tagged_line(info: &str, marker: &str) -> String {
    info.lines()
        .find(|line| line.contains(marker))
        .map(|line| line.replace(marker, "").trim().to_string())
        .unwrap_or_default()
}

pub async fn run(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    let districts = DistrictStore::new(pool.clone());
    let dropping_points = DroppingPointStore::new(pool.clone());
    let providers = ProviderStore::new(pool.clone());
    let routes = RouteStore::new(pool.clone());
    let documents = DocumentStore::new(pool.clone());

    for district in &data.districts {
        if districts.get_by_name(&district.name).await?.is_some() {
            tracing::info!("[SEED] District {} already exists, skipping", district.name);
            continue;
        }
        let district_id = districts.create(&district.name).await?;
        tracing::info!("[SEED] Created district: {}", district.name);

        for dp in &district.dropping_points {
            dropping_points.create(district_id, &dp.name, dp.price).await?;
            tracing::info!("[SEED]   - Added dropping point: {} ({})", dp.name, dp.price);
        }
    }

    for provider in &data.bus_providers {
        if providers.get_by_name(&provider.name).await?.is_some() {
            tracing::info!("[SEED] Provider {} already exists, skipping", provider.name);
            continue;
        }

        let contact_info = tagged_line(&provider.info, "Contact Information:");
        let address = tagged_line(&provider.info, "Official Address:");

        let provider_id = providers
            .create(&provider.name, &contact_info, &address, &provider.info)
            .await?;
        tracing::info!("[SEED] Created provider: {}", provider.name);

        for district_name in &provider.coverage_districts {
            match districts.get_by_name(district_name).await? {
                Some(district) => {
                    routes.create(provider_id, district.id).await?;
                    tracing::info!("[SEED]   - Added route to: {}", district_name);
                }
                None => {
                    tracing::warn!(
                        "[SEED]   - Unknown district {} for provider {}",
                        district_name,
                        provider.name
                    );
                }
            }
        }

        if !provider.info.is_empty() {
            documents.create(&provider.name, &provider.info).await?;
            tracing::info!("[SEED]   - Added info document for {}", provider.name);
        }
    }

    Ok(())
}
