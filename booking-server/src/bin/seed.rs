/// Seeding binary
/// Creates the schema and loads catalog, route and document seed data
/// from a JSON file (SEED_DATA_PATH, default data/seed.json).

use anyhow::{Context, Result};
use booking_server::seed::{self, SeedData};
use booking_server::{config::AppConfig, db};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env()?;
    let data_path =
        std::env::var("SEED_DATA_PATH").unwrap_or_else(|_| "booking-server/data/seed.json".to_string());

    let raw = std::fs::read_to_string(&data_path)
        .with_context(|| format!("failed to read seed data from {}", data_path))?;
    let data: SeedData =
        serde_json::from_str(&raw).with_context(|| format!("invalid seed data in {}", data_path))?;

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;
    tracing::info!("[SEED] Schema ready at {}", config.database_url);

    seed::run(&pool, &data).await?;
    tracing::info!("[SEED] Seeding complete");

    Ok(())
}
