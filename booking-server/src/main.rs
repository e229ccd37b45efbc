/// Bus Booking System - HTTP API server
/// District/provider/route catalog, booking lifecycle and a chat
/// assistant grounded in catalog data, with keyword fallback when no
/// completion-service credential is configured.

use anyhow::Result;
use booking_server::chat::ChatAssistant;
use booking_server::config::AppConfig;
use booking_server::http::{router, AppState};
use booking_server::db;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;
    tracing::info!("[INIT] Database initialized at {}", config.database_url);

    let chat = ChatAssistant::new(&config, pool.clone());
    let state = AppState::new(pool, chat);
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("[STARTUP] Bus Booking System API running on http://{}", addr);
    if config.groq_api_key.is_some() {
        tracing::info!("[STARTUP] Chat assistant: grounded mode (model {})", config.groq_model);
    } else {
        tracing::info!("[STARTUP] Chat assistant: keyword fallback mode");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
