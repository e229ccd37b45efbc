/// Service configuration resolved once at startup from the environment.

use anyhow::Result;

/// Placeholder value shipped in .env templates. Treated the same as an
/// absent key: the chat assistant runs in fallback mode.
pub const API_KEY_PLACEHOLDER: &str = "gsk_your_groq_api_key_here";

/// Immutable service configuration. Whether a completion-service
/// credential is configured is decided here, once, for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    /// None when unset or equal to the placeholder sentinel.
    pub groq_api_key: Option<String>,
    pub groq_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://busbooking.db?mode=rwc".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()?;

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != API_KEY_PLACEHOLDER);

        let groq_model = std::env::var("GROQ_MODEL")
            .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        Ok(Self {
            database_url,
            port,
            groq_api_key,
            groq_model,
        })
    }
}
