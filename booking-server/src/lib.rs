/// Booking server library
/// Exposes the service wiring for the HTTP binary, the seeding binary
/// and the integration tests.

pub mod chat;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod llm;
pub mod seed;
pub mod store;

pub use chat::ChatAssistant;
pub use config::AppConfig;
pub use error::ApiError;
