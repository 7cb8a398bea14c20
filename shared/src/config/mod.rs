//! Environment-driven configuration.
//!
//! Every tunable the service needs is read once at startup and injected into
//! the components that use it; nothing reads process-wide state afterwards.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::{CookieConfig, TokenConfig};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub tokens: TokenConfig,
    pub cookie: CookieConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            tokens: TokenConfig::from_env(),
            cookie: CookieConfig::default(),
        }
    }
}
