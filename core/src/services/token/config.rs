//! Configuration for the token service

use tb_shared::config::TokenConfig;

/// Configuration for the token service.
///
/// Secrets and lifetimes are injected at construction; the service never
/// consults process-wide state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret for access tokens
    pub access_secret: String,
    /// Signing secret for refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime in minutes
    pub access_expiry_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(TokenConfig::default())
    }
}

impl From<TokenConfig> for TokenServiceConfig {
    fn from(config: TokenConfig) -> Self {
        Self {
            access_secret: config.access_secret,
            refresh_secret: config.refresh_secret,
            access_expiry_minutes: config.access_expiry_minutes,
            refresh_expiry_days: config.refresh_expiry_days,
        }
    }
}
