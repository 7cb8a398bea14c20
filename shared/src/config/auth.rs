//! Token signing and session cookie configuration

use serde::{Deserialize, Serialize};

/// Signing configuration for the paired bearer credentials.
///
/// Access and refresh tokens are signed under two independent secrets with
/// two independent lifetimes; both kinds carry the same claim set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret used to sign short-lived access tokens
    pub access_secret: String,

    /// Secret used to sign long-lived refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("dev-access-secret-change-in-production"),
            refresh_secret: String::from("dev-refresh-secret-change-in-production"),
            access_expiry_minutes: 15,
            refresh_expiry_days: 7,
        }
    }
}

impl TokenConfig {
    /// Load from `ACCESS_TOKEN_SECRET`, `REFRESH_TOKEN_SECRET`,
    /// `ACCESS_TOKEN_EXPIRY_MINUTES` and `REFRESH_TOKEN_EXPIRY_DAYS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_expiry_minutes: std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_expiry_minutes),
            refresh_expiry_days: std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_expiry_days),
        }
    }

    /// Check whether either secret is still a development default
    pub fn is_using_default_secret(&self) -> bool {
        let defaults = Self::default();
        self.access_secret == defaults.access_secret
            || self.refresh_secret == defaults.refresh_secret
    }
}

/// Attributes applied to the refresh token cookie.
///
/// The cookie carries no explicit expiry beyond the token's own embedded one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name carrying the refresh token
    pub name: String,

    /// HttpOnly flag
    pub http_only: bool,

    /// Secure flag (HTTPS only)
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refreshToken"),
            http_only: true,
            secure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.access_expiry_minutes, 15);
        assert_eq!(config.refresh_expiry_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_secrets_are_distinct() {
        let config = TokenConfig::default();
        assert_ne!(config.access_secret, config.refresh_secret);
    }

    #[test]
    fn test_cookie_config_default() {
        let config = CookieConfig::default();
        assert_eq!(config.name, "refreshToken");
        assert!(config.http_only);
        assert!(config.secure);
    }
}
