//! Token types for the paired bearer credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// Claims carried by both token kinds.
///
/// Access and refresh tokens carry the same claim set; only the signing
/// secret and the lifetime differ between the two kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub id: Uuid,

    /// Account email
    pub email: String,

    /// Account display name
    pub name: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Unique id of this token. Makes every issuance distinct, so rotation
    /// within the same second still invalidates the previous credential.
    pub jti: String,
}

impl Claims {
    /// Creates claims for an account with the given lifetime
    pub fn new(account: &Account, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Freshly issued credential pair.
///
/// Pairs are never persisted as such; only the refresh token's current value
/// is stored, as a field of the account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token, returned as a bearer header
    pub access_token: String,

    /// Long-lived refresh token, returned as an http-only cookie
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
