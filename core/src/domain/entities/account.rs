//! Account entity representing a registered business operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business operator account.
///
/// The account record is the authoritative holder of the session state: at
/// most one refresh credential is valid for an account at any time, and its
/// value lives in `refresh_token`. Rotation overwrites it in place; logout
/// and deletion clear it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Login email, unique across accounts
    pub email: String,

    /// Display name of the business
    pub name: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// The single currently valid refresh credential, if a session exists
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance with no active session
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored refresh credential
    pub fn set_refresh_token(&mut self, token: String) {
        self.refresh_token = Some(token);
        self.updated_at = Utc::now();
    }

    /// Clears the stored refresh credential, ending the session
    pub fn clear_refresh_token(&mut self) {
        self.refresh_token = None;
        self.updated_at = Utc::now();
    }

    /// Checks whether the account has an active session
    pub fn has_session(&self) -> bool {
        self.refresh_token.is_some()
    }
}
