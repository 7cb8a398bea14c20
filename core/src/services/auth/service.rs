//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::session::SessionService;

use super::password::{hash_password, verify_password};

/// Authentication service for the account lifecycle.
///
/// Registration and login both end in the same place as rotation: a fresh
/// credential pair is issued and its refresh token becomes the account's
/// single stored credential.
pub struct AuthService<R: AccountRepository> {
    repository: Arc<R>,
    sessions: Arc<SessionService<R>>,
}

impl<R: AccountRepository> AuthService<R> {
    /// Create a new authentication service
    pub fn new(repository: Arc<R>, sessions: Arc<SessionService<R>>) -> Self {
        Self {
            repository,
            sessions,
        }
    }

    /// Access to the session service
    pub fn sessions(&self) -> &SessionService<R> {
        &self.sessions
    }

    /// Register a new account and open its first session.
    ///
    /// # Returns
    ///
    /// * `Ok((Account, TokenPair))` - The created account and its credentials
    /// * `Err(DomainError)` - Email already registered or persistence failed
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> DomainResult<(Account, TokenPair)> {
        if self.repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        let password_hash = hash_password(password)?;
        let account = self
            .repository
            .create(Account::new(email.to_string(), name.to_string(), password_hash))
            .await?;

        let pair = self.sessions.rotate(&account).await?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok((account, pair))
    }

    /// Authenticate by email and password and open a session.
    ///
    /// Unknown email and wrong password produce the same error so that a
    /// caller cannot probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(Account, TokenPair)> {
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let pair = self.sessions.rotate(&account).await?;

        tracing::info!(account_id = %account.id, "account logged in");
        Ok((account, pair))
    }

    /// End the account's session by revoking the stored credential
    pub async fn logout(&self, account_id: Uuid) -> DomainResult<()> {
        self.sessions.revoke(account_id).await?;

        tracing::info!(account_id = %account_id, "account logged out");
        Ok(())
    }

    /// Delete the account outright.
    ///
    /// Destroying the record also destroys the stored credential, so every
    /// outstanding token dies with it.
    pub async fn delete_account(&self, account_id: Uuid) -> DomainResult<()> {
        let deleted = self.repository.delete(account_id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        tracing::info!(account_id = %account_id, "account deleted");
        Ok(())
    }
}
