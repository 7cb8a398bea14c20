//! Account repository trait defining the interface for account persistence.
//!
//! This is the session store contract: besides plain entity access it owns
//! the one mutable piece of session state, the per-account stored refresh
//! credential. The trait is async-first and uses Result types for proper
//! error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations.
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
/// Lookups return the full account including the currently stored refresh
/// credential.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its login email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite the account's stored refresh credential.
    ///
    /// Unconditional last-write-wins; `None` clears the credential and ends
    /// the session. No optimistic concurrency check is performed.
    ///
    /// # Returns
    /// * `Ok(())` - Credential written
    /// * `Err(DomainError)` - Account missing or persistence failed
    async fn set_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Delete an account
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
