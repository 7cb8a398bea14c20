//! In-memory implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Mock account repository for testing.
///
/// Backed by a shared map so clones observe the same state. Can be switched
/// into a failing mode to exercise store-unavailable paths.
#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    failing: Arc<AtomicBool>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent operation fail with a database error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "mock repository unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Validation {
                message: "email already registered".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn set_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<&str>,
    ) -> Result<(), DomainError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;

        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        match refresh_token {
            Some(token) => account.set_refresh_token(token.to_string()),
            None => account.clear_refresh_token(),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }
}
