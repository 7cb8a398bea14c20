//! Session reconciliation, rotation and revocation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::TokenPair;
use crate::errors::DomainResult;
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;

/// Session service tying the token service to the account store.
///
/// The store holds the single authoritative refresh credential per account;
/// every write here is an unconditional overwrite of that value.
pub struct SessionService<R: AccountRepository> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R: AccountRepository> SessionService<R> {
    /// Create a new session service
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Access to the underlying token service
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Resolves a request's presented credentials to an account, or none.
    ///
    /// Run once per request. Every failure branch is absorbed locally: an
    /// invalid, expired, mismatched or rotated-out credential yields `None`
    /// and the request proceeds anonymously. Store failures are downgraded
    /// to `None` as well, preserving availability for anonymous paths.
    pub async fn reconcile(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Option<Account> {
        // Valid access token short-circuits; the refresh token is not
        // consulted in this branch.
        if let Some(access) = access_token {
            if let Ok(claims) = self.tokens.verify_access(access) {
                return self.find_account(claims.id).await;
            }
        }

        let refresh = refresh_token?;

        let refresh_claims = match self.tokens.verify_refresh(refresh) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "refresh token rejected");
                return None;
            }
        };

        // A presented access token, even an expired one, must belong to the
        // same account as the refresh token. A token whose signature does
        // not validate carries no trustworthy id and is ignored here.
        if let Some(access) = access_token {
            if let Ok(access_claims) = self.tokens.decode_expired_access(access) {
                if access_claims.id != refresh_claims.id {
                    tracing::debug!("access/refresh token pairing mismatch");
                    return None;
                }
            }
        }

        let account = self.find_account(refresh_claims.id).await?;

        // The stored value is the single valid credential; a token that was
        // rotated out is rejected even though it is cryptographically valid.
        if account.refresh_token.as_deref() != Some(refresh) {
            tracing::debug!(account_id = %account.id, "refresh token does not match stored credential");
            return None;
        }

        Some(account)
    }

    /// Issues a brand-new credential pair and persists the refresh token.
    ///
    /// The previous stored credential is overwritten; any other session of
    /// the same account is invalidated on its next use. Persistence failure
    /// propagates: the caller must not answer with a credential pair that
    /// was not durably recorded.
    pub async fn rotate(&self, account: &Account) -> DomainResult<TokenPair> {
        let pair = self.tokens.issue_pair(account)?;

        self.repository
            .set_refresh_token(account.id, Some(&pair.refresh_token))
            .await?;

        tracing::debug!(account_id = %account.id, "session credentials rotated");
        Ok(pair)
    }

    /// Clears the stored refresh credential, ending the session.
    ///
    /// Afterwards every previously issued refresh token fails the store
    /// match until a new registration or login occurs.
    pub async fn revoke(&self, account_id: Uuid) -> DomainResult<()> {
        self.repository.set_refresh_token(account_id, None).await?;

        tracing::debug!(account_id = %account_id, "session revoked");
        Ok(())
    }

    async fn find_account(&self, id: Uuid) -> Option<Account> {
        match self.repository.find_by_id(id).await {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(error = %e, "account lookup failed during reconciliation");
                None
            }
        }
    }
}
