use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, MockAccountRepository};
use crate::services::session::SessionService;
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: "access-secret-for-tests".to_string(),
        refresh_secret: "refresh-secret-for-tests".to_string(),
        access_expiry_minutes: 15,
        refresh_expiry_days: 7,
    }
}

/// Access tokens come out already expired; refresh tokens stay valid
fn expired_access_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_expiry_minutes: -5,
        ..test_config()
    }
}

fn service_with(config: TokenServiceConfig) -> (SessionService<MockAccountRepository>, MockAccountRepository) {
    let repo = MockAccountRepository::new();
    let sessions = SessionService::new(
        Arc::new(repo.clone()),
        Arc::new(TokenService::new(config)),
    );
    (sessions, repo)
}

async fn registered_account(
    sessions: &SessionService<MockAccountRepository>,
    repo: &MockAccountRepository,
    email: &str,
) -> (Account, crate::domain::entities::token::TokenPair) {
    let account = Account::new(
        email.to_string(),
        "Bistro Verde".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    );
    repo.create(account.clone()).await.unwrap();
    let pair = sessions.rotate(&account).await.unwrap();
    let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
    (stored, pair)
}

#[tokio::test]
async fn test_no_tokens_resolves_to_none() {
    let (sessions, _repo) = service_with(test_config());
    assert!(sessions.reconcile(None, None).await.is_none());
}

#[tokio::test]
async fn test_valid_access_token_resolves_account() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    let resolved = sessions.reconcile(Some(&pair.access_token), None).await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_valid_access_token_ignores_refresh_token() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    // Rotated-out garbage in the refresh slot is irrelevant while the
    // access token alone resolves the identity.
    let resolved = sessions
        .reconcile(Some(&pair.access_token), Some("rotated-out-refresh"))
        .await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_valid_access_token_for_deleted_account() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    repo.delete(account.id).await.unwrap();
    assert!(sessions.reconcile(Some(&pair.access_token), None).await.is_none());
}

#[tokio::test]
async fn test_expired_access_token_alone_resolves_to_none() {
    let (sessions, repo) = service_with(expired_access_config());
    let (_, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    assert!(sessions.reconcile(Some(&pair.access_token), None).await.is_none());
}

#[tokio::test]
async fn test_expired_access_with_matching_refresh_resolves() {
    let (sessions, repo) = service_with(expired_access_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    let resolved = sessions
        .reconcile(Some(&pair.access_token), Some(&pair.refresh_token))
        .await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_refresh_token_alone_resolves() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    let resolved = sessions.reconcile(None, Some(&pair.refresh_token)).await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_invalid_refresh_token_resolves_to_none() {
    let (sessions, _repo) = service_with(test_config());
    assert!(sessions.reconcile(None, Some("not-a-token")).await.is_none());
}

#[tokio::test]
async fn test_foreign_access_token_pairing_is_rejected() {
    let (sessions, repo) = service_with(expired_access_config());
    let (_a, pair_a) = registered_account(&sessions, &repo, "owner@bistro.example").await;
    let (_b, pair_b) = registered_account(&sessions, &repo, "owner@trattoria.example").await;

    // An (expired) access token embedding account B's id must not ride on
    // account A's refresh token.
    let resolved = sessions
        .reconcile(Some(&pair_b.access_token), Some(&pair_a.refresh_token))
        .await;
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_unverifiable_access_token_does_not_block_refresh_path() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    // Signature-invalid access token carries no trustworthy id; the refresh
    // path stands on its own checks.
    let resolved = sessions
        .reconcile(Some("garbage-token"), Some(&pair.refresh_token))
        .await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_rotated_out_refresh_token_is_rejected() {
    let (sessions, repo) = service_with(test_config());
    let (account, old_pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    let new_pair = sessions.rotate(&account).await.unwrap();

    // The old token is cryptographically valid but no longer stored.
    assert!(sessions
        .reconcile(None, Some(&old_pair.refresh_token))
        .await
        .is_none());

    let resolved = sessions.reconcile(None, Some(&new_pair.refresh_token)).await;
    assert_eq!(resolved.map(|a| a.id), Some(account.id));
}

#[tokio::test]
async fn test_refresh_for_unknown_account_resolves_to_none() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    repo.delete(account.id).await.unwrap();
    assert!(sessions.reconcile(None, Some(&pair.refresh_token)).await.is_none());
}

#[tokio::test]
async fn test_store_failure_soft_fails_reconciliation() {
    let (sessions, repo) = service_with(test_config());
    let (_, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    repo.set_failing(true);
    assert!(sessions
        .reconcile(Some(&pair.access_token), Some(&pair.refresh_token))
        .await
        .is_none());
}

#[tokio::test]
async fn test_rotation_persists_the_new_credential() {
    let (sessions, repo) = service_with(test_config());
    let (account, _) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    let pair = sessions.rotate(&account).await.unwrap();
    let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(pair.refresh_token.as_str()));
}

#[tokio::test]
async fn test_rotation_surfaces_store_failure() {
    let (sessions, repo) = service_with(test_config());
    let (account, _) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    repo.set_failing(true);
    let result = sessions.rotate(&account).await;
    assert!(matches!(result, Err(DomainError::Database { .. })));
}

#[tokio::test]
async fn test_revocation_clears_stored_credential() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    sessions.revoke(account.id).await.unwrap();

    // The most recently issued refresh token no longer reconciles, but the
    // account itself still exists with a cleared credential.
    assert!(sessions.reconcile(None, Some(&pair.refresh_token)).await.is_none());
    let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.refresh_token.is_none());
}

#[tokio::test]
async fn test_revoke_unknown_account_fails() {
    let (sessions, _repo) = service_with(test_config());
    assert!(sessions.revoke(Uuid::new_v4()).await.is_err());
}

#[tokio::test]
async fn test_rotation_chain_end_to_end() {
    let (sessions, repo) = service_with(test_config());
    let (account, pair_0) = registered_account(&sessions, &repo, "owner@bistro.example").await;

    // Authenticated request: reconcile with R0, rotate to (A1, R1)
    let resolved = sessions.reconcile(None, Some(&pair_0.refresh_token)).await.unwrap();
    let pair_1 = sessions.rotate(&resolved).await.unwrap();

    // R0 is now dead, R1 is live
    assert!(sessions.reconcile(None, Some(&pair_0.refresh_token)).await.is_none());
    let resolved = sessions.reconcile(None, Some(&pair_1.refresh_token)).await.unwrap();
    assert_eq!(resolved.id, account.id);

    // Next rotation moves the chain forward again
    let pair_2 = sessions.rotate(&resolved).await.unwrap();
    assert!(sessions.reconcile(None, Some(&pair_1.refresh_token)).await.is_none());
    let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(pair_2.refresh_token.as_str()));
}
