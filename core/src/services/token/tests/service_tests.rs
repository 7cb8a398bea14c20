use crate::domain::entities::account::Account;
use crate::errors::TokenError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn sample_account() -> Account {
    Account::new(
        "owner@bistro.example".to_string(),
        "Bistro Verde".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    )
}

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: "access-secret-for-tests".to_string(),
        refresh_secret: "refresh-secret-for-tests".to_string(),
        access_expiry_minutes: 15,
        refresh_expiry_days: 7,
    }
}

/// Config whose access tokens are already expired at issuance
fn expired_access_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_expiry_minutes: -5,
        ..test_config()
    }
}

#[test]
fn test_issued_access_token_verifies_inside_window() {
    let service = TokenService::new(test_config());
    let account = sample_account();

    let pair = service.issue_pair(&account).unwrap();
    let claims = service.verify_access(&pair.access_token).unwrap();

    assert_eq!(claims.id, account.id);
    assert_eq!(claims.email, account.email);
    assert_eq!(claims.name, account.name);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
}

#[test]
fn test_issued_refresh_token_verifies_inside_window() {
    let service = TokenService::new(test_config());
    let account = sample_account();

    let pair = service.issue_pair(&account).unwrap();
    let claims = service.verify_refresh(&pair.refresh_token).unwrap();

    assert_eq!(claims.id, account.id);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[test]
fn test_expired_access_token_returns_expired() {
    let service = TokenService::new(expired_access_config());
    let account = sample_account();

    let pair = service.issue_pair(&account).unwrap();
    assert_eq!(
        service.verify_access(&pair.access_token),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_wrong_secret_returns_invalid_signature() {
    let service = TokenService::new(test_config());
    let account = sample_account();
    let pair = service.issue_pair(&account).unwrap();

    // The two kinds are signed under distinct secrets, so cross-verifying
    // one kind against the other's key must fail on the signature and must
    // never yield partial claims.
    assert_eq!(
        service.verify_refresh(&pair.access_token),
        Err(TokenError::InvalidSignature)
    );
    assert_eq!(
        service.verify_access(&pair.refresh_token),
        Err(TokenError::InvalidSignature)
    );

    let other = TokenService::new(TokenServiceConfig {
        access_secret: "a-completely-different-secret".to_string(),
        ..test_config()
    });
    assert_eq!(
        other.verify_access(&pair.access_token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_garbage_token_is_malformed() {
    let service = TokenService::new(test_config());

    assert_eq!(
        service.verify_access("not-a-token"),
        Err(TokenError::Malformed)
    );
    assert_eq!(
        service.verify_refresh(""),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_decode_expired_access_recovers_claims() {
    let service = TokenService::new(expired_access_config());
    let account = sample_account();
    let pair = service.issue_pair(&account).unwrap();

    // Regular verification rejects the token, but the embedded id is still
    // recoverable for the reconciler's pairing check.
    assert_eq!(
        service.verify_access(&pair.access_token),
        Err(TokenError::Expired)
    );
    let claims = service.decode_expired_access(&pair.access_token).unwrap();
    assert_eq!(claims.id, account.id);
}

#[test]
fn test_decode_expired_access_still_checks_signature() {
    let service = TokenService::new(test_config());
    let other = TokenService::new(TokenServiceConfig {
        access_secret: "a-completely-different-secret".to_string(),
        ..test_config()
    });

    let pair = other.issue_pair(&sample_account()).unwrap();
    assert_eq!(
        service.decode_expired_access(&pair.access_token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_every_issuance_is_distinct() {
    let service = TokenService::new(test_config());
    let account = sample_account();

    let first = service.issue_pair(&account).unwrap();
    let second = service.issue_pair(&account).unwrap();

    // Even back-to-back within the same second, the pairs must differ so
    // that rotation always invalidates the previous refresh credential.
    assert_ne!(first.refresh_token, second.refresh_token);
    assert_ne!(first.access_token, second.access_token);

    let a = service.verify_access(&first.access_token).unwrap();
    let b = service.verify_access(&second.access_token).unwrap();
    assert_eq!(a.id, b.id);
    assert_ne!(a.jti, b.jti);
}
