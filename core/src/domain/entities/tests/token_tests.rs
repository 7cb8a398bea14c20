use chrono::Duration;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, TokenPair};

fn sample_account() -> Account {
    Account::new(
        "owner@bistro.example".to_string(),
        "Bistro Verde".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    )
}

#[test]
fn test_claims_carry_account_identity() {
    let account = sample_account();
    let claims = Claims::new(&account, Duration::minutes(15));

    assert_eq!(claims.id, account.id);
    assert_eq!(claims.email, account.email);
    assert_eq!(claims.name, account.name);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_expiry_window() {
    let account = sample_account();

    let live = Claims::new(&account, Duration::days(7));
    assert!(!live.is_expired());

    let expired = Claims::new(&account, Duration::minutes(-1));
    assert!(expired.is_expired());
}

#[test]
fn test_claims_serialization() {
    let account = sample_account();
    let claims = Claims::new(&account, Duration::minutes(15));

    let json = serde_json::to_string(&claims).unwrap();
    let deserialized: Claims = serde_json::from_str(&json).unwrap();

    assert_eq!(claims, deserialized);
}

#[test]
fn test_token_pair_creation() {
    let pair = TokenPair::new("access-jwt".to_string(), "refresh-jwt".to_string());

    assert_eq!(pair.access_token, "access-jwt");
    assert_eq!(pair.refresh_token, "refresh-jwt");
}
