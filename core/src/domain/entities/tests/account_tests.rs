use crate::domain::entities::account::Account;

fn sample_account() -> Account {
    Account::new(
        "owner@bistro.example".to_string(),
        "Bistro Verde".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    )
}

#[test]
fn test_new_account_has_no_session() {
    let account = sample_account();

    assert_eq!(account.email, "owner@bistro.example");
    assert_eq!(account.name, "Bistro Verde");
    assert!(account.refresh_token.is_none());
    assert!(!account.has_session());
}

#[test]
fn test_set_refresh_token_opens_session() {
    let mut account = sample_account();

    account.set_refresh_token("refresh-0".to_string());
    assert!(account.has_session());
    assert_eq!(account.refresh_token.as_deref(), Some("refresh-0"));
}

#[test]
fn test_set_refresh_token_overwrites_previous() {
    let mut account = sample_account();

    account.set_refresh_token("refresh-0".to_string());
    account.set_refresh_token("refresh-1".to_string());
    assert_eq!(account.refresh_token.as_deref(), Some("refresh-1"));
}

#[test]
fn test_clear_refresh_token_ends_session() {
    let mut account = sample_account();

    account.set_refresh_token("refresh-0".to_string());
    account.clear_refresh_token();
    assert!(!account.has_session());
    assert!(account.refresh_token.is_none());
}

#[test]
fn test_secrets_not_serialized() {
    let mut account = sample_account();
    account.set_refresh_token("refresh-0".to_string());

    let json = serde_json::to_string(&account).unwrap();
    assert!(!json.contains("password_hash"));
    assert!(!json.contains("refresh_token"));
    assert!(json.contains("owner@bistro.example"));
}
