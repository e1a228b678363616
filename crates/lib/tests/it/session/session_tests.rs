//! The current-user snapshot: set, get, clear.

use journalkeep::constants::CURRENT_USER_KEY;
use serde_json::json;

use crate::helpers::{register, test_vault, test_vault_with_user};

#[tokio::test]
async fn test_no_session_initially() {
    let (vault, _) = test_vault().await;
    assert!(vault.get_current_user().await.is_none());
}

#[tokio::test]
async fn test_set_get_clear() {
    let (vault, _, user) = test_vault_with_user("a@b.com").await;

    vault.set_current_user(&user).await.unwrap();
    assert_eq!(vault.get_current_user().await, Some(user.clone()));

    vault.clear_user_session().await.unwrap();
    assert!(vault.get_current_user().await.is_none());

    // Clearing the session leaves the registry alone
    assert_eq!(vault.get_all_users().await, vec![user]);
}

#[tokio::test]
async fn test_clear_without_session_is_ok() {
    let (vault, _) = test_vault().await;
    vault.clear_user_session().await.unwrap();
    assert!(vault.get_current_user().await.is_none());
}

#[tokio::test]
async fn test_set_replaces_previous_user() {
    let (vault, _) = test_vault().await;
    let first = register(&vault, "first@x.io").await;
    let second = register(&vault, "second@x.io").await;

    vault.set_current_user(&first).await.unwrap();
    vault.set_current_user(&second).await.unwrap();
    assert_eq!(vault.get_current_user().await, Some(second));
}

#[tokio::test]
async fn test_snapshot_is_not_live() {
    let (vault, clock, user) = test_vault_with_user("a@b.com").await;
    vault.set_current_user(&user).await.unwrap();

    clock.advance(60_000);
    let refreshed = vault.authenticate_user("a@b.com", "pw").await.unwrap();
    assert!(refreshed.last_login > user.last_login);

    // The stored snapshot still carries the old lastLogin
    let current = vault.get_current_user().await.unwrap();
    assert_eq!(current.last_login, user.last_login);

    vault.set_current_user(&refreshed).await.unwrap();
    assert_eq!(vault.get_current_user().await, Some(refreshed));
}

#[tokio::test]
async fn test_snapshot_keeps_profile_fields() {
    let (vault, _, user) = test_vault_with_user("a@b.com").await;
    let mut user = user;
    user.profile.insert("theme".to_string(), json!("dark"));
    vault.set_current_user(&user).await.unwrap();

    let raw = vault
        .backend()
        .get_item(CURRENT_USER_KEY)
        .await
        .unwrap()
        .unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["theme"], "dark");
    assert_eq!(stored["email"], "a@b.com");

    assert_eq!(vault.get_current_user().await, Some(user));
}

#[tokio::test]
async fn test_corrupt_snapshot_reads_as_no_session() {
    let (vault, _) = test_vault().await;
    vault
        .backend()
        .set_item(CURRENT_USER_KEY, "{not json")
        .await
        .unwrap();

    assert!(vault.get_current_user().await.is_none());
    assert!(vault.session().lookup_current_user().await.is_read_error());
}
