//! Registration: uniqueness, id generation, and what gets stored.

use std::collections::HashSet;

use journalkeep::{Error, NewUser, UserError, constants::USERS_KEY};

use crate::helpers::{register, test_vault};

#[tokio::test]
async fn test_register_then_find() {
    let (vault, _) = test_vault().await;
    let user = register(&vault, "alice@example.com").await;

    let found = vault.find_user_by_email("alice@example.com").await.unwrap();
    assert_eq!(found, user);
    assert_eq!(found.name, "alice");
}

#[tokio::test]
async fn test_uppercase_duplicate_rejected() {
    let (vault, _) = test_vault().await;
    register(&vault, "a@b.com").await;

    let err = vault
        .register_user(NewUser::new("A@B.com", "Shouty"))
        .await
        .unwrap_err();
    match err {
        Error::User(UserError::DuplicateUser { email }) => assert_eq!(email, "A@B.com"),
        other => panic!("Expected DuplicateUser, got {other:?}"),
    }
}

#[tokio::test]
async fn test_many_registrations_keep_emails_unique() {
    let (vault, _) = test_vault().await;
    let attempts = [
        "one@x.io", "ONE@x.io", "two@x.io", "Two@X.io", "three@x.io", "one@X.IO",
    ];

    let mut succeeded = 0;
    for email in attempts {
        match vault.register_user(NewUser::new(email, "n")).await {
            Ok(_) => succeeded += 1,
            Err(err) => assert!(err.is_conflict()),
        }
    }
    assert_eq!(succeeded, 3);

    let users = vault.get_all_users().await;
    let lowered: HashSet<String> = users.iter().map(|u| u.email().to_lowercase()).collect();
    assert_eq!(lowered.len(), users.len());
}

#[tokio::test]
async fn test_ids_are_unique_and_order_is_preserved() {
    let (vault, _) = test_vault().await;
    let emails: Vec<String> = (0..20).map(|i| format!("user{i}@x.io")).collect();
    for email in &emails {
        register(&vault, email).await;
    }

    let users = vault.get_all_users().await;
    let ids: HashSet<&str> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids.len(), 20);

    let stored: Vec<&str> = users.iter().map(|u| u.email()).collect();
    let expected: Vec<&str> = emails.iter().map(String::as_str).collect();
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn test_profile_fields_are_stored() {
    let (vault, _) = test_vault().await;
    let user = vault
        .register_user(
            NewUser::new("p@x.io", "P")
                .with_profile_field("timezone", "UTC")
                .with_profile_field("onboarded", false),
        )
        .await
        .unwrap();

    let raw = vault.backend().get_item(USERS_KEY).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], user.id());
    assert_eq!(json[0]["timezone"], "UTC");
    assert_eq!(json[0]["onboarded"], false);
    assert!(json[0]["createdAt"].is_string());
}
