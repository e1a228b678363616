//! Round-trips, isolation between users, and side-effect-free loads.

use journalkeep::keyspace::{JournalEntry, user_data_key};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::helpers::{register, test_vault};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Milestone {
    title: String,
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Step {
    label: String,
    done: bool,
    notes: Option<String>,
}

#[tokio::test]
async fn test_round_trip_nested_records() {
    let (vault, _) = test_vault().await;
    let value = vec![Milestone {
        title: "Marathon".to_string(),
        steps: vec![
            Step {
                label: "5k".to_string(),
                done: true,
                notes: None,
            },
            Step {
                label: "10k".to_string(),
                done: false,
                notes: Some("knee".to_string()),
            },
        ],
    }];

    vault.save_user_data("u1", "milestones", &value).await.unwrap();
    let loaded: Option<Vec<Milestone>> = vault.load_user_data("u1", "milestones").await;
    assert_eq!(loaded, Some(value));
}

#[tokio::test]
async fn test_round_trip_empty_sequence() {
    let (vault, _) = test_vault().await;
    let empty: Vec<JournalEntry> = Vec::new();
    vault.save_user_data("u1", "entries", &empty).await.unwrap();

    let loaded: Option<Vec<JournalEntry>> = vault.load_user_data("u1", "entries").await;
    assert_eq!(loaded, Some(empty));
}

#[tokio::test]
async fn test_users_do_not_see_each_other() {
    let (vault, _) = test_vault().await;
    let u1 = register(&vault, "one@x.io").await;
    let u2 = register(&vault, "two@x.io").await;

    let v1 = json!([{"content": "mine"}]);
    let v2 = json!([{"content": "theirs"}, {"content": "also theirs"}]);
    vault.save_user_data(u1.id(), "entries", &v1).await.unwrap();
    vault.save_user_data(u2.id(), "entries", &v2).await.unwrap();

    let loaded: Option<serde_json::Value> = vault.load_user_data(u1.id(), "entries").await;
    assert_eq!(loaded, Some(v1));
    let loaded: Option<serde_json::Value> = vault.load_user_data(u2.id(), "entries").await;
    assert_eq!(loaded, Some(v2));
}

#[tokio::test]
async fn test_data_types_are_separate() {
    let (vault, _) = test_vault().await;
    vault.save_user_data("u1", "entries", &json!(["e"])).await.unwrap();
    vault.save_user_data("u1", "goals", &json!(["g"])).await.unwrap();

    let entries: Option<Vec<String>> = vault.load_user_data("u1", "entries").await;
    assert_eq!(entries, Some(vec!["e".to_string()]));
}

#[tokio::test]
async fn test_never_written_loads_none_without_writing() {
    let (vault, _) = test_vault().await;
    let key = user_data_key("nobody", "entries");

    for _ in 0..3 {
        let loaded: Option<Vec<JournalEntry>> = vault.load_user_data("nobody", "entries").await;
        assert!(loaded.is_none());
    }
    assert!(vault.backend().get_item(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unregistered_user_ids_are_accepted() {
    let (vault, _) = test_vault().await;
    vault
        .save_user_data("never-registered", "entries", &json!([]))
        .await
        .unwrap();
    assert!(vault.get_all_users().await.is_empty());
}
