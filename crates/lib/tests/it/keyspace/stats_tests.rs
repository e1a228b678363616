//! Stats aggregation over entries and goals.

use journalkeep::{
    UserStats,
    constants::{ENTRIES, GOALS},
    keyspace::{Goal, JournalEntry},
};
use serde_json::json;

use crate::helpers::test_vault_with_user;

#[tokio::test]
async fn test_stats_scenario() {
    let (vault, _, user) = test_vault_with_user("s@x.io").await;
    vault
        .save_user_data(user.id(), ENTRIES, &json!([{"content": "a b c"}, {"content": null}]))
        .await
        .unwrap();
    vault
        .save_user_data(user.id(), GOALS, &json!([{"completed": true}, {"completed": false}]))
        .await
        .unwrap();

    assert_eq!(
        vault.get_user_stats(user.id()).await,
        UserStats {
            total_entries: 2,
            total_goals: 2,
            completed_goals: 1,
            total_words: 3,
        }
    );
}

#[tokio::test]
async fn test_stats_with_only_entries() {
    let (vault, _, user) = test_vault_with_user("s@x.io").await;
    let entries = vec![
        JournalEntry::new("Woke up early."),
        JournalEntry::new("  long   walk\tby the river "),
        JournalEntry::default(),
    ];
    vault.save_user_data(user.id(), ENTRIES, &entries).await.unwrap();

    let stats = vault.get_user_stats(user.id()).await;
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.total_words, 8);
    assert_eq!(stats.total_goals, 0);
    assert_eq!(stats.completed_goals, 0);
}

#[tokio::test]
async fn test_stats_ignore_unknown_fields() {
    let (vault, _, user) = test_vault_with_user("s@x.io").await;
    vault
        .save_user_data(
            user.id(),
            GOALS,
            &json!([
                {"id": "g1", "title": "read", "completed": true, "due": "2024-02-01"},
                {"id": "g2", "title": "write"}
            ]),
        )
        .await
        .unwrap();

    let stats = vault.get_user_stats(user.id()).await;
    assert_eq!(stats.total_goals, 2);
    assert_eq!(stats.completed_goals, 1);

    let goals: Vec<Goal> = vault.load_user_data(user.id(), GOALS).await.unwrap();
    assert_eq!(goals[0].extra["title"], "read");
}

#[tokio::test]
async fn test_stats_do_not_write() {
    let (vault, _, user) = test_vault_with_user("s@x.io").await;
    let before = vault.get_all_users().await;
    vault.get_user_stats(user.id()).await;
    let entries: Option<Vec<JournalEntry>> = vault.load_user_data(user.id(), ENTRIES).await;
    assert!(entries.is_none());
    assert_eq!(vault.get_all_users().await, before);
}
