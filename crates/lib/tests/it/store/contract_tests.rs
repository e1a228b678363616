//! Every backend must honor the same get/set/remove contract.

use journalkeep::backend::{KvStore, database::InMemory};

use crate::helpers::test_backend;

async fn assert_contract(store: &dyn KvStore) {
    assert_eq!(store.get_item("missing").await.unwrap(), None);

    store.set_item("k", "\"v1\"").await.unwrap();
    assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("\"v1\""));

    store.set_item("k", "\"v2\"").await.unwrap();
    assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("\"v2\""));

    store.remove_item("k").await.unwrap();
    assert_eq!(store.get_item("k").await.unwrap(), None);

    // Removing again is fine
    store.remove_item("k").await.unwrap();
}

#[tokio::test]
async fn test_in_memory_contract() {
    assert_contract(&InMemory::new()).await;
}

#[tokio::test]
async fn test_configured_backend_contract() {
    let store = test_backend().await;
    assert_contract(store.as_ref()).await;
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_contract() {
    let store = journalkeep::backend::database::Sqlite::in_memory()
        .await
        .unwrap();
    assert_contract(&store).await;
}

#[tokio::test]
async fn test_values_round_trip_exactly() {
    let store = test_backend().await;
    let text = "{\"content\":\"línea 1\\nline 2\",\"tags\":[\"ü\",\"😀\"]}";
    store.set_item("exact", text).await.unwrap();
    assert_eq!(store.get_item("exact").await.unwrap().as_deref(), Some(text));
}
