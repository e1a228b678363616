//! Reads fail quietly into empty results; writes fail loudly.

use journalkeep::{Lookup, NewUser};

use crate::helpers::{failing_store, failing_vault, register};

#[tokio::test]
async fn test_failed_reads_look_like_absence() {
    let vault = failing_vault();
    let user = register(&vault, "a@b.com").await;
    vault
        .save_user_data(user.id(), "entries", &vec![1, 2, 3])
        .await
        .unwrap();
    vault.set_current_user(&user).await.unwrap();

    failing_store(&vault).fail_reads(true);

    assert!(vault.get_all_users().await.is_empty());
    assert!(vault.find_user_by_email("a@b.com").await.is_none());
    assert!(vault.get_current_user().await.is_none());
    let entries: Option<Vec<u32>> = vault.load_user_data(user.id(), "entries").await;
    assert!(entries.is_none());
    assert_eq!(vault.get_user_stats(user.id()).await.total_entries, 0);
}

#[tokio::test]
async fn test_lookup_tells_read_errors_from_absence() {
    let vault = failing_vault();
    let user = register(&vault, "a@b.com").await;

    let never_written: Lookup<Vec<u32>> = vault.lookup_user_data(user.id(), "goals").await;
    assert!(never_written.is_absent());

    failing_store(&vault).fail_reads(true);
    let failed: Lookup<Vec<u32>> = vault.lookup_user_data(user.id(), "goals").await;
    assert!(failed.is_read_error());
    assert!(failed.into_result().unwrap_err().is_database_error());
}

#[tokio::test]
async fn test_failed_writes_are_errors() {
    let vault = failing_vault();
    let user = register(&vault, "a@b.com").await;
    failing_store(&vault).fail_writes(true);

    let err = vault
        .save_user_data(user.id(), "entries", &vec!["x"])
        .await
        .unwrap_err();
    assert!(err.is_database_error());

    assert!(vault.set_current_user(&user).await.is_err());
    assert!(vault.clear_user_session().await.is_err());
    assert!(
        vault
            .register_user(NewUser::new("c@d.com", "C"))
            .await
            .unwrap_err()
            .is_database_error()
    );
    assert!(vault.authenticate_user("a@b.com", "pw").await.is_err());

    // Nothing was written by the failed calls
    failing_store(&vault).fail_writes(false);
    assert_eq!(vault.get_all_users().await.len(), 1);
}

#[tokio::test]
async fn test_registration_does_not_clobber_unreadable_registry() {
    let vault = failing_vault();
    register(&vault, "a@b.com").await;

    failing_store(&vault).fail_reads(true);
    let err = vault
        .register_user(NewUser::new("c@d.com", "C"))
        .await
        .unwrap_err();
    assert!(err.is_database_error());

    failing_store(&vault).fail_reads(false);
    let users = vault.get_all_users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email(), "a@b.com");
}
