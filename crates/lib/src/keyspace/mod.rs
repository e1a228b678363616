//! Per-user keyspaces
//!
//! Each user's application data lives under composite keys of the form
//! `{USER_DATA_PREFIX}_{user_id}_{data_type}`. A blob is written whole and
//! read whole; there is no merge or append.
//!
//! The keyspace does not consult the registry. Any string is accepted as a
//! user id, so callers must not rely on the id belonging to a registered user.

pub mod records;
pub mod stats;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    Lookup, Result,
    backend::KvStore,
    blob,
    constants::{ENTRIES, GOALS, KEY_DELIMITER, USER_DATA_PREFIX},
};

pub use records::{Goal, JournalEntry};
pub use stats::UserStats;

/// Build the storage key for a user's blob of the given data type.
///
/// ```
/// assert_eq!(
///     journalkeep::keyspace::user_data_key("u1", "entries"),
///     "@journal_user_data_u1_entries"
/// );
/// ```
pub fn user_data_key(user_id: &str, data_type: &str) -> String {
    format!("{USER_DATA_PREFIX}{KEY_DELIMITER}{user_id}{KEY_DELIMITER}{data_type}")
}

#[derive(Clone)]
pub struct UserKeyspace {
    store: Arc<dyn KvStore>,
}

impl UserKeyspace {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Overwrite the user's `data_type` blob with `value`.
    pub async fn save_user_data<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        data_type: &str,
        value: &T,
    ) -> Result<()> {
        let key = user_data_key(user_id, data_type);
        blob::write(self.store.as_ref(), &key, value).await?;
        debug!(user_id = %user_id, data_type = %data_type, "Saved user data");
        Ok(())
    }

    /// Read the user's `data_type` blob.
    ///
    /// `None` if it was never written or cannot be read as `T`.
    pub async fn load_user_data<T: DeserializeOwned>(
        &self,
        user_id: &str,
        data_type: &str,
    ) -> Option<T> {
        self.lookup_user_data(user_id, data_type).await.into_option()
    }

    /// Read the user's `data_type` blob, keeping absence and read failures
    /// apart.
    pub async fn lookup_user_data<T: DeserializeOwned>(
        &self,
        user_id: &str,
        data_type: &str,
    ) -> Lookup<T> {
        blob::read(self.store.as_ref(), &user_data_key(user_id, data_type)).await
    }

    /// Aggregate counts over the user's entries and goals.
    ///
    /// Missing or unreadable blobs count as empty. Reads only.
    pub async fn get_user_stats(&self, user_id: &str) -> UserStats {
        let entries: Vec<JournalEntry> = self
            .load_user_data(user_id, ENTRIES)
            .await
            .unwrap_or_default();
        let goals: Vec<Goal> = self
            .load_user_data(user_id, GOALS)
            .await
            .unwrap_or_default();
        UserStats::compute(&entries, &goals)
    }
}
