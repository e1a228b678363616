//! The session pointer
//!
//! A snapshot of the currently authenticated user, stored under
//! [`CURRENT_USER_KEY`]. It is a copy: later changes to the registry record
//! (such as a new `lastLogin`) do not show up here until the caller stores
//! the record again.

use std::sync::Arc;

use tracing::debug;

use super::types::UserRecord;
use crate::{Lookup, Result, backend::KvStore, blob, constants::CURRENT_USER_KEY};

#[derive(Clone)]
pub struct SessionPointer {
    store: Arc<dyn KvStore>,
}

impl SessionPointer {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Replace the session snapshot with `user`.
    pub async fn set_current_user(&self, user: &UserRecord) -> Result<()> {
        blob::write(self.store.as_ref(), CURRENT_USER_KEY, user).await?;
        debug!(user_id = %user.id(), "Session set");
        Ok(())
    }

    /// The current session snapshot, or `None` if nobody is logged in or the
    /// snapshot cannot be read.
    pub async fn get_current_user(&self) -> Option<UserRecord> {
        self.lookup_current_user().await.into_option()
    }

    pub async fn lookup_current_user(&self) -> Lookup<UserRecord> {
        blob::read(self.store.as_ref(), CURRENT_USER_KEY).await
    }

    /// Remove the session snapshot. The registry and per-user data are left
    /// alone.
    pub async fn clear_user_session(&self) -> Result<()> {
        self.store.remove_item(CURRENT_USER_KEY).await?;
        debug!("Session cleared");
        Ok(())
    }
}
