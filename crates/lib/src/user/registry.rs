//! The user registry
//!
//! All user records live in one JSON array under [`USERS_KEY`]. The store has
//! no incremental update, so every mutation reloads the whole array, edits it
//! in memory and writes the whole array back.
//!
//! Mutations made through one `UserRegistry` (and its clones) are serialized
//! by an async mutex. Two registries over the same store, or two processes,
//! can still interleave their read-modify-write cycles and lose an update.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{
    errors::UserError,
    id::generate_user_id,
    types::{NewUser, UserRecord},
};
use crate::{
    Clock, Lookup, Result,
    backend::KvStore,
    blob,
    constants::USERS_KEY,
};

/// Registry of all users, backed by a single store key.
#[derive(Clone)]
pub struct UserRegistry {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    /// Serializes read-modify-write cycles on the registry blob
    write_lock: Arc<Mutex<()>>,
}

impl UserRegistry {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the registry, keeping absence and read failures apart.
    pub async fn load_users(&self) -> Lookup<Vec<UserRecord>> {
        blob::read(self.store.as_ref(), USERS_KEY).await
    }

    /// Every registered user, in insertion order.
    ///
    /// Returns an empty list if the registry has never been written or cannot
    /// be read.
    pub async fn get_all_users(&self) -> Vec<UserRecord> {
        self.load_users().await.unwrap_or_default()
    }

    /// Find a user by email, ignoring case and surrounding whitespace.
    pub async fn find_user_by_email(&self, email: &str) -> Option<UserRecord> {
        let wanted = email.trim();
        self.get_all_users()
            .await
            .into_iter()
            .find(|user| emails_match(user.email(), wanted))
    }

    /// Find a user by id.
    pub async fn find_user_by_id(&self, user_id: &str) -> Option<UserRecord> {
        self.get_all_users()
            .await
            .into_iter()
            .find(|user| user.id() == user_id)
    }

    /// Register a new user.
    ///
    /// Fails with [`UserError::DuplicateUser`] if the email is already taken
    /// (case-insensitively). On success the record gets a fresh id and both
    /// timestamps set to now, and the whole registry is written back.
    ///
    /// If the existing registry cannot be read, registration fails with that
    /// read error instead of overwriting the unreadable blob.
    pub async fn register_user(&self, candidate: NewUser) -> Result<UserRecord> {
        let email = normalize_email(&candidate.email)?;

        let _guard = self.write_lock.lock().await;
        let mut users = self.load_users().await.into_result()?.unwrap_or_default();

        if users.iter().any(|user| emails_match(user.email(), &email)) {
            return Err(UserError::DuplicateUser { email }.into());
        }

        let now = self.clock.now();
        let mut id = generate_user_id(now);
        while users.iter().any(|user| user.id() == id) {
            id = generate_user_id(now);
        }

        let record = UserRecord::new(id, candidate, email, now);
        users.push(record.clone());
        blob::write(self.store.as_ref(), USERS_KEY, &users).await?;

        info!(user_id = %record.id(), total_users = users.len(), "Registered user");
        Ok(record)
    }

    /// Look up an account by email and record the login.
    ///
    /// Fails with [`UserError::NoSuchAccount`] if the email is unknown.
    ///
    /// The password is NOT checked: any password is accepted once the account
    /// exists. This is identity lookup only and must be replaced by a salted
    /// hash comparison before it guards anything real.
    pub async fn authenticate_user(&self, email: &str, _password: &str) -> Result<UserRecord> {
        let Some(user) = self.find_user_by_email(email).await else {
            return Err(UserError::NoSuchAccount {
                email: email.trim().to_string(),
            }
            .into());
        };

        let refreshed = self.touch_last_login(user.id()).await?;
        info!(user_id = %user.id(), "User authenticated");
        Ok(refreshed.unwrap_or(user))
    }

    /// Set the user's `lastLogin` to now.
    ///
    /// Does nothing, and writes nothing, if no user has this id.
    pub async fn update_user_last_login(&self, user_id: &str) -> Result<()> {
        self.touch_last_login(user_id).await.map(|_| ())
    }

    /// Update `lastLogin` and return the updated record, or `None` if the id
    /// is unknown.
    async fn touch_last_login(&self, user_id: &str) -> Result<Option<UserRecord>> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load_users().await.into_result()?.unwrap_or_default();

        let Some(user) = users.iter_mut().find(|user| user.id() == user_id) else {
            debug!(user_id = %user_id, "Last-login update for unknown user ignored");
            return Ok(None);
        };
        user.touch_login(self.clock.now());
        let updated = user.clone();

        blob::write(self.store.as_ref(), USERS_KEY, &users).await?;
        Ok(Some(updated))
    }
}

/// Trim an email and reject it if nothing is left.
fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(UserError::InvalidEmail.into());
    }
    Ok(email.to_string())
}

/// Case-insensitive email comparison.
pub(crate) fn emails_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
