//! The `Vault` service object.
//!
//! A `Vault` owns one store handle and one clock and hands them to the
//! registry, keyspace and session components. Everything a UI layer needs
//! goes through it; there is no process-wide state.

use std::sync::Arc;

use handle_trait::Handle;
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::{
    Clock, Lookup, Result, SystemClock,
    backend::KvStore,
    keyspace::{UserKeyspace, UserStats},
    user::{NewUser, SessionPointer, UserRecord, UserRegistry},
};

/// Internal state for Vault
///
/// Vault itself is just a cheap-to-clone handle wrapping `Arc<VaultInternal>`.
struct VaultInternal {
    backend: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    registry: UserRegistry,
    keyspace: UserKeyspace,
    session: SessionPointer,
}

/// Entry point to the user registry, per-user keyspaces and session.
///
/// Clones share the same store, clock and registry write lock.
#[derive(Clone, Handle)]
pub struct Vault {
    inner: Arc<VaultInternal>,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("clock", &self.inner.clock)
            .finish_non_exhaustive()
    }
}

impl Vault {
    /// Open a vault over `backend` using the system clock.
    ///
    /// ```
    /// # use journalkeep::{Vault, backend::database::InMemory};
    /// let vault = Vault::open(Box::new(InMemory::new()));
    /// ```
    pub fn open(backend: Box<dyn KvStore>) -> Self {
        Self::open_impl(backend, Arc::new(SystemClock))
    }

    /// Open a vault with a custom clock.
    ///
    /// Only available with the `testing` feature or in test builds.
    #[cfg(any(test, feature = "testing"))]
    pub fn open_with_clock(backend: Box<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self::open_impl(backend, clock)
    }

    fn open_impl(backend: Box<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        let backend: Arc<dyn KvStore> = Arc::from(backend);
        let inner = Arc::new(VaultInternal {
            registry: UserRegistry::new(backend.clone(), clock.clone()),
            keyspace: UserKeyspace::new(backend.clone()),
            session: SessionPointer::new(backend.clone()),
            backend,
            clock,
        });
        Self { inner }
    }

    /// The underlying store. Downcast through `as_any()` to reach
    /// backend-specific operations such as `InMemory::save_to_file`.
    pub fn backend(&self) -> &Arc<dyn KvStore> {
        &self.inner.backend
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.inner.clock
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.inner.registry
    }

    pub fn keyspace(&self) -> &UserKeyspace {
        &self.inner.keyspace
    }

    pub fn session(&self) -> &SessionPointer {
        &self.inner.session
    }

    // === Registry ===

    pub async fn get_all_users(&self) -> Vec<UserRecord> {
        self.inner.registry.get_all_users().await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<UserRecord> {
        self.inner.registry.find_user_by_email(email).await
    }

    pub async fn register_user(&self, candidate: NewUser) -> Result<UserRecord> {
        self.inner.registry.register_user(candidate).await
    }

    pub async fn authenticate_user(&self, email: &str, password: &str) -> Result<UserRecord> {
        self.inner.registry.authenticate_user(email, password).await
    }

    pub async fn update_user_last_login(&self, user_id: &str) -> Result<()> {
        self.inner.registry.update_user_last_login(user_id).await
    }

    // === Keyspace ===

    pub async fn save_user_data<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        data_type: &str,
        value: &T,
    ) -> Result<()> {
        self.inner
            .keyspace
            .save_user_data(user_id, data_type, value)
            .await
    }

    pub async fn load_user_data<T: DeserializeOwned>(
        &self,
        user_id: &str,
        data_type: &str,
    ) -> Option<T> {
        self.inner.keyspace.load_user_data(user_id, data_type).await
    }

    pub async fn lookup_user_data<T: DeserializeOwned>(
        &self,
        user_id: &str,
        data_type: &str,
    ) -> Lookup<T> {
        self.inner.keyspace.lookup_user_data(user_id, data_type).await
    }

    pub async fn get_user_stats(&self, user_id: &str) -> UserStats {
        self.inner.keyspace.get_user_stats(user_id).await
    }

    // === Session ===

    pub async fn set_current_user(&self, user: &UserRecord) -> Result<()> {
        self.inner.session.set_current_user(user).await
    }

    pub async fn get_current_user(&self) -> Option<UserRecord> {
        self.inner.session.get_current_user().await
    }

    pub async fn clear_user_session(&self) -> Result<()> {
        self.inner.session.clear_user_session().await
    }

    /// Authenticate and make the refreshed record the current session.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord> {
        let user = self.authenticate_user(email, password).await?;
        self.set_current_user(&user).await?;
        info!(user_id = %user.id(), "Logged in");
        Ok(user)
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<()> {
        self.clear_user_session().await
    }
}
