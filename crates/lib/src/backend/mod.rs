//! Backend implementations for journalkeep storage
//!
//! This module provides the core [`KvStore`] trait and the backend
//! implementations organized by category.
//!
//! The store is minimal: string keys, string values, and three
//! operations. It has no collections, no indices and no multi-key atomicity.
//! Everything structured (the user registry, per-user blobs) is layered on top
//! by [`crate::user`] and [`crate::keyspace`].

use std::any::Any;

use async_trait::async_trait;

use crate::Result;

// Category modules
pub mod database;
pub mod errors;

pub use errors::BackendError;

/// Key-value store abstracting the underlying persistence medium.
///
/// Implementations must be `Send` and `Sync` so a single handle can be shared
/// by the registry, keyspace and session components, and implement `Any`
/// so callers can downcast to a concrete backend (e.g. to persist an
/// [`InMemory`](database::InMemory) store to disk).
#[async_trait]
pub trait KvStore: Send + Sync + Any {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored there. `Err` means the store
    /// could not answer, which is different from absence.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing anything already there.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Returns a reference to the store as `dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}
