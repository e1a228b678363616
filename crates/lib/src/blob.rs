//! Whole-blob JSON reads and writes over a [`KvStore`].
//!
//! Every structured value this crate keeps (the registry, the session
//! snapshot, per-user data) is one JSON document under one key. Reads and
//! writes always move the whole document.
//!
//! Reads distinguish three outcomes through [`Lookup`]. Writes return `Err`
//! on any failure.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{Error, Result, backend::KvStore};

/// Outcome of reading a blob from the store.
///
/// `Absent` and `ReadError` are kept apart so callers can default on the
/// first and alert on the second. [`Lookup::into_option`] collapses both into
/// `None`, which is the behavior of the plain `get`/`load` operations.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The key held a value that deserialized cleanly.
    Found(T),
    /// Nothing is stored under the key.
    Absent,
    /// The store failed, or the stored text did not deserialize.
    ReadError(Error),
}

impl<T> Lookup<T> {
    /// Collapse absence and read failures into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent | Lookup::ReadError(_) => None,
        }
    }

    /// Surface read failures as `Err`, keeping absence as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Lookup::Found(value) => Ok(Some(value)),
            Lookup::Absent => Ok(None),
            Lookup::ReadError(err) => Err(err),
        }
    }

    /// Returns the found value, or `T::default()` otherwise.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Absent => Lookup::Absent,
            Lookup::ReadError(err) => Lookup::ReadError(err),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_read_error(&self) -> bool {
        matches!(self, Lookup::ReadError(_))
    }
}

/// Read and deserialize the JSON document stored under `key`.
///
/// Absence is logged at debug level; failures are logged at warn level so a
/// swallowed read error is never silent in the logs.
pub(crate) async fn read<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Lookup<T> {
    let text = match store.get_item(key).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(key = %key, "No value stored");
            return Lookup::Absent;
        }
        Err(err) => {
            warn!(key = %key, error = %err, "Store read failed");
            return Lookup::ReadError(err);
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Lookup::Found(value),
        Err(err) => {
            warn!(key = %key, error = %err, "Stored value is not readable");
            Lookup::ReadError(err.into())
        }
    }
}

/// Serialize `value` and write it under `key`, replacing what was there.
pub(crate) async fn write<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let text = serde_json::to_string(value)?;
    store.set_item(key, &text).await
}
