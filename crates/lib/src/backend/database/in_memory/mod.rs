//! In-memory database backend implementation
//!
//! This module provides an in-memory implementation of the [`KvStore`] trait,
//! suitable for testing, development, or scenarios where persistence is
//! handled by snapshotting the whole store to a JSON file.

mod persistence;

use std::any::Any;
use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Result;
use crate::backend::KvStore;

/// A simple in-memory store using a `BTreeMap` for storage.
///
/// It provides basic persistence capabilities via `save_to_file` and
/// `load_from_file`, serializing the whole map to JSON.
#[derive(Debug, Default)]
pub struct InMemory {
    /// Items storage with read-write lock for concurrent access
    pub(crate) items: RwLock<BTreeMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all keys currently stored, in sorted order.
    pub async fn keys(&self) -> Vec<String> {
        self.items.read().await.keys().cloned().collect()
    }

    /// Returns the number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns `true` if the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Saves the entire store to a file as JSON.
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_to_file(self, path).await
    }

    /// Loads a store from a JSON file.
    ///
    /// If the file does not exist, a new, empty `InMemory` store is returned.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_from_file(path).await
    }
}

#[async_trait]
impl KvStore for InMemory {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
