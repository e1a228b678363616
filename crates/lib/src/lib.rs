//! journalkeep: per-user journal and goal storage on a flat key-value store.
//!
//! The store underneath has no collections, indices or transactions; it only
//! knows `get`, `set` and `remove` on string keys. This library layers a user
//! registry, a session pointer and isolated per-user keyspaces on top of it.
//!
//! ## Core Concepts
//!
//! * **Stores (`backend::KvStore`)**: A pluggable key-value layer. `InMemory`
//!   (with JSON file snapshots) and `Sqlite` are provided.
//! * **Registry (`user::UserRegistry`)**: Every registered `UserRecord`,
//!   serialized as one JSON array under one well-known key. Emails are unique
//!   case-insensitively.
//! * **Session Pointer (`user::SessionPointer`)**: A snapshot of the currently
//!   authenticated user under a second well-known key.
//! * **Keyspace (`keyspace::UserKeyspace`)**: Per-user blobs addressed by a
//!   composite key of prefix, user id and data type.
//! * **Vault (`vault::Vault`)**: The service object that wires one store
//!   handle and one clock into all of the above.
//!
//! ```
//! # use journalkeep::{Vault, NewUser, backend::database::InMemory};
//! # #[tokio::main]
//! # async fn main() -> journalkeep::Result<()> {
//! let vault = Vault::open(Box::new(InMemory::new()));
//!
//! let alice = vault.register_user(NewUser::new("alice@example.com", "Alice")).await?;
//! vault.save_user_data(alice.id(), "entries", &vec!["first day"]).await?;
//!
//! let entries: Option<Vec<String>> = vault.load_user_data(alice.id(), "entries").await;
//! assert_eq!(entries, Some(vec!["first day".to_string()]));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod blob;
pub mod clock;
pub mod constants;
pub mod keyspace;
pub mod user;
pub mod vault;

pub use blob::Lookup;
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use keyspace::{UserKeyspace, UserStats};
pub use user::{NewUser, SessionPointer, UserError, UserRecord, UserRegistry};
pub use vault::Vault;

/// Result type used throughout the journalkeep library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the journalkeep library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured registry and authentication errors from the user module
    #[error(transparent)]
    User(user::UserError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Backend(_) => "backend",
            Error::User(_) => "user",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_duplicate(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::User(UserError::NoSuchAccount { .. }))
    }

    /// Check if this error is store-related.
    pub fn is_database_error(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Backend(backend_err) => backend_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::User(UserError::InvalidEmail))
    }
}
