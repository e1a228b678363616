//! Database-style backend implementations
//!
//! These backends provide persistent key-value storage.

mod in_memory;
#[cfg(feature = "sqlite")]
pub mod sql;

pub use in_memory::InMemory;
#[cfg(feature = "sqlite")]
pub use sql::Sqlite;
