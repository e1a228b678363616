//! SQLite backend implementation for journalkeep storage.
//!
//! Stores every key-value pair as one row of the `kv_items` table, using sqlx
//! with a `SqlitePool`. All methods are async to match the [`KvStore`] trait.
//!
//! ## Schema and Migrations
//!
//! The database schema is defined in the [`schema`] module and automatically
//! initialized when connecting.

/// Schema definition and migration system.
pub mod schema;

use std::any::Any;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::Result;
use crate::backend::KvStore;
use crate::backend::errors::BackendError;

/// Extension trait for sqlx Result types to simplify error handling.
///
/// Similar to `anyhow::Context`, this trait adds a method to convert
/// sqlx errors to `BackendError::SqlxError` with a context message.
pub(crate) trait SqlxResultExt<T> {
    /// Convert sqlx error to BackendError with context message.
    fn sql_context(self, context: &str) -> Result<T>;
}

impl<T> SqlxResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn sql_context(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            BackendError::SqlxError {
                reason: format!("{context}: {e}"),
                source: Some(e),
            }
            .into()
        })
    }
}

/// SQLite-backed [`KvStore`].
///
/// `Sqlite` is `Send + Sync` as required by `KvStore`. The underlying
/// sqlx pool handles connection pooling and thread safety.
#[derive(Debug, Clone)]
pub struct Sqlite {
    pool: SqlitePool,
}

impl Sqlite {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// ```ignore
    /// use journalkeep::backend::database::Sqlite;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let store = Sqlite::open("journal.db").await.unwrap();
    /// }
    /// ```
    pub async fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        // mode=rwc: read-write-create (create file if it doesn't exist)
        let url = format!("sqlite:{}?mode=rwc", path.as_ref().display());
        Self::connect(&url).await
    }

    /// Connect to a SQLite database using a connection URL.
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection URL (e.g., "sqlite:./my.db")
    pub async fn connect(url: &str) -> Result<Self> {
        let is_in_memory = url.contains("mode=memory");

        // A shared-cache in-memory database is destroyed when its last
        // connection closes, so keep one connection alive for the pool's life.
        let pool = if is_in_memory {
            SqlitePoolOptions::new()
                .max_connections(5)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(url)
                .await
                .sql_context("Failed to connect to SQLite")?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect(url)
                .await
                .sql_context("Failed to connect to SQLite")?
        };

        if is_in_memory {
            sqlx::query("PRAGMA busy_timeout = 5000;")
                .execute(&pool)
                .await
                .sql_context("Failed to configure SQLite")?;
        } else {
            // File-based SQLite:
            // - journal_mode=WAL: Write-Ahead Logging for better concurrency
            // - synchronous=NORMAL: Balanced durability (safe with WAL)
            // - busy_timeout=5000: Wait up to 5s for locks before failing
            sqlx::query(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA busy_timeout = 5000;",
            )
            .execute(&pool)
            .await
            .sql_context("Failed to configure SQLite")?;
        }

        let store = Self { pool };
        schema::initialize(&store).await?;
        Ok(store)
    }

    /// Create an in-memory SQLite database.
    ///
    /// The database exists only for the lifetime of this store. Each call gets
    /// its own database, so tests do not see each other's data.
    pub async fn in_memory() -> Result<Self> {
        let unique_id = uuid::Uuid::new_v4();
        let url = format!("sqlite:file:mem_{unique_id}?mode=memory&cache=shared");
        Self::connect(&url).await
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KvStore for Sqlite {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_items WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .sql_context("Failed to get item")?;
        Ok(row.map(|(value,)| value))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_items (key, value) VALUES ($1, $2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .sql_context("Failed to set item")?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_items WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .sql_context("Failed to remove item")?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
