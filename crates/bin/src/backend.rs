//! Backend creation and persistence.

use std::path::PathBuf;

use journalkeep::{
    Vault,
    backend::{
        KvStore,
        database::{InMemory, Sqlite},
    },
};

use crate::cli::{Backend, BackendArgs};

const SQLITE_FILE: &str = "journalkeep.db";
const JSON_FILE: &str = "journalkeep.json";

fn data_dir(args: &BackendArgs) -> PathBuf {
    args.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
}

/// Short description of the configured backend for display
pub fn backend_label(args: &BackendArgs) -> String {
    match args.backend {
        Backend::Sqlite => format!("sqlite ({})", data_dir(args).join(SQLITE_FILE).display()),
        Backend::Inmemory => format!("inmemory ({})", data_dir(args).join(JSON_FILE).display()),
    }
}

/// Create the appropriate backend based on configuration
pub async fn create_backend(
    args: &BackendArgs,
) -> Result<Box<dyn KvStore>, Box<dyn std::error::Error>> {
    let data_dir = data_dir(args);

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    match args.backend {
        Backend::Sqlite => {
            let db_path = data_dir.join(SQLITE_FILE);
            tracing::debug!("Using SQLite backend at {}", db_path.display());
            Ok(Box::new(Sqlite::open(&db_path).await?))
        }
        Backend::Inmemory => {
            let json_path = data_dir.join(JSON_FILE);
            tracing::debug!(
                "Using in-memory backend with persistence at {}",
                json_path.display()
            );
            Ok(Box::new(InMemory::load_from_file(&json_path).await?))
        }
    }
}

/// Write in-memory state back to disk. SQLite commits as it goes, so
/// there is nothing to do for it.
pub async fn persist(vault: &Vault, args: &BackendArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(in_memory) = vault.backend().as_any().downcast_ref::<InMemory>() {
        let json_path = data_dir(args).join(JSON_FILE);
        in_memory.save_to_file(&json_path).await?;
        tracing::debug!("Saved data to {}", json_path.display());
    }
    Ok(())
}
