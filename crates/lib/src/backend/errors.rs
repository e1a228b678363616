//! Storage error types for the journalkeep backend.
//!
//! This module defines structured error types for key-value store operations,
//! providing better error context and type safety compared to string-based errors.

use thiserror::Error;

/// Errors that can occur during key-value store operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Persistence file was written by an unsupported format version.
    #[error("Unsupported persistence version {found}; only version {supported} is supported")]
    UnsupportedVersion {
        /// Version found in the file
        found: u8,
        /// Version this build understands
        supported: u8,
    },

    /// The store could not service the request.
    #[error("Store unavailable: {reason}")]
    Unavailable {
        /// Description of the failure
        reason: String,
    },

    /// SQL backend error.
    #[cfg(feature = "sqlite")]
    #[error("SQL error: {reason}")]
    SqlxError {
        /// Description of the failure, including context
        reason: String,
        /// The underlying sqlx error, if any
        #[source]
        source: Option<sqlx::Error>,
    },
}

impl BackendError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            BackendError::FileIo { .. }
                | BackendError::SerializationFailed { .. }
                | BackendError::DeserializationFailed { .. }
        )
    }

    /// Check if this error means the store itself is unusable.
    pub fn is_unavailable(&self) -> bool {
        match self {
            BackendError::Unavailable { .. } => true,
            #[cfg(feature = "sqlite")]
            BackendError::SqlxError { .. } => true,
            _ => false,
        }
    }
}

// Conversion from BackendError to the main Error type
impl From<BackendError> for crate::Error {
    fn from(err: BackendError) -> Self {
        crate::Error::Backend(err)
    }
}
