//! # Record Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StorageError>;

/// Failures reading or writing the persisted document
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Document exists but is not a valid edition document
    #[error("Corrupt document {path}: {message}")]
    Corrupt { path: String, message: String },

    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl StorageError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn corrupt(path: impl AsRef<std::path::Path>, err: serde_json::Error) -> Self {
        StorageError::Corrupt {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}
