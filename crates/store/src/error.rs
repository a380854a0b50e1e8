//! Error types for collection persistence

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting a collection.
///
/// Read failures never surface here: the store degrades them to an empty
/// collection and logs a warning instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to write a collection file
    #[error("Failed to write collection at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the collection's parent directory
    #[error("Failed to create collection directory at {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a collection
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
