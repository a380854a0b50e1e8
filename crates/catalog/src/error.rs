//! Error types for catalog operations

use inkshelf_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No info record resolves to the requested slug
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Collection write failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Raw file read failure (storage passthrough)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
