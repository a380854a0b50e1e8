//! High-level catalog operations for inkshelf
//!
//! Joins the text and info collections into read projections
//! ([`BookCatalog`]) and applies partial updates back to disk
//! ([`BookEditor`]). The layer is stateless: every operation reads current
//! disk state, and nothing is cached across requests.

pub mod catalog;
pub mod editor;
pub mod error;

pub use catalog::BookCatalog;
pub use editor::BookEditor;
pub use error::{CatalogError, CatalogResult};

use std::path::{Path, PathBuf};

/// Default text collection file name.
pub const TEXT_FILE: &str = "text.json";
/// Default info collection file name.
pub const INFO_FILE: &str = "information.json";

/// Locations of the two collection files inside one storage directory.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    storage_dir: PathBuf,
    text_file: String,
    info_file: String,
}

impl CatalogPaths {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            text_file: TEXT_FILE.to_string(),
            info_file: INFO_FILE.to_string(),
        }
    }

    pub fn with_text_file(mut self, name: impl Into<String>) -> Self {
        self.text_file = name.into();
        self
    }

    pub fn with_info_file(mut self, name: impl Into<String>) -> Self {
        self.info_file = name.into();
        self
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn text_path(&self) -> PathBuf {
        self.storage_dir.join(&self.text_file)
    }

    pub fn info_path(&self) -> PathBuf {
        self.storage_dir.join(&self.info_file)
    }
}
