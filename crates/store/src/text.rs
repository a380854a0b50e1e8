//! Text collection: slug-keyed page-array records

use crate::document::{log_or_skip, DocumentStore};
use crate::error::StoreResult;
use inkshelf_core::TextRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Typed view of the text collection file.
#[derive(Debug, Clone)]
pub struct TextCollection {
    store: DocumentStore,
}

impl TextCollection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: DocumentStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads all text records in file order. Records that do not
    /// deserialize are skipped with a warning.
    pub async fn load(&self) -> Vec<TextRecord> {
        self.store
            .load()
            .await
            .into_iter()
            .filter_map(|value| log_or_skip(self.store.path(), serde_json::from_value(value)))
            .collect()
    }

    pub async fn save(&self, records: &[TextRecord]) -> StoreResult<()> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        self.store.save(&values).await
    }
}
