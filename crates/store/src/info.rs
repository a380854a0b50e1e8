//! Info collection: slug-keyed metadata records in two on-disk shapes

use crate::document::DocumentStore;
use crate::error::StoreResult;
use inkshelf_core::InfoRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Typed view of the info collection file.
///
/// Loading runs the flat/nested normalization pass (see
/// [`InfoRecord::from_object`]); saving reverses it, so each record keeps
/// its original on-disk shape.
#[derive(Debug, Clone)]
pub struct InfoCollection {
    store: DocumentStore,
}

impl InfoCollection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: DocumentStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads all info records in file order. Non-object entries are skipped
    /// with a warning; records with no resolvable slug are kept (callers
    /// exclude them from projections, but a save must not drop them).
    pub async fn load(&self) -> Vec<InfoRecord> {
        self.store
            .load()
            .await
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(obj) => Some(InfoRecord::from_object(obj)),
                other => {
                    log::warn!(
                        "Skipping non-object record in {}: {}",
                        self.store.path().display(),
                        other
                    );
                    None
                }
            })
            .collect()
    }

    pub async fn save(&self, records: &[InfoRecord]) -> StoreResult<()> {
        let values: Vec<Value> = records
            .iter()
            .map(|record| Value::Object(record.to_object()))
            .collect();
        self.store.save(&values).await
    }
}
