//! Generic load/persist of one JSON array collection

use crate::error::{StoreError, StoreResult};
use serde_json::Value;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// One JSON array file holding the raw records of a collection.
///
/// The store is stateless: every call reads or replaces current disk state,
/// with no cache between operations.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the raw record sequence.
    ///
    /// Fail-soft: a missing file, an empty file, or unparseable content
    /// yields an empty sequence. Degraded reads are logged at warn level so
    /// the data loss is observable. A single top-level document (not an
    /// array) is normalized into a one-element sequence.
    pub async fn load(&self) -> Vec<Value> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "Collection file not found at {}, starting empty",
                    self.path.display()
                );
                return Vec::new();
            }
            Err(e) => {
                log::warn!(
                    "Failed to read collection at {}: {}; treating it as empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(records)) => records,
            Ok(single) => vec![single],
            Err(e) => {
                log::warn!(
                    "Collection at {} is not valid JSON: {}; treating it as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Replaces the file's entire content with the pretty-printed records.
    ///
    /// The write goes to a sibling temp file first and is renamed into
    /// place, so a concurrent reader never observes a partial file.
    pub async fn save(&self, records: &[Value]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::DirectoryCreation {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| StoreError::Write {
                path: tmp.clone(),
                source: e,
            })?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;

        log::info!(
            "Wrote {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("collection"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Log record-level parse errors instead of silently discarding them.
pub(crate) fn log_or_skip<T>(path: &Path, result: Result<T, serde_json::Error>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!(
                "Skipping malformed record in {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}
