//! Info-collection records: slug-keyed descriptive metadata
//!
//! Two on-disk shapes coexist. The canonical shape nests every metadata
//! field inside a `data` wrapper (`{slug, data: {...}}`); the legacy shape
//! stores the same fields flat on the record (`{slug, name, status, ...}`).
//! [`InfoRecord`] normalizes both into one representation at load time and
//! reverses the pass on write-back, so a record keeps its on-disk shape
//! until an operation explicitly creates the wrapper. Nothing downstream
//! re-branches on shape.

use serde_json::{Map, Value};

/// Status value reported when a record carries none.
pub const STATUS_UNEDITED: &str = "unedited";

/// Listing name reported when a record carries none.
pub const DEFAULT_NAME: &str = "Untitled";

/// Metadata fields that [`InfoRecord::patch_editable`] may write. Keys
/// outside this list (notably `slug` and `status`) are dropped silently.
pub const EDITABLE_INFO_FIELDS: &[&str] = &[
    "about_the_author",
    "about_the_book",
    "book_review",
    "desc_book",
    "name",
    "short_desc",
    "who_should_read",
];

/// Normalized form of one info-collection record.
///
/// `top` holds legacy flat metadata fields; `data` is the nested wrapper
/// when the on-disk record had one. Nested values win over flat values for
/// every field, including `status`. A record whose slug resolves to neither
/// location is invalid: excluded from every projection, but retained so
/// writing the collection back does not drop it from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRecord {
    slug: Option<String>,
    slug_at_top: bool,
    data: Option<Map<String, Value>>,
    top: Map<String, Value>,
}

impl InfoRecord {
    /// Creates a fresh record in the canonical nested shape.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            slug_at_top: true,
            data: Some(Map::new()),
            top: Map::new(),
        }
    }

    /// Normalizes a raw on-disk object.
    ///
    /// A top-level string slug wins over `data.slug`; an empty string
    /// resolves the same as a missing one. A `data` key holding anything
    /// but an object is treated as an ordinary opaque field.
    pub fn from_object(mut obj: Map<String, Value>) -> Self {
        let data = match obj.remove("data") {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                obj.insert("data".to_string(), other);
                None
            }
            None => None,
        };

        let (slug, slug_at_top) = match obj.remove("slug") {
            Some(Value::String(s)) if !s.is_empty() => (Some(s), true),
            Some(other) => {
                obj.insert("slug".to_string(), other);
                (None, false)
            }
            None => (None, false),
        };
        let slug = slug.or_else(|| {
            data.as_ref()
                .and_then(|d| d.get("slug"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        });

        Self {
            slug,
            slug_at_top,
            data,
            top: obj,
        }
    }

    /// Rebuilds the on-disk object in the record's preserved shape.
    pub fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.slug_at_top {
            if let Some(slug) = &self.slug {
                obj.insert("slug".to_string(), Value::String(slug.clone()));
            }
        }
        if let Some(data) = &self.data {
            obj.insert("data".to_string(), Value::Object(data.clone()));
        }
        for (key, value) in &self.top {
            obj.insert(key.clone(), value.clone());
        }
        obj
    }

    /// The resolved slug, or `None` for an invalid record.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Whether the record carries the nested `data` wrapper.
    pub fn has_wrapper(&self) -> bool {
        self.data.is_some()
    }

    /// Looks up one metadata field, nested wrapper first.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data
            .as_ref()
            .and_then(|d| d.get(name))
            .or_else(|| self.top.get(name))
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn status(&self) -> &str {
        self.field_str("status").unwrap_or(STATUS_UNEDITED)
    }

    /// Merged metadata view: flat fields overlaid by nested ones.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut merged = self.top.clone();
        if let Some(data) = &self.data {
            merged.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// Shallow-merges `changes` into the nested wrapper, creating the
    /// wrapper if absent. Matching keys are overwritten; keys absent from
    /// `changes` are never deleted. An empty mapping is a no-op.
    pub fn merge_data(&mut self, changes: Map<String, Value>) {
        if changes.is_empty() {
            return;
        }
        self.data.get_or_insert_with(Map::new).extend(changes);
    }

    /// Writes `status` into the nested wrapper when one exists, else onto
    /// the flat record. This path never promotes a flat record to the
    /// nested shape.
    pub fn set_status(&mut self, status: impl Into<String>) {
        let value = Value::String(status.into());
        match &mut self.data {
            Some(data) => {
                data.insert("status".to_string(), value);
            }
            None => {
                self.top.insert("status".to_string(), value);
            }
        }
    }

    /// Copies the allow-listed subset of `fields` into the nested wrapper,
    /// creating the wrapper if absent. Every other key is dropped.
    pub fn patch_editable(&mut self, fields: &Map<String, Value>) {
        let data = self.data.get_or_insert_with(Map::new);
        for name in EDITABLE_INFO_FIELDS {
            if let Some(value) = fields.get(*name) {
                data.insert((*name).to_string(), value.clone());
            }
        }
    }
}
