//! Text-collection records: slug-keyed page arrays

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of book text, addressed by its zero-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Unknown keys survive a load/save round-trip.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Page {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            rest: Map::new(),
        }
    }
}

/// A text-collection record: the full ordered page sequence for one slug.
///
/// A record whose slug is missing (or empty) never matches a lookup but is
/// preserved verbatim when the collection is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl TextRecord {
    pub fn new(slug: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            slug: slug.into(),
            pages,
            rest: Map::new(),
        }
    }

    /// Applies one index-addressed page patch.
    ///
    /// Only fields present in the patch are written, and only when a page
    /// already exists at the index. Out-of-range patches are ignored; this
    /// path never inserts pages.
    pub fn apply_patch(&mut self, patch: &PagePatch) {
        if let Some(page) = self.pages.get_mut(patch.index) {
            if let Some(title) = &patch.title {
                page.title = title.clone();
            }
            if let Some(content) = &patch.content {
                page.content = content.clone();
            }
        }
    }
}

/// Partial update for a single page, keyed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePatch {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PagePatch {
    pub fn title(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            title: None,
            content: Some(content.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_updates_only_present_fields() {
        let mut record = TextRecord::new("a", vec![Page::new("p1", "c1")]);
        record.apply_patch(&PagePatch::content(0, "c2"));
        assert_eq!(record.pages[0].title, "p1");
        assert_eq!(record.pages[0].content, "c2");
    }

    #[test]
    fn out_of_range_patch_is_ignored() {
        let mut record = TextRecord::new("a", vec![Page::new("p1", "c1")]);
        record.apply_patch(&PagePatch::title(5, "T"));
        assert_eq!(record.pages.len(), 1);
        assert_eq!(record.pages[0].title, "p1");
    }

    #[test]
    fn unknown_keys_round_trip() {
        let raw = serde_json::json!({
            "slug": "a",
            "pages": [{"title": "p1", "content": "c1", "footnote": "x"}],
            "revision": 3
        });
        let record: TextRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.rest["revision"], 3);
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }
}
