//! Derived projections joining the two collections
//!
//! Neither type is persisted: `has_text` and `pages_count` are computed
//! from the text collection at read time.

use crate::types::{InfoRecord, Page, DEFAULT_NAME};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListing {
    pub slug: String,
    pub name: String,
    pub short_desc: String,
    pub status: String,
    pub has_text: bool,
    pub pages_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_the_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_the_book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_should_read: Option<String>,
}

impl BookListing {
    /// Projects an info record, joined with the page count of its text
    /// record when one exists.
    pub fn project(slug: &str, info: &InfoRecord, pages_count: Option<usize>) -> Self {
        let owned = |name: &str| info.field_str(name).map(str::to_owned);
        Self {
            slug: slug.to_owned(),
            name: info.field_str("name").unwrap_or(DEFAULT_NAME).to_owned(),
            short_desc: info.field_str("short_desc").unwrap_or_default().to_owned(),
            status: info.status().to_owned(),
            has_text: pages_count.is_some(),
            pages_count: pages_count.unwrap_or(0),
            about_the_author: owned("about_the_author"),
            about_the_book: owned("about_the_book"),
            book_review: owned("book_review"),
            desc_book: owned("desc_book"),
            who_should_read: owned("who_should_read"),
        }
    }
}

/// Full detail view for one slug: merged metadata plus pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    pub slug: String,
    pub data: Map<String, Value>,
    pub pages: Vec<Page>,
    pub status: String,
}
