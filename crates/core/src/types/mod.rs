//! Core type definitions

mod book;
mod info;
mod listing;

pub use book::{Page, PagePatch, TextRecord};
pub use info::{InfoRecord, DEFAULT_NAME, EDITABLE_INFO_FIELDS, STATUS_UNEDITED};
pub use listing::{BookDetail, BookListing};
