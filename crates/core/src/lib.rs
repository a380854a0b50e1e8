//! Domain models for the inkshelf catalog
//!
//! Two on-disk collections share a slug as their join key: the text
//! collection (ordered pages of narrative content) and the info collection
//! (descriptive metadata, stored either flat on the record or inside a
//! nested `data` wrapper). This crate defines the records, the derived
//! listing/detail projections, and the patch types used for partial edits.

pub mod types;

pub use types::{
    BookDetail, BookListing, InfoRecord, Page, PagePatch, TextRecord, DEFAULT_NAME,
    EDITABLE_INFO_FIELDS, STATUS_UNEDITED,
};
