//! JSON collection persistence for inkshelf
//!
//! Each collection is one on-disk JSON array file. Reads are fail-soft: a
//! missing, empty, or unparseable file degrades to an empty collection with
//! a warning log, never an error. Writes replace the whole file atomically
//! (temp file + rename) so no reader observes a torn collection.

pub mod document;
pub mod error;
pub mod info;
pub mod text;

pub use document::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use info::InfoCollection;
pub use text::TextCollection;
