//! Read-only projections over the joined collections

use crate::error::{CatalogError, CatalogResult};
use crate::CatalogPaths;
use inkshelf_core::{BookDetail, BookListing, TextRecord};
use inkshelf_store::{InfoCollection, TextCollection};
use std::collections::HashMap;

/// Joins the text and info collections into listing and detail views.
pub struct BookCatalog {
    paths: CatalogPaths,
    texts: TextCollection,
    infos: InfoCollection,
}

impl BookCatalog {
    pub fn new(paths: CatalogPaths) -> Self {
        let texts = TextCollection::new(paths.text_path());
        let infos = InfoCollection::new(paths.info_path());
        Self {
            paths,
            texts,
            infos,
        }
    }

    /// Lists every valid book in info-file order.
    ///
    /// Records with no resolvable slug are dropped. When the text
    /// collection holds duplicate slugs, the first occurrence wins — the
    /// same policy as [`BookCatalog::get`]. Infallible: degraded reads
    /// surface as empty collections.
    pub async fn list(&self) -> Vec<BookListing> {
        let texts = self.texts.load().await;
        let infos = self.infos.load().await;

        let mut by_slug: HashMap<&str, &TextRecord> = HashMap::new();
        for text in &texts {
            if text.slug.is_empty() {
                continue;
            }
            by_slug.entry(text.slug.as_str()).or_insert(text);
        }

        infos
            .iter()
            .filter_map(|info| {
                let slug = info.slug()?;
                let pages_count = by_slug.get(slug).map(|text| text.pages.len());
                Some(BookListing::project(slug, info, pages_count))
            })
            .collect()
    }

    /// Full detail for one slug: merged metadata plus pages.
    ///
    /// Pages default to an empty sequence when no text record matches;
    /// a missing info record is `BookNotFound`.
    pub async fn get(&self, slug: &str) -> CatalogResult<BookDetail> {
        let texts = self.texts.load().await;
        let infos = self.infos.load().await;

        let info = infos
            .iter()
            .find(|info| info.slug() == Some(slug))
            .ok_or_else(|| CatalogError::BookNotFound(slug.to_string()))?;
        let pages = texts
            .iter()
            .find(|text| text.slug == slug)
            .map(|text| text.pages.clone())
            .unwrap_or_default();

        Ok(BookDetail {
            slug: slug.to_string(),
            data: info.metadata(),
            pages,
            status: info.status().to_string(),
        })
    }

    /// Returns the verbatim text content of a named file in the storage
    /// directory. Passthrough for external collaborators; no path
    /// containment beyond the directory join.
    pub async fn read_raw(&self, name: &str) -> CatalogResult<String> {
        let path = self.paths.storage_dir().join(name);
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}
