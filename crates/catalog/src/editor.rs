//! Partial updates applied back to the collections

use crate::error::{CatalogError, CatalogResult};
use crate::CatalogPaths;
use inkshelf_core::{Page, PagePatch, TextRecord};
use inkshelf_store::{InfoCollection, TextCollection};
use serde_json::{Map, Value};

/// Applies partial edits to the two collections and writes them back.
///
/// There is no transaction across the two files: `save` can persist the
/// info collection and then fail on the text collection. Each individual
/// file write is atomic.
pub struct BookEditor {
    texts: TextCollection,
    infos: InfoCollection,
}

impl BookEditor {
    pub fn new(paths: &CatalogPaths) -> Self {
        Self {
            texts: TextCollection::new(paths.text_path()),
            infos: InfoCollection::new(paths.info_path()),
        }
    }

    /// Applies a combined partial update to one book.
    ///
    /// - `changed_data` is shallow-merged into the record's nested wrapper
    ///   (created if absent); an empty mapping changes nothing.
    /// - `status` is written shape-preserving; an empty string counts as
    ///   absent.
    /// - `changed_pages` are index-addressed overwrites on the existing
    ///   text record; out-of-range indices are ignored and no pages are
    ///   ever inserted here.
    ///
    /// The info collection is persisted unconditionally; the text
    /// collection only when a text record already existed for the slug.
    pub async fn save(
        &self,
        slug: &str,
        changed_data: Map<String, Value>,
        changed_pages: &[PagePatch],
        status: Option<&str>,
    ) -> CatalogResult<()> {
        let mut infos = self.infos.load().await;
        let mut texts = self.texts.load().await;

        let info = infos
            .iter_mut()
            .find(|info| info.slug() == Some(slug))
            .ok_or_else(|| CatalogError::BookNotFound(slug.to_string()))?;

        info.merge_data(changed_data);
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            info.set_status(status);
        }

        let mut had_text = false;
        if let Some(text) = texts.iter_mut().find(|text| text.slug == slug) {
            had_text = true;
            for patch in changed_pages {
                text.apply_patch(patch);
            }
        }

        self.infos.save(&infos).await?;
        if had_text {
            self.texts.save(&texts).await?;
        }

        log::info!("Saved book {}", slug);
        Ok(())
    }

    /// Replaces a book's page sequence wholesale, creating the text record
    /// if none exists. Always persists the text collection.
    pub async fn replace_pages(&self, slug: &str, pages: Vec<Page>) -> CatalogResult<()> {
        let mut texts = self.texts.load().await;

        match texts.iter_mut().find(|text| text.slug == slug) {
            Some(text) => text.pages = pages,
            None => texts.push(TextRecord::new(slug, pages)),
        }

        self.texts.save(&texts).await?;
        log::info!("Replaced pages for {}", slug);
        Ok(())
    }

    /// Writes the allow-listed subset of `fields` into the record's nested
    /// wrapper. Protected keys (`slug`, `status`, anything unknown) are
    /// dropped silently.
    pub async fn patch_info_fields(
        &self,
        slug: &str,
        fields: &Map<String, Value>,
    ) -> CatalogResult<()> {
        let mut infos = self.infos.load().await;

        let info = infos
            .iter_mut()
            .find(|info| info.slug() == Some(slug))
            .ok_or_else(|| CatalogError::BookNotFound(slug.to_string()))?;
        info.patch_editable(fields);

        self.infos.save(&infos).await?;
        log::info!("Patched info fields for {}", slug);
        Ok(())
    }
}
