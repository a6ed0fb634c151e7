//! Immutable catalog store.
//!
//! The store owns the entry list for the whole session. The de-duplicated
//! view is computed once at construction since the source never changes.

use crate::app::query::QueryState;
use crate::catalog::source::CatalogSource;
use crate::domain::error::{CatalogError, Result};
use crate::domain::{CatalogEntry, Category, EntryId};
use crate::engine;
use std::collections::HashSet;

/// Holds the source entries and their de-duplicated view.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// Entries exactly as supplied, duplicates included.
    source: Vec<CatalogEntry>,

    /// First occurrence of every id, in source order.
    unique: Vec<CatalogEntry>,
}

impl CatalogStore {
    /// Builds a store from an entry list.
    ///
    /// ```
    /// use folio_catalog::catalog::CatalogStore;
    /// use folio_catalog::{CatalogEntry, Category};
    ///
    /// let store = CatalogStore::new(vec![
    ///     CatalogEntry::new(1, "Site", Category::Web),
    ///     CatalogEntry::new(1, "Site again", Category::Web),
    /// ]);
    /// assert_eq!(store.source_len(), 2);
    /// assert_eq!(store.entries().len(), 1);
    /// ```
    #[must_use]
    pub fn new(source: Vec<CatalogEntry>) -> Self {
        let unique: Vec<CatalogEntry> = engine::dedupe(&source).into_iter().cloned().collect();

        if unique.len() != source.len() {
            tracing::debug!(
                source = source.len(),
                unique = unique.len(),
                "dropped duplicate catalog entries"
            );
        }

        Self { source, unique }
    }

    /// Loads entries from `source`, validates them and builds a store.
    ///
    /// # Errors
    ///
    /// Propagates the source's loading error. Returns
    /// [`CatalogError::InvalidEntry`] for an entry whose category is the `All`
    /// sentinel or unrecognized.
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_store_load").entered();
        let entries = source.load_entries()?;
        validate(&entries)?;
        Ok(Self::new(entries))
    }

    /// De-duplicated entries in source order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.unique
    }

    /// Number of entries supplied, duplicates included.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.unique.iter().find(|entry| &entry.id == id)
    }

    /// Entries matching `query`, in source order.
    #[must_use]
    pub fn filtered(&self, query: &QueryState) -> Vec<&CatalogEntry> {
        engine::filter_entries(&self.unique, query)
    }

    #[must_use]
    pub fn subcategories(&self, category: Category) -> Vec<String> {
        engine::available_subcategories(&self.unique, category)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        engine::available_categories(&self.unique)
    }

    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        engine::count_in_category(&self.unique, category)
    }
}

/// Rejects entries that break the category invariant and reports duplicate
/// ids, which are tolerated and removed by de-duplication.
fn validate(entries: &[CatalogEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !entry.category.is_real() {
            return Err(CatalogError::InvalidEntry {
                id: entry.id.to_string(),
                reason: format!("category `{}` cannot be assigned to an entry", entry.category.key()),
            });
        }
        if !seen.insert(&entry.id) {
            tracing::warn!(id = %entry.id, title = %entry.title, "duplicate catalog id, later occurrence will be ignored");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JsonCatalog, StaticCatalog};

    #[test]
    fn lookup_returns_first_occurrence() {
        let store = CatalogStore::new(vec![
            CatalogEntry::new("a", "First", Category::Web),
            CatalogEntry::new("a", "Second", Category::Demo),
        ]);
        let found = store.get(&EntryId::from("a")).unwrap();
        assert_eq!(found.title, "First");
        assert!(store.get(&EntryId::from(9)).is_none());
    }

    #[test]
    fn load_from_static_source() {
        let source = StaticCatalog::new(vec![CatalogEntry::new(1, "Site", Category::Web)]);
        let store = CatalogStore::load(&source).unwrap();
        assert_eq!(store.categories(), vec![Category::All, Category::Web]);
        assert_eq!(store.count_in(Category::Web), 1);
    }

    #[test]
    fn sentinel_category_is_rejected_for_any_source() {
        let source = StaticCatalog::new(vec![
            CatalogEntry::new(1, "Site", Category::Web),
            CatalogEntry::new(2, "x", Category::All),
        ]);
        let err = CatalogStore::load(&source).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref id, .. } if id == "2"));
    }

    #[test]
    fn unrecognized_category_from_json_is_rejected() {
        let entries =
            JsonCatalog::parse(r#"[{"id": 9, "title": "Bad", "category": "pottery"}]"#).unwrap();
        assert_eq!(entries[0].category, Category::Unknown);

        let err = CatalogStore::load(&StaticCatalog::new(entries)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref id, .. } if id == "9"));
    }

    #[test]
    fn duplicate_ids_pass_validation() {
        let source = StaticCatalog::new(vec![
            CatalogEntry::new(1, "A", Category::Web),
            CatalogEntry::new(1, "B", Category::Demo),
        ]);
        let store = CatalogStore::load(&source).unwrap();
        assert_eq!(store.source_len(), 2);
        assert_eq!(store.entries().len(), 1);
    }
}
