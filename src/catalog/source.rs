//! Catalog source abstraction.
//!
//! The engine never authors data; it receives one immutable list of entries
//! from a [`CatalogSource`] when the catalog view mounts. This trait keeps the
//! store independent of where that list comes from.

use crate::domain::error::Result;
use crate::domain::CatalogEntry;

/// Supplier of the ordered entry list.
///
/// # Implementations
///
/// - [`StaticCatalog`]: entries already held in memory
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): entries read from a JSON file
///
/// # Examples
///
/// ```
/// use folio_catalog::catalog::{CatalogSource, StaticCatalog};
/// use folio_catalog::{CatalogEntry, Category};
///
/// let source = StaticCatalog::new(vec![CatalogEntry::new(1, "Site", Category::Web)]);
/// assert_eq!(source.load_entries()?.len(), 1);
/// # Ok::<(), folio_catalog::CatalogError>(())
/// ```
pub trait CatalogSource {
    /// Returns every entry in source order.
    ///
    /// Duplicates are allowed here; the store de-duplicates by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be read or violate a data
    /// invariant.
    fn load_entries(&self) -> Result<Vec<CatalogEntry>>;
}

/// In-memory catalog, typically compiled into the site.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticCatalog {
    fn load_entries(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }
}
