//! Category, subcategory and text filtering.
//!
//! Every function here is pure: it borrows the source entries and returns a
//! new ordered list of references. Output order always equals source order
//! after de-duplication.
//!
//! # Pipeline
//!
//! ```text
//! entries → dedupe(id) → category → subcategory → text → filtered
//! ```
//!
//! Each stage narrows the previous one; all predicates are AND-combined.

use crate::app::query::{QueryState, ALL_SUBCATEGORIES};
use crate::domain::{fold_case, CatalogEntry, Category, EntryId};
use std::collections::HashSet;

/// Removes entries whose id was already seen, keeping the first occurrence.
///
/// Idempotent: de-duplicating an already de-duplicated list returns it
/// unchanged.
pub fn dedupe<'a, I>(entries: I) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut seen: HashSet<&EntryId> = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(&entry.id))
        .collect()
}

/// Category stage: `All` passes everything, `Unknown` passes nothing.
#[must_use]
pub fn matches_category(entry: &CatalogEntry, selected: Category) -> bool {
    match selected {
        Category::All => true,
        Category::Unknown => false,
        category => entry.category == category,
    }
}

/// Subcategory stage: `"All"` passes everything; otherwise compares against
/// the entry's subcategory, `"Other"` when it has none.
#[must_use]
pub fn matches_subcategory(entry: &CatalogEntry, selected: &str) -> bool {
    selected == ALL_SUBCATEGORIES || entry.subcategory_or_other() == selected
}

/// Applies the full pipeline for `query`.
///
/// # Examples
///
/// ```
/// use folio_catalog::engine::filter_entries;
/// use folio_catalog::{CatalogEntry, Category, QueryState};
///
/// let entries = vec![
///     CatalogEntry::new(1, "Portfolio Site", Category::Web).with_technologies(["React"]),
///     CatalogEntry::new(2, "CAD Drawing", Category::Technical).with_technologies(["AutoCAD"]),
/// ];
/// let mut query = QueryState::default();
/// query.set_search_query("react");
///
/// let result = filter_entries(&entries, &query);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].title, "Portfolio Site");
/// ```
#[must_use]
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], query: &QueryState) -> Vec<&'a CatalogEntry> {
    let _span = tracing::trace_span!("filter_entries",
        total = entries.len(),
        category = query.selected_category().key(),
        subcategory = %query.selected_subcategory(),
        query_len = query.search_query().len()
    ).entered();

    let needle = fold_case(query.search_query());

    let filtered: Vec<&CatalogEntry> = dedupe(entries)
        .into_iter()
        .filter(|entry| matches_category(entry, query.selected_category()))
        .filter(|entry| matches_subcategory(entry, query.selected_subcategory()))
        .filter(|entry| entry.matches_text(&needle))
        .collect();

    tracing::trace!(filtered = filtered.len(), "entries filtered");
    filtered
}

/// Subcategory options for `category`: `"All"` followed by every
/// subcategory in use, in first-seen order.
///
/// ```
/// use folio_catalog::engine::available_subcategories;
/// use folio_catalog::{CatalogEntry, Category};
///
/// let entries = vec![
///     CatalogEntry::new(1, "Hood", Category::Technical).with_subcategory("Kitchen Equipment"),
///     CatalogEntry::new(2, "Gear", Category::Technical),
///     CatalogEntry::new(3, "Rack", Category::Technical).with_subcategory("Kitchen Equipment"),
///     CatalogEntry::new(4, "Site", Category::Web).with_subcategory("Portfolio"),
/// ];
/// assert_eq!(
///     available_subcategories(&entries, Category::Technical),
///     vec!["All", "Kitchen Equipment", "Other"]
/// );
/// ```
#[must_use]
pub fn available_subcategories(entries: &[CatalogEntry], category: Category) -> Vec<String> {
    let mut options = vec![ALL_SUBCATEGORIES.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in dedupe(entries) {
        if !matches_category(entry, category) {
            continue;
        }
        let subcategory = entry.subcategory_or_other();
        if seen.insert(subcategory) {
            options.push(subcategory.to_string());
        }
    }

    options
}

/// Category options for the filter bar: `All` followed by the categories
/// that at least one entry uses, in [`Category::FILTERABLE`] order.
#[must_use]
pub fn available_categories(entries: &[CatalogEntry]) -> Vec<Category> {
    let used: HashSet<Category> = entries.iter().map(|entry| entry.category).collect();

    std::iter::once(Category::All)
        .chain(
            Category::FILTERABLE
                .into_iter()
                .filter(|category| used.contains(category)),
        )
        .collect()
}

/// Number of de-duplicated entries in `category`, for filter badges.
#[must_use]
pub fn count_in_category(entries: &[CatalogEntry], category: Category) -> usize {
    dedupe(entries)
        .into_iter()
        .filter(|entry| matches_category(entry, category))
        .count()
}
