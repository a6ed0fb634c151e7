//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for one
//! catalog session. It ties the immutable [`CatalogStore`] to the user's
//! [`QueryState`] and the detail view [`Gallery`], and derives everything the
//! presentation layer needs from them.
//!
//! # Architecture
//!
//! `AppState` separates core data (the store, the query, the gallery) from
//! derived state (the filtered list and the subcategory options). Derived
//! state is recomputed by [`AppState::recompute`] after every query change,
//! so it is never observed stale. View models are computed on demand from
//! state snapshots.
//!
//! # Example
//!
//! ```
//! use folio_catalog::catalog::CatalogStore;
//! use folio_catalog::{AppState, CatalogEntry, Category};
//!
//! let store = CatalogStore::new(vec![
//!     CatalogEntry::new(1, "Portfolio Site", Category::Web),
//!     CatalogEntry::new(2, "CAD Drawing", Category::Technical),
//! ]);
//! let mut state = AppState::new(store, 6);
//! state.set_category(Category::Web);
//! assert_eq!(state.filtered.len(), 1);
//!
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.cards[0].title, "Portfolio Site");
//! ```

use super::actions::Action;
use super::gallery::Gallery;
use super::keyboard::KeyBindings;
use super::query::QueryState;
use crate::catalog::CatalogStore;
use crate::domain::{fold_case, CatalogEntry, Category, EntryId};
use crate::engine::{self, Page};
use crate::ui::viewmodel::{
    CardItem, CatalogViewModel, DetailView, EmptyState, FilterOption, HeaderInfo, ImageSlot,
    PaginationBar, SearchBarInfo, Thumbnail,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog loaded at startup.
    pub store: CatalogStore,

    /// Current filter, search and page selections.
    ///
    /// Mutate through the `AppState` setters so derived state stays in sync.
    pub query: QueryState,

    /// Entries matching the current query, in catalog order.
    ///
    /// Recomputed by [`AppState::recompute`].
    pub filtered: Vec<CatalogEntry>,

    /// Subcategory options for the selected category, `"All"` first.
    pub subcategories: Vec<String>,

    /// Detail view state.
    pub gallery: Gallery,

    /// Whether the detail view shortcuts are registered with the host.
    pub key_bindings: KeyBindings,
}

impl AppState {
    /// Creates the initial state: no filters, page 1, detail view closed.
    #[must_use]
    pub fn new(store: CatalogStore, page_size: usize) -> Self {
        let mut state = Self {
            store,
            query: QueryState::new(page_size),
            filtered: Vec::new(),
            subcategories: Vec::new(),
            gallery: Gallery::default(),
            key_bindings: KeyBindings::default(),
        };
        state.recompute();
        state
    }

    /// Re-derives the filtered list and subcategory options from the query.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the catalog size and query fields.
    pub fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute",
            total_entries = self.store.entries().len(),
            category = self.query.selected_category().key(),
            subcategory = %self.query.selected_subcategory(),
            query_len = self.query.search_query().len()
        ).entered();

        self.filtered = self
            .store
            .filtered(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.subcategories = self.store.subcategories(self.query.selected_category());

        tracing::debug!(
            filtered_count = self.filtered.len(),
            subcategory_count = self.subcategories.len(),
            "filters applied"
        );
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        engine::total_pages(self.filtered.len(), self.query.page_size())
    }

    /// Entries on the current page.
    #[must_use]
    pub fn current_page(&self) -> Page<CatalogEntry> {
        engine::paginate(
            &self.filtered,
            self.query.current_page(),
            self.query.page_size(),
        )
    }

    pub fn set_category(&mut self, category: Category) {
        self.query.set_category(category);
        self.recompute();
    }

    pub fn set_subcategory(&mut self, subcategory: impl Into<String>) {
        self.query.set_subcategory(subcategory);
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query.set_search_query(query);
        self.recompute();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.push_search_char(c);
        self.recompute();
    }

    /// Returns `false` when the query was already empty.
    pub fn pop_search_char(&mut self) -> bool {
        if !self.query.pop_search_char() {
            return false;
        }
        self.recompute();
        true
    }

    /// Moves to `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.query.set_page(page, total);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.query.next_page(total);
    }

    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        self.query.previous_page(total);
    }

    pub fn toggle_view_mode(&mut self) {
        self.query.toggle_view_mode();
    }

    /// Opens the detail view on the entry with `id`.
    ///
    /// Returns `None` when no such entry exists. Otherwise returns the
    /// actions for the host: key binding registration when the view was
    /// closed, and a load request for the first image.
    pub fn open_detail(&mut self, id: &EntryId) -> Option<Vec<Action>> {
        let entry = self.store.get(id)?;
        self.gallery.open(entry);

        tracing::debug!(
            entry_id = %id,
            images = self.gallery.current().map_or(0, |g| g.images().len()),
            "detail view opened"
        );

        let mut actions: Vec<Action> = self.key_bindings.acquire().into_iter().collect();
        actions.extend(self.load_current_image());
        Some(actions)
    }

    /// Closes the detail view and releases its key bindings.
    pub fn close_detail(&mut self) -> Vec<Action> {
        if self.gallery.close() {
            tracing::debug!("detail view closed");
        }
        self.key_bindings.release().into_iter().collect()
    }

    /// Load request for the image the detail view currently shows.
    #[must_use]
    pub fn load_current_image(&self) -> Option<Action> {
        self.gallery
            .current()
            .filter(|open| open.is_loading())
            .and_then(|open| open.current_image())
            .map(|src| Action::LoadImage {
                src: src.to_string(),
            })
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> CatalogViewModel {
        let page = self.current_page();
        let search_query = self.query.search_query();

        let cards = page
            .items
            .iter()
            .map(|entry| Self::compute_card(entry, search_query))
            .collect();

        CatalogViewModel {
            header: self.compute_header(),
            categories: self.compute_category_options(),
            subcategories: self.compute_subcategory_options(),
            search_bar: SearchBarInfo {
                query: search_query.to_string(),
                placeholder: "Search by title, description or technology".to_string(),
            },
            view_mode: self.query.view_mode(),
            cards,
            pagination: self.compute_pagination(page.total_pages),
            empty_state: self.compute_empty_state(),
            detail: self.compute_detail(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let category = self.query.selected_category();
        HeaderInfo {
            title: category.label().to_string(),
            subtitle: category.description().to_string(),
            result_count: self.filtered.len(),
        }
    }

    fn compute_category_options(&self) -> Vec<FilterOption> {
        let selected = self.query.selected_category();
        self.store
            .categories()
            .into_iter()
            .map(|category| FilterOption {
                key: category.key().to_string(),
                label: category.label().to_string(),
                count: Some(self.store.count_in(category)),
                is_selected: category == selected,
            })
            .collect()
    }

    fn compute_subcategory_options(&self) -> Vec<FilterOption> {
        let selected = self.query.selected_subcategory();
        self.subcategories
            .iter()
            .map(|subcategory| FilterOption {
                key: subcategory.clone(),
                label: subcategory.clone(),
                count: None,
                is_selected: subcategory == selected,
            })
            .collect()
    }

    fn compute_card(entry: &CatalogEntry, search_query: &str) -> CardItem {
        CardItem {
            id: entry.id.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            category: entry.category.label().to_string(),
            subcategory: entry.subcategory_or_other().to_string(),
            technologies: entry.technologies.clone(),
            thumbnail: entry.effective_images().into_iter().next(),
            kind: entry.kind,
            issuer: entry.issuer.clone(),
            date: entry.date.clone(),
            highlight_ranges: compute_highlight_ranges(&entry.title, search_query),
        }
    }

    fn compute_pagination(&self, total_pages: usize) -> Option<PaginationBar> {
        if total_pages <= 1 {
            return None;
        }
        let current_page = self.query.current_page();
        Some(PaginationBar {
            current_page,
            total_pages,
            markers: engine::page_numbers(current_page, total_pages),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }

        if self.store.is_empty() {
            return Some(EmptyState {
                message: "No projects yet".to_string(),
                subtitle: "The catalog is empty".to_string(),
            });
        }

        let query = self.query.search_query();
        let subtitle = if query.is_empty() {
            "Try another category or subcategory".to_string()
        } else {
            format!("Nothing matches \"{query}\"")
        };

        Some(EmptyState {
            message: "No results found".to_string(),
            subtitle,
        })
    }

    fn compute_detail(&self) -> Option<DetailView> {
        let open = self.gallery.current()?;
        let entry = self.store.get(open.entry_id())?;
        let images = open.images();
        let current = open.current_index();

        let image = open.current_image().map(|src| ImageSlot {
            src: src.to_string(),
            label: entry.image_label(current),
        });

        let thumbnails = images
            .iter()
            .enumerate()
            .map(|(index, src)| Thumbnail {
                index,
                src: src.clone(),
                label: entry.image_label(index),
                is_current: index == current,
            })
            .collect();

        Some(DetailView {
            id: entry.id.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            category: entry.category.label().to_string(),
            subcategory: entry.subcategory_or_other().to_string(),
            technologies: entry.technologies.clone(),
            kind: entry.kind,
            issuer: entry.issuer.clone(),
            date: entry.date.clone(),
            link: entry.link.clone(),
            credential_id: entry.credential_id.clone(),
            show_placeholder: image.is_none() || open.load_failed(),
            image,
            counter: open
                .has_navigation()
                .then(|| format!("{} / {}", current + 1, images.len())),
            thumbnails,
            show_navigation: open.has_navigation(),
            is_zoomed: open.is_zoomed(),
            is_loading: open.is_loading(),
        })
    }
}

/// Character ranges of `text` matching `query`, case-insensitively.
///
/// Matches are non-overlapping and scanned left to right. Returns `(start,
/// end)` pairs in character indices with an exclusive end; an empty query
/// highlights nothing.
fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Folded characters paired with the index of the title character they came from.
    let haystack: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .flat_map(|(index, c)| c.to_lowercase().map(move |folded| (index, folded)))
        .collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let first = window[0].0;
            let last = window[needle.len() - 1].0;
            ranges.push((first, last + 1));
            start += needle.len();
            while start < haystack.len() && haystack[start].0 <= last {
                start += 1;
            }
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        let mut entries: Vec<CatalogEntry> = (1..=8)
            .map(|i| {
                CatalogEntry::new(i, format!("Kitchen Hood {i}"), Category::Technical)
                    .with_subcategory("Kitchen Equipment")
                    .with_image(format!("hood-{i}.png"))
            })
            .collect();
        entries.push(
            CatalogEntry::new(20, "Portfolio Site", Category::Web)
                .with_technologies(["React"])
                .with_image("site.png")
                .with_gallery(["site-2.png", "site-3.png"])
                .with_image_labels(["Landing page"]),
        );
        entries.push(CatalogEntry::new(21, "Process Flow", Category::Management));
        CatalogStore::new(entries)
    }

    #[test]
    fn category_change_recomputes_subcategories() {
        let mut state = AppState::new(store(), 6);
        assert_eq!(state.subcategories, vec!["All", "Kitchen Equipment", "Other"]);

        state.set_subcategory("Kitchen Equipment");
        state.set_category(Category::Web);
        assert_eq!(state.query.selected_subcategory(), "All");
        assert_eq!(state.subcategories, vec!["All", "Other"]);
        assert_eq!(state.filtered.len(), 1);
    }

    #[test]
    fn paging_is_clamped_and_reset_by_filters() {
        let mut state = AppState::new(store(), 6);
        assert_eq!(state.total_pages(), 2);

        state.set_page(9);
        assert_eq!(state.query.current_page(), 2);
        assert_eq!(state.current_page().items.len(), 4);

        state.push_search_char('h');
        assert_eq!(state.query.current_page(), 1);
    }

    #[test]
    fn viewmodel_lists_current_page() {
        let mut state = AppState::new(store(), 6);
        state.set_category(Category::Technical);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.title, "Technical Design");
        assert_eq!(vm.header.result_count, 8);
        assert_eq!(vm.cards.len(), 6);
        assert_eq!(vm.cards[0].subcategory, "Kitchen Equipment");
        assert_eq!(vm.cards[0].thumbnail.as_deref(), Some("hood-1.png"));

        let pagination = vm.pagination.expect("two pages");
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_previous);
        assert!(pagination.has_next);
        assert!(vm.empty_state.is_none());

        let selected: Vec<&str> = vm
            .categories
            .iter()
            .filter(|option| option.is_selected)
            .map(|option| option.key.as_str())
            .collect();
        assert_eq!(selected, vec!["tech"]);
    }

    #[test]
    fn viewmodel_reports_empty_results() {
        let mut state = AppState::new(store(), 6);
        state.set_search_query("zzz");
        let vm = state.compute_viewmodel();
        assert!(vm.cards.is_empty());
        assert!(vm.pagination.is_none());
        let empty = vm.empty_state.expect("empty state");
        assert_eq!(empty.message, "No results found");
        assert_eq!(empty.subtitle, "Nothing matches \"zzz\"");
    }

    #[test]
    fn search_highlights_title_matches() {
        let mut state = AppState::new(store(), 6);
        state.set_search_query("SITE");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].highlight_ranges, vec![(10, 14)]);
    }

    #[test]
    fn highlight_ranges_do_not_overlap() {
        assert_eq!(compute_highlight_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(compute_highlight_ranges("Café Crème", "CR"), vec![(5, 7)]);
        assert!(compute_highlight_ranges("anything", "").is_empty());
    }

    #[test]
    fn expanding_lowercase_matches_filter_and_highlight() {
        let store = CatalogStore::new(vec![
            CatalogEntry::new(1, "İstanbul Office", Category::Design),
            CatalogEntry::new(2, "Istanbul Depot", Category::Design),
        ]);
        let mut state = AppState::new(store, 6);

        state.set_search_query("İSTANBUL");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].title, "İstanbul Office");
        assert_eq!(vm.cards[0].highlight_ranges, vec![(0, 8)]);

        state.set_search_query("ul o");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards[0].highlight_ranges, vec![(6, 10)]);
    }

    #[test]
    fn detail_view_describes_current_image() {
        let mut state = AppState::new(store(), 6);
        let actions = state.open_detail(&EntryId::from(20)).expect("entry exists");
        assert_eq!(
            actions,
            vec![
                Action::RegisterKeyBindings,
                Action::LoadImage {
                    src: "site.png".to_string()
                },
            ]
        );

        let detail = state.compute_viewmodel().detail.expect("detail open");
        assert_eq!(detail.counter.as_deref(), Some("1 / 3"));
        assert!(detail.show_navigation);
        assert!(detail.is_loading);
        assert!(!detail.show_placeholder);
        let image = detail.image.expect("has image");
        assert_eq!(image.label, "Landing page");
        assert_eq!(detail.thumbnails.len(), 3);
        assert_eq!(detail.thumbnails[1].label, "Portfolio Site - Image 2");
        assert!(detail.thumbnails[0].is_current);
    }

    #[test]
    fn detail_without_images_shows_placeholder() {
        let mut state = AppState::new(store(), 6);
        let actions = state.open_detail(&EntryId::from(21)).expect("entry exists");
        assert_eq!(actions, vec![Action::RegisterKeyBindings]);

        let detail = state.compute_viewmodel().detail.expect("detail open");
        assert!(detail.image.is_none());
        assert!(detail.show_placeholder);
        assert!(detail.counter.is_none());
        assert!(!detail.show_navigation);
    }

    #[test]
    fn unknown_entry_does_not_open() {
        let mut state = AppState::new(store(), 6);
        assert!(state.open_detail(&EntryId::from(999)).is_none());
        assert!(!state.gallery.is_open());
        assert!(!state.key_bindings.is_active());
    }

    #[test]
    fn close_releases_bindings_once() {
        let mut state = AppState::new(store(), 6);
        state.open_detail(&EntryId::from(20));
        assert_eq!(state.close_detail(), vec![Action::ReleaseKeyBindings]);
        assert!(state.close_detail().is_empty());
    }
}
