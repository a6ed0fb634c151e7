//! User-driven query state.
//!
//! [`QueryState`] holds the current filter, search and page selections. It
//! owns no filtering logic; its setters exist to enforce one invariant:
//! changing the category, subcategory or search text puts the page pointer
//! back on page 1, so it never references results of a previous filter.

use super::modes::ViewMode;
use crate::domain::Category;
use crate::engine::pagination::clamp_page;

/// Subcategory sentinel meaning "no subcategory filter".
pub const ALL_SUBCATEGORIES: &str = "All";

/// Entries per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Current filter/search/page selections.
///
/// # Examples
///
/// ```
/// use folio_catalog::{Category, QueryState};
///
/// let mut query = QueryState::default();
/// query.set_page(3, 5);
/// assert_eq!(query.current_page(), 3);
///
/// query.set_category(Category::Web);
/// assert_eq!(query.current_page(), 1);
/// assert_eq!(query.selected_subcategory(), "All");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    selected_category: Category,
    selected_subcategory: String,
    search_query: String,
    current_page: usize,
    page_size: usize,
    view_mode: ViewMode,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Creates the default state with a fixed page size (at least 1).
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            selected_category: Category::All,
            selected_subcategory: ALL_SUBCATEGORIES.to_string(),
            search_query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            view_mode: ViewMode::default(),
        }
    }

    #[must_use]
    pub const fn selected_category(&self) -> Category {
        self.selected_category
    }

    #[must_use]
    pub fn selected_subcategory(&self) -> &str {
        &self.selected_subcategory
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// 1-based page index.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Selects a category. Always resets the subcategory to `"All"` and the
    /// page to 1, even when re-selecting the current category.
    pub fn set_category(&mut self, category: Category) {
        self.selected_category = category;
        ALL_SUBCATEGORIES.clone_into(&mut self.selected_subcategory);
        self.current_page = 1;
    }

    pub fn set_subcategory(&mut self, subcategory: impl Into<String>) {
        self.selected_subcategory = subcategory.into();
        self.current_page = 1;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.current_page = 1;
    }

    /// Removes the last character of the query. Returns `false` when the
    /// query was already empty, in which case nothing changes.
    pub fn pop_search_char(&mut self) -> bool {
        if self.search_query.pop().is_none() {
            return false;
        }
        self.current_page = 1;
        true
    }

    /// Moves to `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.set_page(self.current_page.saturating_add(1), total_pages);
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        self.set_page(self.current_page.saturating_sub(1), total_pages);
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}
