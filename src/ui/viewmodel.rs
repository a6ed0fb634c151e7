//! View model types representing renderable catalog state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel()` and contain display-ready data only: labels are
//! resolved, pages are sliced, and highlight ranges are pre-computed. Every
//! type serializes to JSON so any front end can consume it.

use crate::app::modes::ViewMode;
use crate::domain::{EntryId, EntryKind};
use crate::engine::PageMarker;
use serde::Serialize;

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogViewModel {
    pub header: HeaderInfo,

    /// Category filter buttons, `All` first.
    pub categories: Vec<FilterOption>,

    /// Subcategory filter buttons for the selected category, `All` first.
    pub subcategories: Vec<FilterOption>,

    pub search_bar: SearchBarInfo,

    pub view_mode: ViewMode,

    /// Cards on the current page, in catalog order.
    pub cards: Vec<CardItem>,

    /// Pagination bar; omitted when everything fits on one page.
    pub pagination: Option<PaginationBar>,

    /// Shown instead of cards when the filters match nothing.
    pub empty_state: Option<EmptyState>,

    /// Open detail view, if any.
    pub detail: Option<DetailView>,
}

/// Heading above the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    /// Selected category label, e.g. "Technical Design".
    pub title: String,

    /// Selected category description.
    pub subtitle: String,

    /// Number of entries matching all filters.
    pub result_count: usize,
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Token that selects this option (category key or subcategory name).
    pub key: String,
    pub label: String,
    /// Entry count badge; only set for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardItem {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub technologies: Vec<String>,
    pub thumbnail: Option<String>,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Ranges of the title matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end
    /// exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    pub current_page: usize,
    pub total_pages: usize,
    pub markers: Vec<PageMarker>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Message shown when no cards are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The open detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub technologies: Vec<String>,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,

    /// Current image; `None` when the entry has no images.
    pub image: Option<ImageSlot>,

    /// Render a placeholder instead of the image (no images, or the current
    /// one failed to load).
    pub show_placeholder: bool,

    /// "i / n" position text; omitted for single-image entries.
    pub counter: Option<String>,

    pub thumbnails: Vec<Thumbnail>,
    pub show_navigation: bool,
    pub is_zoomed: bool,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub label: String,
    pub is_current: bool,
}
