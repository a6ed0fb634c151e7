//! Pure derivation functions: filtering, subcategory derivation and
//! pagination.
//!
//! Nothing in this module holds state. Callers pass the immutable entry list
//! and the current [`QueryState`](crate::QueryState) and get fresh derived
//! values back, so every output is a function of its inputs alone.
//!
//! # Modules
//!
//! - [`filter`]: de-duplication, category/subcategory/text predicates
//! - [`pagination`]: page slicing, page count and the pagination bar

pub mod filter;
pub mod pagination;

pub use filter::{
    available_categories, available_subcategories, count_in_category, dedupe, filter_entries,
    matches_category, matches_subcategory,
};
pub use pagination::{clamp_page, page_numbers, paginate, total_pages, Page, PageMarker};
