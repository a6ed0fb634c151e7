//! Fixed-size pagination over a filtered list.
//!
//! [`paginate`] is pure and stateless. Resetting to page 1 when filters
//! change is the query state's job, not this module's.

use serde::Serialize;

/// Pages shown before the pagination bar collapses into ellipses.
const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the requested page; empty when the page is out of range.
    pub items: Vec<T>,
    /// `ceil(len / page_size)`, 0 for an empty list.
    pub total_pages: usize,
}

/// Slices `entries` into the 1-based `page` of size `page_size`.
///
/// Out-of-range input never panics: page 0, a page past the end, and a
/// `page_size` of 0 all produce empty `items`.
///
/// # Examples
///
/// ```
/// use folio_catalog::engine::paginate;
///
/// let items: Vec<u32> = (1..=7).collect();
/// let first = paginate(&items, 1, 6);
/// assert_eq!(first.total_pages, 2);
/// assert_eq!(first.items.len(), 6);
/// assert_eq!(paginate(&items, 2, 6).items, vec![7]);
/// assert!(paginate(&items, 3, 6).items.is_empty());
/// ```
#[must_use]
pub fn paginate<T: Clone>(entries: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = total_pages(entries.len(), page_size);

    if page == 0 || page > total {
        return Page {
            items: Vec::new(),
            total_pages: total,
        };
    }

    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(entries.len());

    Page {
        items: entries[start..end].to_vec(),
        total_pages: total,
    }
}

/// `ceil(count / page_size)`, with 0 for an empty list or a zero page size.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    let full = count / page_size;
    if count % page_size == 0 {
        full
    } else {
        full + 1
    }
}

/// Clamps `page` into `[1, max(total_pages, 1)]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// A slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Builds the pagination bar for `current` out of `total` pages.
///
/// Up to seven pages are listed in full. Beyond that the bar shows the first
/// page, the neighbours of the current page, and the last page, with an
/// ellipsis wherever pages are skipped.
///
/// ```
/// use folio_catalog::engine::{page_numbers, PageMarker::{Ellipsis, Number}};
///
/// assert_eq!(page_numbers(2, 3), vec![Number(1), Number(2), Number(3)]);
/// assert_eq!(
///     page_numbers(5, 10),
///     vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
/// );
/// ```
#[must_use]
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= MAX_UNCOLLAPSED_PAGES {
        return (1..=total).map(PageMarker::Number).collect();
    }

    let current = clamp_page(current, total);
    let mut markers = vec![PageMarker::Number(1)];

    if current > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total - 1);
    markers.extend((window_start..=window_end).map(PageMarker::Number));

    if current + 2 < total {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Number(total));
    markers
}
