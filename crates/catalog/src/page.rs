//! Pagination over the filtered collection.
//!
//! The calculator is defensive: a page outside `[1, total_pages]` yields an
//! empty (or short) slice rather than an error. Keeping navigation inside
//! valid bounds is the state manager's job.

use serde::{Deserialize, Serialize};

/// Derived pagination for the current filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page, 1-indexed.
    pub current_page: usize,
    /// Total page count; never zero, an empty collection still has one page.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Page size, fixed per session.
    pub items_per_page: usize,
    /// Whether a page follows the current one.
    pub has_next_page: bool,
    /// Whether a page precedes the current one.
    pub has_prev_page: bool,
}

/// Derive [`PageInfo`] for a collection of `total_items`.
#[must_use]
pub fn paginate(total_items: usize, current_page: usize, items_per_page: usize) -> PageInfo {
    let total_pages = total_items.div_ceil(items_per_page.max(1)).max(1);
    PageInfo {
        current_page,
        total_pages,
        total_items,
        items_per_page,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1,
    }
}

/// The window of `items` visible on `page`.
///
/// Out-of-range pages produce an empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    if page == 0 || items_per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(items_per_page);
    let end = start.saturating_add(items_per_page).min(items.len());
    items.get(start..end).unwrap_or(&[])
}
