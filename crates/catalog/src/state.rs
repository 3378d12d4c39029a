//! The catalog browsing state machine.
//!
//! [`CatalogState`] is a synchronous, single-writer state machine over the
//! in-memory catalog. Each public operation is a reducer-style transition:
//! it runs to completion before the next event is processed, so no caller
//! can observe a partially-updated state. The host application owns exactly
//! one instance per session.
//!
//! Every filter or sort mutation that actually changes its field triggers
//! the same full recomputation: re-filter the full collection, re-sort,
//! reset to page 1, re-paginate, and re-slice. Unchanged values are no-ops
//! so reactive UI layers are not re-rendered redundantly. `go_to_page` is
//! the one operation that only re-slices the already-derived collection.
//!
//! The only asynchronous boundary is the fetch: [`CatalogState::begin_fetch`]
//! hands out a [`FetchToken`], and completions carrying a superseded token
//! are discarded, so a slow response can never overwrite the result of a
//! newer fetch.

use rust_decimal::Decimal;

use partshub_core::{FilterOptions, Part, StockStatus};

use crate::filter::{self, FilterSpec};
use crate::page::{self, PageInfo};
use crate::sort::{self, SortDirection, SortKey};

/// Default page size for catalog views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Identifies one fetch cycle.
///
/// Returned by [`CatalogState::begin_fetch`]; pass it back to
/// [`CatalogState::fetch_succeeded`] or [`CatalogState::fetch_failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// The aggregate in-memory catalog-browsing state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Full collection as fetched; replaced wholesale on re-fetch.
    all_parts: Vec<Part>,
    /// Filtered and sorted; recomputed in full on every mutation.
    filtered_parts: Vec<Part>,
    /// The current page's window of `filtered_parts`.
    displayed_parts: Vec<Part>,
    /// Advisory facet counts for filter UI affordances.
    filter_options: Option<FilterOptions>,
    filters: FilterSpec,
    pagination: PageInfo,
    items_per_page: usize,
    loading: bool,
    error: Option<String>,
    selected_part: Option<Part>,
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl CatalogState {
    /// Create an empty catalog state with the given page size.
    ///
    /// A page size of zero is coerced to one.
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            all_parts: Vec::new(),
            filtered_parts: Vec::new(),
            displayed_parts: Vec::new(),
            filter_options: None,
            filters: FilterSpec::default(),
            pagination: page::paginate(0, 1, items_per_page),
            items_per_page,
            loading: false,
            error: None,
            selected_part: None,
            generation: 0,
        }
    }

    // =========================================================================
    // Fetch lifecycle
    // =========================================================================

    /// Mark a fetch as outstanding and clear any previous error.
    ///
    /// The returned token must accompany the matching completion. Starting
    /// a new fetch supersedes any still-outstanding one: its eventual
    /// completion will be discarded.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchToken(self.generation)
    }

    /// Replace the full collection with the fetched `parts`.
    ///
    /// The current filter specification is re-applied to the new
    /// collection and the view resets to page 1. Completions from a
    /// superseded fetch are ignored.
    pub fn fetch_succeeded(&mut self, token: FetchToken, parts: Vec<Part>) {
        if token.0 != self.generation {
            tracing::warn!(
                token = token.0,
                current = self.generation,
                "discarding result of superseded fetch"
            );
            return;
        }
        self.loading = false;
        self.all_parts = parts;
        self.recompute_derived();
    }

    /// Record a fetch failure, retaining the previous collection.
    ///
    /// Stale parts remain displayable alongside the error flag.
    pub fn fetch_failed(&mut self, token: FetchToken, error: impl std::fmt::Display) {
        if token.0 != self.generation {
            tracing::warn!(
                token = token.0,
                current = self.generation,
                "discarding failure of superseded fetch"
            );
            return;
        }
        self.loading = false;
        self.error = Some(error.to_string());
    }

    // =========================================================================
    // Filter and sort mutations
    // =========================================================================

    /// Set the free-text search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        if replace_if_changed(&mut self.filters.search, search.into()) {
            self.recompute_derived();
        }
    }

    /// Set the selected vehicle manufacturers.
    pub fn set_companies(&mut self, companies: Vec<String>) {
        if replace_if_changed(&mut self.filters.companies, companies) {
            self.recompute_derived();
        }
    }

    /// Set the selected catalog categories.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        if replace_if_changed(&mut self.filters.categories, categories) {
            self.recompute_derived();
        }
    }

    /// Set the selected vehicle types.
    pub fn set_vehicle_types(&mut self, vehicle_types: Vec<String>) {
        if replace_if_changed(&mut self.filters.vehicle_types, vehicle_types) {
            self.recompute_derived();
        }
    }

    /// Set the selected fuel types.
    pub fn set_fuel_types(&mut self, fuel_types: Vec<String>) {
        if replace_if_changed(&mut self.filters.fuel_types, fuel_types) {
            self.recompute_derived();
        }
    }

    /// Set the selected transmissions.
    pub fn set_transmissions(&mut self, transmissions: Vec<String>) {
        if replace_if_changed(&mut self.filters.transmissions, transmissions) {
            self.recompute_derived();
        }
    }

    /// Set or clear the required stock status.
    pub fn set_stock_status(&mut self, status: Option<StockStatus>) {
        if replace_if_changed(&mut self.filters.stock_status, status) {
            self.recompute_derived();
        }
    }

    /// Set or clear the price bounds.
    ///
    /// An inverted range (max below min) is accepted and yields an empty
    /// filtered collection.
    pub fn set_price_range(&mut self, min: Option<Decimal>, max: Option<Decimal>) {
        let min_changed = replace_if_changed(&mut self.filters.min_price, min);
        let max_changed = replace_if_changed(&mut self.filters.max_price, max);
        if min_changed || max_changed {
            self.recompute_derived();
        }
    }

    /// Set the sort key and direction.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        let key_changed = replace_if_changed(&mut self.filters.sort, key);
        let direction_changed = replace_if_changed(&mut self.filters.direction, direction);
        if key_changed || direction_changed {
            self.recompute_derived();
        }
    }

    /// Reset the filter specification to its default and recompute.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.recompute_derived();
    }

    // =========================================================================
    // Navigation and selection
    // =========================================================================

    /// Navigate to `page`, clamped into `[1, total_pages]`.
    ///
    /// Re-slices the already-filtered, already-sorted collection; nothing
    /// is re-filtered or re-sorted. Navigating to the current page is a
    /// no-op.
    pub fn go_to_page(&mut self, page: usize) {
        let target = page.clamp(1, self.pagination.total_pages);
        if target == self.pagination.current_page {
            return;
        }
        self.pagination = page::paginate(self.filtered_parts.len(), target, self.items_per_page);
        self.displayed_parts =
            page::page_slice(&self.filtered_parts, target, self.items_per_page).to_vec();
    }

    /// Set or clear the part shown in a detail view.
    ///
    /// Has no effect on filtering or pagination.
    pub fn select_part(&mut self, part: Option<Part>) {
        self.selected_part = part;
    }

    /// Store advisory facet counts for the filter UI.
    pub fn set_filter_options(&mut self, options: FilterOptions) {
        self.filter_options = Some(options);
    }

    /// Clear the recorded fetch error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The full collection as last fetched.
    #[must_use]
    pub fn all_parts(&self) -> &[Part] {
        &self.all_parts
    }

    /// The filtered, sorted collection across all pages.
    #[must_use]
    pub fn filtered_parts(&self) -> &[Part] {
        &self.filtered_parts
    }

    /// The current page's parts.
    #[must_use]
    pub fn displayed_parts(&self) -> &[Part] {
        &self.displayed_parts
    }

    /// The active filter specification.
    #[must_use]
    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Pagination derived from the filtered collection.
    #[must_use]
    pub const fn pagination(&self) -> PageInfo {
        self.pagination
    }

    /// Advisory facet counts, if fetched.
    #[must_use]
    pub const fn filter_options(&self) -> Option<&FilterOptions> {
        self.filter_options.as_ref()
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The latest fetch error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The part selected for a detail view, if any.
    #[must_use]
    pub const fn selected_part(&self) -> Option<&Part> {
        self.selected_part.as_ref()
    }

    /// Page size, fixed for the session.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Re-derive the filtered collection, pagination, and page slice from
    /// the full collection and the current specification.
    ///
    /// Always lands on page 1. Filter toggles are not monotonic with
    /// respect to the previous filtered collection, so derived state is
    /// rebuilt from the authoritative full collection rather than patched.
    fn recompute_derived(&mut self) {
        let mut filtered: Vec<Part> = self
            .all_parts
            .iter()
            .filter(|part| filter::matches(part, &self.filters))
            .cloned()
            .collect();
        sort::sort_parts(&mut filtered, self.filters.sort, self.filters.direction);

        self.pagination = page::paginate(filtered.len(), 1, self.items_per_page);
        self.displayed_parts = page::page_slice(&filtered, 1, self.items_per_page).to_vec();
        self.filtered_parts = filtered;

        tracing::debug!(
            total = self.all_parts.len(),
            filtered = self.filtered_parts.len(),
            pages = self.pagination.total_pages,
            "recomputed derived catalog state"
        );
    }
}

/// Replace `current` with `new` if they differ; returns whether it changed.
fn replace_if_changed<T: PartialEq>(current: &mut T, new: T) -> bool {
    if *current == new {
        false
    } else {
        *current = new;
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    use super::*;

    fn part(n: usize, company: &str, category: &str, price: i64) -> Part {
        let created = Utc::now() - Duration::days(i64::try_from(n).unwrap());
        Part {
            id: format!("part-{n}"),
            title: format!("{category} #{n}"),
            brand: "Bosch".to_string(),
            category: category.to_string(),
            vehicle_type: "Car".to_string(),
            company: company.to_string(),
            model: "i20".to_string(),
            variant: None,
            fuel_type: "Petrol".to_string(),
            transmission: "Manual".to_string(),
            specifications: HashMap::new(),
            stock_status: StockStatus::InStock,
            reviews: 10,
            price: Decimal::from(price),
            discounted_price: None,
            part_number: format!("PN-{n:04}"),
            warranty: None,
            images: None,
            created_at: created,
            updated_at: created,
        }
    }

    /// 25 parts: even indices Hyundai braking, odd indices Tata lighting.
    fn mixed_parts() -> Vec<Part> {
        (0..25)
            .map(|n| {
                if n % 2 == 0 {
                    part(n, "Hyundai", "Braking System", 1000 + i64::try_from(n).unwrap())
                } else {
                    part(n, "Tata", "Lighting", 3000 + i64::try_from(n).unwrap())
                }
            })
            .collect()
    }

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::new(9);
        let token = state.begin_fetch();
        state.fetch_succeeded(token, mixed_parts());
        state
    }

    fn assert_page_slice_consistent(state: &CatalogState) {
        let info = state.pagination();
        let expected = if info.current_page <= info.total_pages {
            info.total_items
                .saturating_sub((info.current_page - 1) * info.items_per_page)
                .min(info.items_per_page)
        } else {
            0
        };
        assert_eq!(state.displayed_parts().len(), expected);
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = CatalogState::new(9);
        assert!(!state.is_loading());

        let token = state.begin_fetch();
        assert!(state.is_loading());

        state.fetch_succeeded(token, mixed_parts());
        assert!(!state.is_loading());
        assert_eq!(state.all_parts().len(), 25);
        assert_eq!(state.filtered_parts().len(), 25);
        assert_eq!(state.pagination().total_pages, 3);
        assert_eq!(state.pagination().current_page, 1);
        assert_eq!(state.displayed_parts().len(), 9);
        assert_page_slice_consistent(&state);
    }

    #[test]
    fn test_fetch_succeeded_applies_filters_set_while_loading() {
        let mut state = CatalogState::new(9);
        let token = state.begin_fetch();
        // Filters issued while the fetch is outstanding apply against the
        // (empty) stale collection, then again when the fetch resolves.
        state.set_companies(vec!["Hyundai".to_string()]);
        state.fetch_succeeded(token, mixed_parts());

        assert_eq!(state.filtered_parts().len(), 13);
        assert!(state.filtered_parts().iter().all(|p| p.company == "Hyundai"));
    }

    #[test]
    fn test_fetch_failed_retains_previous_collection() {
        // Scenario D.
        let mut state = loaded_state();
        let before_filtered = state.filtered_parts().to_vec();
        let before_pagination = state.pagination();

        let token = state.begin_fetch();
        state.fetch_failed(token, "connection refused");

        assert_eq!(state.error(), Some("connection refused"));
        assert!(!state.is_loading());
        assert_eq!(state.all_parts().len(), 25);
        assert_eq!(state.filtered_parts(), before_filtered.as_slice());
        assert_eq!(state.pagination(), before_pagination);
    }

    #[test]
    fn test_begin_fetch_clears_error() {
        let mut state = CatalogState::new(9);
        let token = state.begin_fetch();
        state.fetch_failed(token, "boom");
        assert!(state.error().is_some());

        state.begin_fetch();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let mut state = CatalogState::new(9);
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The slow first response arrives after the second fetch started.
        state.fetch_succeeded(first, vec![part(0, "Stale", "Braking System", 1)]);
        assert!(state.all_parts().is_empty());
        assert!(state.is_loading());

        state.fetch_succeeded(second, mixed_parts());
        assert_eq!(state.all_parts().len(), 25);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_superseded_failure_does_not_clobber_loading() {
        let mut state = CatalogState::new(9);
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.fetch_failed(first, "late timeout");
        assert!(state.is_loading());
        assert!(state.error().is_none());

        state.fetch_succeeded(second, mixed_parts());
        assert_eq!(state.all_parts().len(), 25);
    }

    #[test]
    fn test_unchanged_filter_value_is_a_noop() {
        let mut state = loaded_state();
        state.set_companies(vec!["Hyundai".to_string()]);
        state.go_to_page(2);

        let snapshot = state.clone();
        // Same content, fresh allocation: compared by value, not identity.
        state.set_companies(vec!["Hyundai".to_string()]);
        assert_eq!(state, snapshot);

        // In particular the page survives, because nothing recomputed.
        assert_eq!(state.pagination().current_page, 2);
    }

    #[test]
    fn test_filter_mutation_resets_to_page_one() {
        let mut state = loaded_state();
        state.go_to_page(3);
        assert_eq!(state.pagination().current_page, 3);

        state.set_search("braking");
        assert_eq!(state.pagination().current_page, 1);
        assert_page_slice_consistent(&state);
    }

    #[test]
    fn test_sort_mutation_resets_to_page_one() {
        let mut state = loaded_state();
        state.go_to_page(2);

        state.set_sort(SortKey::Price, SortDirection::Ascending);
        assert_eq!(state.pagination().current_page, 1);

        let first = &state.displayed_parts()[0];
        assert_eq!(first.price, Decimal::from(1000));
    }

    #[test]
    fn test_price_range_and_transmissions_recompute() {
        let mut state = loaded_state();

        state.set_price_range(Some(Decimal::from(3000)), None);
        assert_eq!(state.filtered_parts().len(), 12);
        assert!(state.filtered_parts().iter().all(|p| p.category == "Lighting"));

        state.set_transmissions(vec!["Automatic".to_string()]);
        assert!(state.filtered_parts().is_empty());
        assert_eq!(state.pagination().total_pages, 1);
        assert_page_slice_consistent(&state);
    }

    #[test]
    fn test_go_to_page_reslices_without_reordering() {
        let mut state = loaded_state();
        state.set_sort(SortKey::Price, SortDirection::Ascending);

        let all_sorted = state.filtered_parts().to_vec();
        state.go_to_page(2);

        assert_eq!(state.pagination().current_page, 2);
        assert!(state.pagination().has_prev_page);
        assert_eq!(state.displayed_parts(), &all_sorted[9..18]);
        // The derived collection itself is untouched.
        assert_eq!(state.filtered_parts(), all_sorted.as_slice());
    }

    #[test]
    fn test_go_to_page_beyond_last_is_clamped() {
        // Scenario E: a single-page result never shows an empty page 2.
        let mut state = CatalogState::new(9);
        let token = state.begin_fetch();
        state.fetch_succeeded(
            token,
            (0..5).map(|n| part(n, "Hyundai", "Braking System", 1000)).collect(),
        );
        assert_eq!(state.pagination().total_pages, 1);

        state.go_to_page(2);
        assert_eq!(state.pagination().current_page, 1);
        assert_eq!(state.displayed_parts().len(), 5);
    }

    #[test]
    fn test_clear_filters_restores_default_spec() {
        let mut state = loaded_state();
        state.set_companies(vec!["Hyundai".to_string()]);
        state.set_search("braking");
        state.set_sort(SortKey::Price, SortDirection::Ascending);
        assert_ne!(state.filtered_parts().len(), 25);

        state.clear_filters();
        assert_eq!(state.filters(), &FilterSpec::default());
        assert_eq!(state.filtered_parts().len(), 25);
        assert_eq!(state.pagination().current_page, 1);
        assert_page_slice_consistent(&state);
    }

    #[test]
    fn test_select_part_leaves_pagination_alone() {
        let mut state = loaded_state();
        state.go_to_page(2);
        let before = state.pagination();

        state.select_part(Some(part(99, "Hyundai", "Braking System", 1)));
        assert!(state.selected_part().is_some());
        assert_eq!(state.pagination(), before);

        state.select_part(None);
        assert!(state.selected_part().is_none());
    }

    #[test]
    fn test_pagination_consistency_across_operations() {
        let mut state = loaded_state();
        assert_page_slice_consistent(&state);

        state.go_to_page(3);
        assert_page_slice_consistent(&state);

        state.set_companies(vec!["Hyundai".to_string()]);
        assert_page_slice_consistent(&state);

        state.set_companies(Vec::new());
        state.go_to_page(2);
        assert_page_slice_consistent(&state);

        state.clear_filters();
        assert_page_slice_consistent(&state);
    }

    #[test]
    fn test_zero_items_per_page_is_coerced() {
        let state = CatalogState::new(0);
        assert_eq!(state.items_per_page(), 1);
    }
}
