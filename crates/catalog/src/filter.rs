//! Filter specification and the predicate deciding part inclusion.
//!
//! All criteria are combined with logical AND; within a set-valued
//! criterion, membership is ORed. An empty criterion passes vacuously, so
//! the default specification matches every part.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partshub_core::{Part, StockStatus};

use crate::sort::{SortDirection, SortKey};

/// The active search/filter/sort criteria for a catalog session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free-text search over title, brand, company, model, and part number.
    pub search: String,
    /// Selected vehicle manufacturers (empty = no constraint).
    pub companies: Vec<String>,
    /// Selected catalog categories (empty = no constraint).
    pub categories: Vec<String>,
    /// Selected vehicle types (empty = no constraint).
    pub vehicle_types: Vec<String>,
    /// Selected fuel types (empty = no constraint).
    pub fuel_types: Vec<String>,
    /// Selected transmissions (empty = no constraint).
    pub transmissions: Vec<String>,
    /// Required stock status (`None` = no constraint).
    pub stock_status: Option<StockStatus>,
    /// Minimum price, inclusive.
    pub min_price: Option<Decimal>,
    /// Maximum price, inclusive.
    pub max_price: Option<Decimal>,
    /// Active sort key.
    pub sort: SortKey,
    /// Active sort direction.
    pub direction: SortDirection,
}

impl Default for FilterSpec {
    /// Everything unconstrained, newest parts first.
    fn default() -> Self {
        Self {
            search: String::new(),
            companies: Vec::new(),
            categories: Vec::new(),
            vehicle_types: Vec::new(),
            fuel_types: Vec::new(),
            transmissions: Vec::new(),
            stock_status: None,
            min_price: None,
            max_price: None,
            sort: SortKey::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

/// Decide whether `part` satisfies every active criterion of `spec`.
///
/// Pure function of its inputs; the state manager relies on this to make
/// full recomputation deterministic.
#[must_use]
pub fn matches(part: &Part, spec: &FilterSpec) -> bool {
    if !spec.search.is_empty() {
        let term = spec.search.to_lowercase();
        let hit = [
            &part.title,
            &part.brand,
            &part.company,
            &part.model,
            &part.part_number,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    if !spec.companies.is_empty() && !spec.companies.contains(&part.company) {
        return false;
    }
    if !spec.categories.is_empty() && !spec.categories.contains(&part.category) {
        return false;
    }
    if !spec.vehicle_types.is_empty() && !spec.vehicle_types.contains(&part.vehicle_type) {
        return false;
    }
    if !spec.fuel_types.is_empty() && !spec.fuel_types.contains(&part.fuel_type) {
        return false;
    }
    if !spec.transmissions.is_empty() && !spec.transmissions.contains(&part.transmission) {
        return false;
    }

    if let Some(status) = spec.stock_status
        && part.stock_status != status
    {
        return false;
    }

    if let Some(min) = spec.min_price
        && part.price < min
    {
        return false;
    }
    if let Some(max) = spec.max_price
        && part.price > max
    {
        return false;
    }

    true
}
