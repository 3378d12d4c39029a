//! Sort keys and the comparator ordering the filtered collection.
//!
//! Each key maps to a typed accessor with its own coercion: prices and
//! review counts compare numerically, timestamps chronologically, and all
//! string fields case-insensitively. Sorting uses `sort_by`, which is
//! stable, so parts with equal keys keep their original relative order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use partshub_core::Part;

/// Field a catalog view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Part title, case-insensitive.
    Title,
    /// Manufacturer brand, case-insensitive.
    Brand,
    /// Catalog category, case-insensitive.
    Category,
    /// Vehicle manufacturer, case-insensitive.
    Company,
    /// Listed price, numeric.
    Price,
    /// Review count, numeric.
    Reviews,
    /// Creation timestamp.
    #[default]
    CreatedAt,
    /// Last-update timestamp.
    UpdatedAt,
}

impl SortKey {
    /// The wire representation of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Company => "company",
            Self::Price => "price",
            Self::Reviews => "reviews",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "brand" => Ok(Self::Brand),
            "category" => Ok(Self::Category),
            "company" => Ok(Self::Company),
            "price" => Ok(Self::Price),
            "reviews" => Ok(Self::Reviews),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Smallest (or earliest, or alphabetically first) value first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest value first.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// Order two parts by `key`, inverted when `direction` is descending.
#[must_use]
pub fn compare(a: &Part, b: &Part, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = match key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Reviews => a.reviews.cmp(&b.reviews),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortKey::Title => compare_folded(&a.title, &b.title),
        SortKey::Brand => compare_folded(&a.brand, &b.brand),
        SortKey::Category => compare_folded(&a.category, &b.category),
        SortKey::Company => compare_folded(&a.company, &b.company),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort `parts` in place by `key` and `direction`.
pub fn sort_parts(parts: &mut [Part], key: SortKey, direction: SortDirection) {
    parts.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
