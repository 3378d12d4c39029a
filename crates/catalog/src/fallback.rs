//! Bundled fallback dataset.
//!
//! When the parts API is unreachable, the fetcher serves this static
//! dataset instead so the storefront still renders a browsable catalog.
//! The records are a simplified shape; [`load`] maps them into full
//! [`Part`]s with defaulted vehicle fields.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use partshub_core::{FacetCount, FilterOptions, Part, PartImages, StockStatus};

/// Bundled at compile time; parsed on demand.
const FALLBACK_JSON: &str = include_str!("../data/fallback_parts.json");

/// Default warranty applied to every fallback part.
const DEFAULT_WARRANTY: &str = "1 Year";

/// Error loading the bundled dataset.
#[derive(Debug, Error)]
#[error("failed to parse bundled fallback dataset: {0}")]
pub struct FallbackError(#[from] serde_json::Error);

/// A simplified product record as stored in the bundled dataset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FallbackPart {
    id: String,
    name: String,
    category: String,
    brand: String,
    price: Decimal,
    #[serde(default)]
    original_price: Option<Decimal>,
    image: String,
    in_stock: bool,
    reviews: u32,
    #[serde(default)]
    specifications: HashMap<String, String>,
}

/// Load the bundled dataset as full catalog parts.
///
/// Fields the simplified records lack are defaulted: vehicle type "Car",
/// fuel type "Petrol", transmission "Manual", variant "Standard". The
/// company is taken from the brand and the model from the first two words
/// of the product name.
///
/// # Errors
///
/// Returns [`FallbackError`] if the bundled JSON fails to parse.
pub fn load() -> Result<Vec<Part>, FallbackError> {
    let records: Vec<FallbackPart> = serde_json::from_str(FALLBACK_JSON)?;
    let now = Utc::now();

    Ok(records
        .into_iter()
        .map(|record| {
            let model: String = record.name.split_whitespace().take(2).collect();
            Part {
                part_number: record.id.to_uppercase(),
                id: record.id,
                title: record.name,
                brand: record.brand.clone(),
                category: record.category,
                vehicle_type: "Car".to_string(),
                company: record.brand,
                model,
                variant: Some("Standard".to_string()),
                fuel_type: "Petrol".to_string(),
                transmission: "Manual".to_string(),
                specifications: record.specifications,
                stock_status: if record.in_stock {
                    StockStatus::InStock
                } else {
                    StockStatus::OutOfStock
                },
                reviews: record.reviews,
                price: record.price,
                discounted_price: record.original_price,
                warranty: Some(DEFAULT_WARRANTY.to_string()),
                images: Some(PartImages {
                    thumbnails: vec![record.image.clone()],
                    previews: vec![record.image],
                }),
                created_at: now,
                updated_at: now,
            }
        })
        .collect())
}

/// Aggregate facet counts matching the bundled dataset.
///
/// Served when the filter-options endpoint is unreachable.
#[must_use]
pub fn filter_options() -> FilterOptions {
    FilterOptions {
        companies: vec![
            FacetCount::new("Castrol", 2),
            FacetCount::new("Valeo", 2),
            FacetCount::new("Bosch", 2),
            FacetCount::new("Mann Filter", 1),
            FacetCount::new("Hella", 1),
            FacetCount::new("NGK", 1),
            FacetCount::new("Monroe", 1),
            FacetCount::new("Denso", 1),
            FacetCount::new("Exide", 1),
        ],
        categories: vec![
            FacetCount::new("Engine Components", 4),
            FacetCount::new("Braking System", 2),
            FacetCount::new("Lighting", 1),
            FacetCount::new("Suspension System", 1),
            FacetCount::new("Fuel System", 1),
            FacetCount::new("Cooling System", 1),
            FacetCount::new("Accessories", 1),
        ],
        vehicle_types: vec![
            FacetCount::new("Car", 8),
            FacetCount::new("SUV", 2),
            FacetCount::new("Bike", 1),
        ],
        fuel_types: vec![
            FacetCount::new("Petrol", 7),
            FacetCount::new("Diesel", 3),
            FacetCount::new("Electric", 1),
        ],
        transmissions: vec![
            "Manual".to_string(),
            "Automatic".to_string(),
            "CVT".to_string(),
        ],
    }
}
