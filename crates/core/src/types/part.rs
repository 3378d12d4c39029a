//! The `Part` domain type.
//!
//! A `Part` is a single catalog entry as served by the parts API. Field
//! names follow the document store's camelCase schema so the type can be
//! deserialized directly from listing and detail responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::StockStatus;

/// Image references for a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PartImages {
    /// Small listing-card images.
    #[serde(default)]
    pub thumbnails: Vec<String>,
    /// Full-size detail-view images.
    #[serde(default)]
    pub previews: Vec<String>,
}

/// A single auto part in the catalog.
///
/// Parts are immutable once loaded into client state for a session and are
/// replaced wholesale on re-fetch. The discounted price is ingested as-is;
/// the store does not require it to be below `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Unique part identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Manufacturer brand (e.g., "Bosch").
    pub brand: String,
    /// Catalog category (e.g., "Braking System").
    pub category: String,
    /// Vehicle class the part fits (e.g., "Car", "SUV", "Bike").
    pub vehicle_type: String,
    /// Vehicle manufacturer (e.g., "Hyundai").
    pub company: String,
    /// Vehicle model (e.g., "i20").
    pub model: String,
    /// Vehicle variant, if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Fuel type of the target vehicle.
    pub fuel_type: String,
    /// Transmission of the target vehicle.
    pub transmission: String,
    /// Free-form specification map (e.g., "Voltage" -> "12V").
    #[serde(default)]
    pub specifications: HashMap<String, String>,
    /// Availability status.
    pub stock_status: StockStatus,
    /// Review count.
    pub reviews: u32,
    /// Listed price.
    pub price: Decimal,
    /// Discounted price, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
    /// Manufacturer part number.
    pub part_number: String,
    /// Warranty text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    /// Image references.
    #[serde(default, rename = "imgs", skip_serializing_if = "Option::is_none")]
    pub images: Option<PartImages>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
