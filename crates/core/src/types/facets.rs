//! Aggregate filter facets served by the filter-options endpoint.
//!
//! These are advisory: they populate filter UI affordances (checkbox lists
//! with per-value counts) and are not required for catalog correctness.

use serde::{Deserialize, Serialize};

/// A filterable value together with the number of parts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// The facet value (e.g., "Bosch").
    pub name: String,
    /// Number of catalog parts with this value.
    pub count: u32,
}

impl FacetCount {
    /// Create a new facet count.
    #[must_use]
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Aggregate counts per filterable dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Vehicle manufacturers with part counts.
    pub companies: Vec<FacetCount>,
    /// Catalog categories with part counts.
    pub categories: Vec<FacetCount>,
    /// Vehicle types with part counts.
    pub vehicle_types: Vec<FacetCount>,
    /// Fuel types with part counts.
    pub fuel_types: Vec<FacetCount>,
    /// Known transmission values (no counts on the wire).
    pub transmissions: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "companies": [{ "name": "Bosch", "count": 2 }],
            "categories": [{ "name": "Lighting", "count": 1 }],
            "vehicleTypes": [{ "name": "Car", "count": 8 }],
            "fuelTypes": [{ "name": "Petrol", "count": 7 }],
            "transmissions": ["Manual", "Automatic", "CVT"]
        }"#;

        let options: FilterOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.companies, vec![FacetCount::new("Bosch", 2)]);
        assert_eq!(options.transmissions.len(), 3);
    }
}
