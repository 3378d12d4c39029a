//! Stock status enum for catalog parts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a [`StockStatus`] from a string.
#[derive(Debug, Clone, Error)]
#[error("invalid stock status: {0}")]
pub struct ParseStockStatusError(String);

/// Availability status of a part.
///
/// Maps to the document store's `stockStatus` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Available for immediate purchase.
    #[default]
    InStock,
    /// Currently unavailable.
    OutOfStock,
    /// Orderable ahead of availability.
    PreOrder,
    /// Available, but only a few units remain.
    LimitedStock,
}

impl StockStatus {
    /// The wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
            Self::PreOrder => "pre-order",
            Self::LimitedStock => "limited-stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StockStatus {
    type Err = ParseStockStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Self::InStock),
            "out-of-stock" => Ok(Self::OutOfStock),
            "pre-order" => Ok(Self::PreOrder),
            "limited-stock" => Ok(Self::LimitedStock),
            other => Err(ParseStockStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&StockStatus::LimitedStock).unwrap();
        assert_eq!(json, "\"limited-stock\"");

        let status: StockStatus = serde_json::from_str("\"pre-order\"").unwrap();
        assert_eq!(status, StockStatus::PreOrder);
    }

    #[test]
    fn test_display_round_trip() {
        for status in [
            StockStatus::InStock,
            StockStatus::OutOfStock,
            StockStatus::PreOrder,
            StockStatus::LimitedStock,
        ] {
            let parsed: StockStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_parse_invalid() {
        let result = "backordered".parse::<StockStatus>();
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid stock status: backordered"
        );
    }
}
