//! Core types for PartsHub.
//!
//! This module provides the domain types shared across the workspace.

pub mod facets;
pub mod part;
pub mod status;

pub use facets::{FacetCount, FilterOptions};
pub use part::{Part, PartImages};
pub use status::{ParseStockStatusError, StockStatus};
