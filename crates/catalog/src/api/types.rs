//! Wire envelopes for the parts API.
//!
//! Every endpoint wraps its payload in a `success`/`data` envelope; the
//! listing endpoint adds its own pagination block, which drives the bulk
//! fetch loop and is unrelated to the catalog view's [`crate::page::PageInfo`].

use serde::{Deserialize, Serialize};

use partshub_core::{FilterOptions, Part};

/// Response body of `GET /auto-parts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Whether the endpoint handled the request.
    pub success: bool,
    /// Parts on this page.
    #[serde(default)]
    pub data: Vec<Part>,
    /// Server-side pagination of the listing itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<ListingPageInfo>,
}

/// Server-side pagination block of a listing response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPageInfo {
    /// Page served, 1-indexed.
    pub current_page: u32,
    /// Total pages at the requested limit.
    pub total_pages: u32,
    /// Total parts in the store.
    pub total_items: u64,
    /// Requested page size.
    pub items_per_page: u32,
    /// Whether more pages follow.
    pub has_next_page: bool,
    /// Whether pages precede this one.
    pub has_prev_page: bool,
}

/// Response body of `GET /auto-parts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Whether the endpoint handled the request.
    pub success: bool,
    /// The requested part, if found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Part>,
}

/// Response body of `GET /auto-parts/filters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    /// Whether the endpoint handled the request.
    pub success: bool,
    /// Aggregate facet counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FilterOptions>,
}
