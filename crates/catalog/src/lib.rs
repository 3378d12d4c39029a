//! PartsHub catalog browsing.
//!
//! This crate owns the in-memory catalog-browsing state for a storefront
//! session: the full part collection fetched from the parts API, the active
//! filter/sort specification, and the derived (filtered, sorted, paginated)
//! view the UI renders from.
//!
//! # Architecture
//!
//! - [`api::CatalogClient`] fetches the full collection (paged internally)
//!   and falls back to a bundled static dataset when the API is unreachable
//! - [`filter`], [`sort`], and [`page`] are pure functions over parts
//! - [`state::CatalogState`] orchestrates them: every filter or sort
//!   mutation re-derives the filtered collection from scratch from the full
//!   collection, resets to page 1, and re-slices the current page
//!
//! Derived state is always recomputed fully, never patched incrementally:
//! filter toggles are not monotonic with respect to the existing filtered
//! collection, so full recomputation from the authoritative collection is
//! the only approach that is trivially correct.
//!
//! # Example
//!
//! ```rust,ignore
//! use partshub_catalog::api::CatalogClient;
//! use partshub_catalog::config::CatalogConfig;
//! use partshub_catalog::state::CatalogState;
//!
//! let config = CatalogConfig::from_env()?;
//! let client = CatalogClient::new(&config);
//! let mut state = CatalogState::new(config.items_per_page);
//!
//! let token = state.begin_fetch();
//! match client.fetch_all().await {
//!     Ok(parts) => state.fetch_succeeded(token, parts),
//!     Err(err) => state.fetch_failed(token, &err),
//! }
//!
//! state.set_companies(vec!["Hyundai".into()]);
//! for part in state.displayed_parts() {
//!     println!("{} - {}", part.title, part.price);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod fallback;
pub mod filter;
pub mod page;
pub mod sort;
pub mod state;

pub use api::{CatalogClient, FetchError};
pub use config::CatalogConfig;
pub use filter::FilterSpec;
pub use page::PageInfo;
pub use sort::{SortDirection, SortKey};
pub use state::{CatalogState, FetchToken};
