//! PartsHub Core - Shared types library.
//!
//! This crate provides common types used across all PartsHub components:
//! - `catalog` - Catalog browsing state, filtering, and the parts API client
//! - `integration-tests` - Cross-crate browse-flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `Part` domain type, stock status, and filter facets

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
