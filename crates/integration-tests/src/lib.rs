//! Integration tests for PartsHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p partshub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browse_flow` - Full catalog browsing sessions over the state machine
//! - `fetch_flow` - Fetcher against a local mock of the parts API
//!
//! The tests here are self-contained: the mock API is served in-process on
//! an ephemeral port, so no external services are required.
