//! Parts API client.
//!
//! Uses `reqwest` for HTTP and caches single-part detail lookups with
//! `moka` (5-minute TTL). The bulk listing fetch is never cached; the
//! catalog state manager retains the collection for the session.
//!
//! The listing path always resolves to *some* collection: when the
//! endpoint is unreachable it serves the bundled fallback dataset instead
//! of surfacing the transport error. The detail path has no fallback and
//! propagates failures as-is.

pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use partshub_core::{FilterOptions, Part};

use crate::config::CatalogConfig;
use crate::fallback;

use types::{DetailResponse, FilterOptionsResponse, ListingResponse};

/// Errors that can occur when fetching from the parts API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint answered without a payload.
    #[error("response body missing data")]
    MissingData,

    /// Part not found.
    #[error("part not found: {0}")]
    NotFound(String),

    /// Listing unreachable and the bundled fallback dataset failed too.
    /// Carries the original listing failure.
    #[error("listing unavailable (fallback dataset also failed): {0}")]
    Unavailable(#[source] Box<FetchError>),
}

/// Client for the parts API.
///
/// Cheaply cloneable; all clones share one connection pool and detail
/// cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    fetch_page_size: u32,
    detail_cache: Cache<String, Part>,
}

impl CatalogClient {
    /// Create a new parts API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let detail_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
                fetch_page_size: config.fetch_page_size,
                detail_cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Fetch the full part collection.
    ///
    /// Pages through the listing endpoint at the configured limit,
    /// concatenating results while the endpoint reports another page. On
    /// any transport error, non-success status, or parse failure the paged
    /// fetch is abandoned and the bundled fallback dataset is served
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unavailable`] carrying the original failure
    /// only if the fallback dataset itself cannot be loaded.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Part>, FetchError> {
        match self.fetch_all_pages().await {
            Ok(parts) => Ok(parts),
            Err(err) => {
                warn!(error = %err, "listing fetch failed, serving bundled fallback dataset");
                match fallback::load() {
                    Ok(parts) => Ok(parts),
                    Err(fallback_err) => {
                        tracing::error!(error = %fallback_err, "fallback dataset unavailable");
                        Err(FetchError::Unavailable(Box::new(err)))
                    }
                }
            }
        }
    }

    async fn fetch_all_pages(&self) -> Result<Vec<Part>, FetchError> {
        let url = self.endpoint("auto-parts");
        let mut all = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .inner
                .client
                .get(&url)
                .query(&[("page", page), ("limit", self.inner.fetch_page_size)])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status));
            }

            let text = response.text().await?;
            let body: ListingResponse = serde_json::from_str(&text)?;

            // A handled failure on the server side ends the loop with
            // whatever was accumulated so far.
            if !body.success {
                warn!(page, "listing endpoint reported failure, stopping pagination");
                break;
            }

            all.extend(body.data);
            debug!(page, total = all.len(), "fetched listing page");

            match body.pagination {
                Some(info) if info.has_next_page => page += 1,
                _ => break,
            }
        }

        Ok(all)
    }

    // =========================================================================
    // Filter options
    // =========================================================================

    /// Fetch aggregate facet counts for the filter UI.
    ///
    /// Advisory only: on any failure the bundled aggregate is served, so
    /// this never errors.
    #[instrument(skip(self))]
    pub async fn filter_options(&self) -> FilterOptions {
        match self.fetch_filter_options().await {
            Ok(options) => options,
            Err(err) => {
                warn!(error = %err, "filter-options fetch failed, serving bundled fallback");
                fallback::filter_options()
            }
        }
    }

    async fn fetch_filter_options(&self) -> Result<FilterOptions, FetchError> {
        let url = self.endpoint("auto-parts/filters");
        let response = self.inner.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let text = response.text().await?;
        let body: FilterOptionsResponse = serde_json::from_str(&text)?;
        if !body.success {
            return Err(FetchError::MissingData);
        }
        body.data.ok_or(FetchError::MissingData)
    }

    // =========================================================================
    // Detail
    // =========================================================================

    /// Fetch a single part by id.
    ///
    /// Results are cached for 5 minutes. There is no fallback for detail
    /// lookups.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] for unknown ids; transport and
    /// parse failures propagate as-is.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_part(&self, id: &str) -> Result<Part, FetchError> {
        if let Some(part) = self.inner.detail_cache.get(id).await {
            debug!("cache hit for part detail");
            return Ok(part);
        }

        let url = self.endpoint(&format!("auto-parts/{id}"));
        let response = self.inner.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let text = response.text().await?;
        let body: DetailResponse = serde_json::from_str(&text)?;
        let part = body.data.ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        self.inner
            .detail_cache
            .insert(id.to_string(), part.clone())
            .await;

        Ok(part)
    }

    /// Invalidate a cached part detail.
    pub async fn invalidate_part(&self, id: &str) {
        self.inner.detail_cache.invalidate(id).await;
    }
}
