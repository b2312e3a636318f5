//! The fetch loop
//!
//! Drives a [`PagePlan`](super::PagePlan) through a transport, appending
//! each page's `docs` to the accumulator. Pages are fetched one at a time
//! in ascending page order; an error on any page aborts the whole run and
//! the partial accumulator is dropped.

use super::plan::PagePlan;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{PageResponse, QueryParams, Record, ResourceKind};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Query keys owned by the fetcher. Caller filters using one of these are
/// overridden by the pagination parameters, with a warning.
pub const RESERVED_PARAMS: [&str; 3] = ["api_key", "page", "page_size"];

/// Transport seam for the fetch loop: one page request in, one parsed page
/// out. Implemented for [`HttpClient`]; tests substitute fakes.
#[async_trait]
pub trait PageTransport: Send + Sync {
    /// Fetch a single page from `url` with `params` as the query string
    async fn fetch_page(&self, url: &str, params: &QueryParams) -> Result<PageResponse>;
}

#[async_trait]
impl PageTransport for HttpClient {
    async fn fetch_page(&self, url: &str, params: &QueryParams) -> Result<PageResponse> {
        self.get_json_with_config(url, RequestConfig::new().queries(params))
            .await
    }
}

/// One fetch run: how many records of which kind, under which filters
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Opaque API key passed through as the `api_key` parameter
    pub api_key: String,
    /// Number of records to retrieve
    pub count: u32,
    /// Which endpoint to query
    pub kind: ResourceKind,
    /// Caller-supplied filter parameters, passed through verbatim;
    /// dot-path keys like `sourceResource.collection.title` are supported
    /// by the upstream API
    pub filters: QueryParams,
}

impl FetchRequest {
    /// Create a request for `count` items
    pub fn new(api_key: impl Into<String>, count: u32) -> Self {
        Self {
            api_key: api_key.into(),
            count,
            kind: ResourceKind::default(),
            filters: QueryParams::new(),
        }
    }

    /// Set the resource kind
    #[must_use]
    pub fn kind(mut self, kind: ResourceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a filter parameter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

/// Paginated fetcher over a page transport
pub struct Fetcher<T: PageTransport> {
    transport: T,
    endpoints: Endpoints,
}

impl Fetcher<HttpClient> {
    /// Fetcher over a default HTTP client, targeting the public DPLA API
    pub fn new() -> Self {
        Self::with_transport(HttpClient::new())
    }
}

impl Default for Fetcher<HttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PageTransport> Fetcher<T> {
    /// Fetcher over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            endpoints: Endpoints::default(),
        }
    }

    /// Override the endpoint table
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch up to `request.count` records matching the request's filters,
    /// concatenated across pages in the order pages were fetched.
    ///
    /// The first failed page aborts the run: the error propagates and any
    /// records already accumulated are dropped.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Record>> {
        let plan = PagePlan::for_count(request.count);
        let url = self.endpoints.url_for(request.kind);

        for key in RESERVED_PARAMS {
            if request.filters.contains_key(key) {
                warn!(
                    "filter parameter {key:?} is reserved for pagination control \
                     and will be overridden"
                );
            }
        }

        let mut params = request.filters.clone();
        params.insert("api_key".to_string(), request.api_key.clone());

        let mut records = Vec::new();
        for page in plan.pages() {
            params.insert("page".to_string(), page.page.to_string());
            params.insert("page_size".to_string(), page.page_size.to_string());

            let response = self.transport.fetch_page(url, &params).await?;
            debug!("page {}: fetched {} records", page.page, response.len());
            records.extend(response.docs);
        }

        info!(
            "fetched {} {} records in {} requests",
            records.len(),
            request.kind,
            plan.request_count()
        );
        Ok(records)
    }
}
