//! Tests for the paginated fetcher

use super::*;
use crate::endpoints::Endpoints;
use crate::error::{Error, Result};
use crate::types::{PageResponse, QueryParams, ResourceKind};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use test_case::test_case;

// ============================================================================
// PagePlan Tests
// ============================================================================

#[test_case(0, 0, 0; "zero count issues no requests")]
#[test_case(1, 0, 1; "single record is one remainder page")]
#[test_case(499, 0, 1; "just under a page")]
#[test_case(500, 1, 0; "exactly one page")]
#[test_case(501, 1, 1; "one page plus one record")]
#[test_case(1000, 2, 0; "exact multiple of the page size")]
#[test_case(1200, 2, 1; "two full pages plus remainder")]
fn test_page_plan_split(count: u32, full_pages: u32, remainder_pages: u32) {
    let plan = PagePlan::for_count(count);
    assert_eq!(plan.full_pages, full_pages);
    assert_eq!(plan.request_count(), full_pages + remainder_pages);
    assert_eq!(plan.count(), count);
}

#[test]
fn test_page_plan_request_count_is_ceil() {
    for count in 0..=2000 {
        let plan = PagePlan::for_count(count);
        let expected = count.div_ceil(PAGE_SIZE);
        assert_eq!(plan.request_count(), expected, "count = {count}");
    }
}

#[test]
fn test_page_plan_pages_for_1200() {
    let plan = PagePlan::for_count(1200);
    let pages: Vec<_> = plan.pages().collect();

    assert_eq!(
        pages,
        vec![
            PageRequest {
                page: 1,
                page_size: 500
            },
            PageRequest {
                page: 2,
                page_size: 500
            },
            PageRequest {
                page: 3,
                page_size: 200
            },
        ]
    );
}

#[test]
fn test_page_plan_no_remainder_request_on_exact_multiple() {
    let plan = PagePlan::for_count(1000);
    let pages: Vec<_> = plan.pages().collect();

    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|p| p.page_size == PAGE_SIZE));
    assert_eq!(pages.last().unwrap().page, 2);
}

#[test]
fn test_page_plan_zero_count_yields_no_pages() {
    let plan = PagePlan::for_count(0);
    assert_eq!(plan.pages().count(), 0);
}

#[test]
fn test_page_plan_small_count_is_single_remainder() {
    let plan = PagePlan::for_count(42);
    let pages: Vec<_> = plan.pages().collect();

    assert_eq!(
        pages,
        vec![PageRequest {
            page: 1,
            page_size: 42
        }]
    );
}

// ============================================================================
// Fake transport
// ============================================================================

/// Records every call and serves canned pages keyed by page number.
/// Pages without a canned response come back empty, like an upstream
/// body with no `docs` key.
#[derive(Default)]
struct FakeTransport {
    pages: HashMap<u32, PageResponse>,
    fail_on_page: Option<u32>,
    calls: Mutex<Vec<(String, QueryParams)>>,
}

impl FakeTransport {
    fn with_pages(pages: HashMap<u32, PageResponse>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    fn failing_on(page: u32) -> Self {
        Self {
            fail_on_page: Some(page),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(String, QueryParams)> {
        self.calls.lock().unwrap().clone()
    }
}

/// Produce a real transport error by hitting a port nothing listens on
async fn transport_error() -> Error {
    let err = reqwest::Client::new()
        .get("http://127.0.0.1:1/")
        .send()
        .await
        .unwrap_err();
    Error::request(err)
}

#[async_trait]
impl PageTransport for FakeTransport {
    async fn fetch_page(&self, url: &str, params: &QueryParams) -> Result<PageResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), params.clone()));

        let page: u32 = params.get("page").expect("page param missing").parse().unwrap();
        if self.fail_on_page == Some(page) {
            return Err(transport_error().await);
        }
        Ok(self.pages.get(&page).cloned().unwrap_or_default())
    }
}

fn docs_page(ids: &[&str]) -> PageResponse {
    PageResponse {
        docs: ids.iter().map(|id| json!({ "id": id })).collect(),
        ..PageResponse::default()
    }
}

// ============================================================================
// Fetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_1200_issues_three_requests_in_order() {
    let mut pages = HashMap::new();
    pages.insert(1, docs_page(&["a", "b"]));
    pages.insert(2, docs_page(&["c"]));
    pages.insert(3, docs_page(&["d", "e"]));

    let fetcher = Fetcher::with_transport(FakeTransport::with_pages(pages));
    let request = FetchRequest::new("key", 1200);

    let records = fetcher.fetch(&request).await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

    let calls = fetcher.transport().calls();
    assert_eq!(calls.len(), 3);

    let page_params: Vec<(String, String)> = calls
        .iter()
        .map(|(_, params)| {
            (
                params.get("page").unwrap().clone(),
                params.get("page_size").unwrap().clone(),
            )
        })
        .collect();
    assert_eq!(
        page_params,
        vec![
            ("1".to_string(), "500".to_string()),
            ("2".to_string(), "500".to_string()),
            ("3".to_string(), "200".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_fetch_zero_count_issues_no_requests() {
    let fetcher = Fetcher::with_transport(FakeTransport::default());
    let request = FetchRequest::new("key", 0);

    let records = fetcher.fetch(&request).await.unwrap();

    assert!(records.is_empty());
    assert!(fetcher.transport().calls().is_empty());
}

#[tokio::test]
async fn test_fetch_exact_page_has_no_remainder_request() {
    let mut pages = HashMap::new();
    pages.insert(1, docs_page(&["a"]));

    let fetcher = Fetcher::with_transport(FakeTransport::with_pages(pages));
    let request = FetchRequest::new("key", 500);

    fetcher.fetch(&request).await.unwrap();

    let calls = fetcher.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.get("page_size").unwrap(), "500");
}

#[tokio::test]
async fn test_fetch_small_count_is_single_remainder_request() {
    let mut pages = HashMap::new();
    pages.insert(1, docs_page(&["a", "b", "c"]));

    let fetcher = Fetcher::with_transport(FakeTransport::with_pages(pages));
    let request = FetchRequest::new("key", 3);

    let records = fetcher.fetch(&request).await.unwrap();

    assert_eq!(records.len(), 3);
    let calls = fetcher.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.get("page").unwrap(), "1");
    assert_eq!(calls[0].1.get("page_size").unwrap(), "3");
}

#[tokio::test]
async fn test_fetch_page_without_docs_contributes_nothing() {
    let mut pages = HashMap::new();
    pages.insert(1, docs_page(&["a"]));
    // page 2 has no canned response: served as a docs-less page

    let fetcher = Fetcher::with_transport(FakeTransport::with_pages(pages));
    let request = FetchRequest::new("key", 1000);

    let records = fetcher.fetch(&request).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(fetcher.transport().calls().len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_aborts_and_returns_no_partial() {
    let fetcher = Fetcher::with_transport(FakeTransport::failing_on(2));
    let request = FetchRequest::new("key", 1200);

    let result = fetcher.fetch(&request).await;

    assert!(matches!(result.unwrap_err(), Error::RequestFailed { .. }));
    // Aborted after the failing page: page 3 was never requested
    assert_eq!(fetcher.transport().calls().len(), 2);
}

#[tokio::test]
async fn test_fetch_passes_filters_verbatim() {
    let fetcher = Fetcher::with_transport(FakeTransport::default());
    let request = FetchRequest::new("secret-key", 10)
        .filter("q", "kitten*")
        .filter("sourceResource.collection.title", "Smith");

    fetcher.fetch(&request).await.unwrap();

    let calls = fetcher.transport().calls();
    let params = &calls[0].1;
    assert_eq!(params.get("api_key").unwrap(), "secret-key");
    assert_eq!(params.get("q").unwrap(), "kitten*");
    assert_eq!(
        params.get("sourceResource.collection.title").unwrap(),
        "Smith"
    );
}

#[tokio::test]
async fn test_fetch_reserved_keys_are_overridden() {
    let fetcher = Fetcher::with_transport(FakeTransport::default());
    let request = FetchRequest::new("real-key", 10)
        .filter("page_size", "9999")
        .filter("api_key", "spoofed");

    fetcher.fetch(&request).await.unwrap();

    let calls = fetcher.transport().calls();
    let params = &calls[0].1;
    assert_eq!(params.get("page_size").unwrap(), "10");
    assert_eq!(params.get("api_key").unwrap(), "real-key");
}

#[tokio::test]
async fn test_fetch_selects_endpoint_by_kind() {
    let fetcher = Fetcher::with_transport(FakeTransport::default());

    let items = FetchRequest::new("key", 1);
    fetcher.fetch(&items).await.unwrap();

    let collections = FetchRequest::new("key", 1).kind(ResourceKind::Collections);
    fetcher.fetch(&collections).await.unwrap();

    let calls = fetcher.transport().calls();
    assert!(calls[0].0.ends_with("/v2/items"));
    assert!(calls[1].0.ends_with("/v2/collections"));
}

#[tokio::test]
async fn test_fetch_respects_endpoint_override() {
    let fetcher = Fetcher::with_transport(FakeTransport::default())
        .endpoints(Endpoints::with_base("http://localhost:8080/").unwrap());

    let request = FetchRequest::new("key", 1);
    fetcher.fetch(&request).await.unwrap();

    let calls = fetcher.transport().calls();
    assert_eq!(calls[0].0, "http://localhost:8080/v2/items");
}
