//! HTTP request sender
//!
//! A thin GET-only client over reqwest. One request in, one parsed JSON
//! body out; any transport-level problem surfaces as a single
//! `RequestFailed` error. No retries, no backoff, no rate limiting.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
