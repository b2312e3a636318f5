//! # DPLA Client
//!
//! An async client for the Digital Public Library of America search API.
//!
//! ## Features
//!
//! - **Paginated Fetching**: Request N records; the fetcher plans the full
//!   and remainder pages, issues them sequentially, and returns one ordered
//!   sequence of `docs`
//! - **Filter Passthrough**: Arbitrary filter parameters, including dot-path
//!   nested-field keys like `sourceResource.collection.title`
//! - **Collection Registry**: Built-in table of partner collection
//!   identifiers for collection-scoped queries
//! - **MongoDB Bootstrap**: Obtain a verified connection handle for storing
//!   results, or `None` if no server is reachable
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dpla_client::{FetchRequest, Fetcher, ResourceKind};
//!
//! #[tokio::main]
//! async fn main() -> dpla_client::Result<()> {
//!     let fetcher = Fetcher::new();
//!
//!     // Fetch the first 1200 items mentioning kittens
//!     let request = FetchRequest::new("your-api-key", 1200).filter("q", "kitten*");
//!     let records = fetcher.fetch(&request).await?;
//!
//!     // Collection-scoped query via the built-in registry
//!     let request = FetchRequest::new("your-api-key", 500)
//!         .kind(ResourceKind::Collections)
//!         .filter("sourceResource.collection.title", "Smith");
//!     let collections = fetcher.fetch(&request).await?;
//!
//!     // Optional storage handle; absent when no local MongoDB is running
//!     if let Some(client) = dpla_client::db::connect().await {
//!         let _ = client.database("dpla").collection::<serde_json::Value>("items");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Search endpoint table
pub mod endpoints;

/// HTTP request sender
pub mod http;

/// Paginated fetcher
pub mod fetch;

/// Built-in collection identifier table
pub mod collections;

/// MongoDB connection bootstrap
pub mod db;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use endpoints::Endpoints;
pub use fetch::{FetchRequest, Fetcher, PageTransport, PAGE_SIZE};
pub use http::{HttpClient, HttpClientConfig, RequestConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
