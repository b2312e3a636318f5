//! Search endpoint table
//!
//! The two fixed endpoint URLs, held in a value that is passed explicitly
//! into the fetcher instead of living as module-level mutable state. Tests
//! rebase the table onto a mock server with [`Endpoints::with_base`].

use crate::error::Result;
use crate::types::ResourceKind;
use url::Url;

/// Items search endpoint of the public DPLA v2 API
pub const ITEMS_URL: &str = "https://api.dp.la/v2/items";

/// Collections search endpoint of the public DPLA v2 API
pub const COLLECTIONS_URL: &str = "https://api.dp.la/v2/collections";

/// The pair of search endpoints a fetch run targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full URL of the items search endpoint
    pub items: String,
    /// Full URL of the collections search endpoint
    pub collections: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            items: ITEMS_URL.to_string(),
            collections: COLLECTIONS_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoint table for the public DPLA API
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebase both endpoints onto a different base URL, e.g. a mock server
    /// or a proxy. The base must parse as an absolute URL.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        let items = base.join("v2/items")?;
        let collections = base.join("v2/collections")?;
        Ok(Self {
            items: items.to_string(),
            collections: collections.to_string(),
        })
    }

    /// Endpoint for a resource kind: the items URL unless the kind is
    /// exactly `Collections`.
    pub fn url_for(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Collections => &self.collections,
            ResourceKind::Items => &self.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_api() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.items, "https://api.dp.la/v2/items");
        assert_eq!(endpoints.collections, "https://api.dp.la/v2/collections");
    }

    #[test]
    fn test_url_for_kind() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.url_for(ResourceKind::Items), ITEMS_URL);
        assert_eq!(endpoints.url_for(ResourceKind::Collections), COLLECTIONS_URL);
    }

    #[test]
    fn test_with_base() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:9999/").unwrap();
        assert_eq!(endpoints.items, "http://127.0.0.1:9999/v2/items");
        assert_eq!(endpoints.collections, "http://127.0.0.1:9999/v2/collections");
    }

    #[test]
    fn test_with_base_rejects_garbage() {
        let result = Endpoints::with_base("not a url");
        assert!(result.is_err());
    }
}
