//! MongoDB connector
//!
//! Builds a client from connection settings and verifies it with a `ping`
//! before handing it out. Unlike the request sender, failure here is
//! recovered locally: the cause is logged and the caller gets `None`.

use crate::error::{Error, Result};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Default connection target: a local MongoDB instance on the standard port
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Connection settings for the MongoDB bootstrap
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string
    pub uri: String,
    /// How long server selection (and therefore the verification ping)
    /// may take before the connection attempt is reported as failed
    pub server_selection_timeout: Duration,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

impl MongoConfig {
    /// Settings for a non-default connection string
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

/// Connect to the default local MongoDB instance.
///
/// Returns `Some(client)` once the connection is verified, `None` on any
/// failure. The failure cause is logged, not raised; callers must check
/// for absence before use.
pub async fn connect() -> Option<Client> {
    connect_with_config(&MongoConfig::default()).await
}

/// Connect with explicit settings. Same contract as [`connect`].
pub async fn connect_with_config(config: &MongoConfig) -> Option<Client> {
    match try_connect(config).await {
        Ok(client) => {
            info!("connected to MongoDB at {}", config.uri);
            Some(client)
        }
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

/// Build the client and verify it with a `ping` against the admin database
async fn try_connect(config: &MongoConfig) -> Result<Client> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| Error::connection(e.to_string()))?;
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options).map_err(|e| Error::connection(e.to_string()))?;

    // The driver connects lazily; ping to verify the server is reachable
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| Error::connection(e.to_string()))?;

    Ok(client)
}
