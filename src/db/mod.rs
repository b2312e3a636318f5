//! MongoDB connection bootstrap
//!
//! Opens and verifies a client handle for callers that want to store
//! fetched records. Connection failures are logged and reported as an
//! absent handle, never raised.

mod connector;

pub use connector::{connect, connect_with_config, MongoConfig};

// Re-export the driver's client type for convenience
pub use mongodb::Client;
