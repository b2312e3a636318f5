//! Error types for the DPLA client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Transport problems are folded into a single `RequestFailed` variant:
//! callers are not expected to branch on the cause, only to know the
//! request did not produce a usable page.

use thiserror::Error;

/// The main error type for the DPLA client
#[derive(Error, Debug)]
pub enum Error {
    /// A single GET against the search API failed. Covers connection
    /// errors, timeouts, non-success statuses, and undecodable bodies;
    /// the cause stays on the error chain but there is no per-cause
    /// variant to match on.
    #[error("HTTP request failed")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },

    /// Opening or verifying the MongoDB connection failed. Constructed
    /// and consumed inside the `db` module, which logs it and returns an
    /// absent handle instead of propagating.
    #[error("could not connect to MongoDB: {message}")]
    ConnectionFailed { message: String },

    /// A caller-supplied endpoint base URL did not parse
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Wrap a transport error from the HTTP layer
    pub fn request(source: reqwest::Error) -> Self {
        Self::RequestFailed { source }
    }

    /// Create a connection failure with a message
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for the DPLA client
pub type Result<T> = std::result::Result<T, Error>;
