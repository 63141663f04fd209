//! Error types for cloner-fetch.

use thiserror::Error;

/// All errors that can arise while fetching a workspace descriptor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured API base URL does not parse or cannot carry a path.
    #[error("invalid workspace API URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection, DNS, TLS or socket failure before a response arrived.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The API answered with a non-success status.
    #[error("workspace API returned HTTP {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The response body could not be read.
    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The response body is not a workspace descriptor.
    #[error("failed to decode workspace from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The blocking request task panicked or was cancelled.
    #[error("workspace request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
