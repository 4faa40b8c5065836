//! Feed error types.

use std::time::Duration;

/// Error type for loading a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed URL is not configured")]
    MissingUrl,

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Malformed feed body: {0}")]
    MalformedBody(String),

    #[error("Invalid JSON in feed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeedError {
    /// Whether the error happened before any body was received.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FeedError::Http { .. }
                | FeedError::Timeout(_)
                | FeedError::Connection(_)
                | FeedError::Request(_)
        )
    }
}
