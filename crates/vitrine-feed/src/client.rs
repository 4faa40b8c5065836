//! Feed sources: HTTP client and in-memory feeds.

use async_trait::async_trait;

use crate::error::FeedError;
use crate::timeout::TimeoutConfig;

/// Raw feed response, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFeed {
    /// URL the feed was read from.
    pub url: String,
    /// `content-type` header, if the source reported one.
    pub content_type: Option<String>,
    /// Response body text.
    pub body: String,
}

/// Anything that can produce feed text.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Issue one request and return the raw response.
    async fn fetch(&self) -> Result<RawFeed, FeedError>;
}

/// HTTP feed client.
///
/// Issues exactly one GET per `fetch`; there is no retry.
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: String,
    timeout: TimeoutConfig,
}

impl HttpFeedClient {
    /// Create a client for `url` with the default timeouts.
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_timeout(url, TimeoutConfig::default())
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeout(url: impl Into<String>, timeout: TimeoutConfig) -> Result<Self, FeedError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(FeedError::MissingUrl);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// Feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_error(&self, err: reqwest::Error) -> FeedError {
        if err.is_timeout() {
            FeedError::Timeout(self.timeout.total)
        } else if err.is_connect() {
            FeedError::Connection(err.to_string())
        } else {
            FeedError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch(&self) -> Result<RawFeed, FeedError> {
        tracing::debug!(url = %self.url, "fetching feed");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = resp.text().await.map_err(|e| self.map_error(e))?;
        tracing::debug!(bytes = body.len(), content_type = ?content_type, "feed received");

        Ok(RawFeed {
            url: self.url.clone(),
            content_type,
            body,
        })
    }
}

/// Feed held in memory, e.g. read from a local file.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    raw: RawFeed,
}

impl StaticFeed {
    pub fn new(url: impl Into<String>, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            raw: RawFeed {
                url: url.into(),
                content_type: content_type.map(str::to_string),
                body: body.into(),
            },
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch(&self) -> Result<RawFeed, FeedError> {
        Ok(self.raw.clone())
    }
}
