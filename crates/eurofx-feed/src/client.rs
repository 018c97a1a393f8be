//! HTTP client for downloading feed documents.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout, including reading the body.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("eurofx/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a feed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout {
        /// The requested URL.
        url: String,
        /// The configured timeout.
        timeout: Duration,
    },

    /// Server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
}

/// Source of raw feed documents.
///
/// [`FeedClient`] is the production implementation; tests substitute canned
/// documents.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Downloads the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, or a non-success status.
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

#[async_trait]
impl<T: FeedFetcher + ?Sized> FeedFetcher for &T {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<T: FeedFetcher + ?Sized> FeedFetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        (**self).fetch(url).await
    }
}

/// HTTP client for the ECB feeds.
///
/// Issues a single GET per fetch; there are no retries.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: ClientConfig,
}

impl FeedClient {
    /// Creates a new feed client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.config.timeout,
            }
        } else {
            FetchError::Http(error)
        }
    }
}

#[async_trait]
impl FeedFetcher for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(url, e))?;
        debug!(url, bytes = body.len(), "feed downloaded");
        Ok(body)
    }
}
