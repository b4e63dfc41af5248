//! Network utilities for HTTP requests and JSON payload handling.
//!
//! This module provides the networking layer used by the built-in sources:
//!
//! - **HTTP Client**: A global, pooled reqwest client shared by every source
//! - **Per-source wrapper**: [`HttpClient`] tags requests with a source id and
//!   custom headers and maps HTTP failures to [`Error::Source`](crate::Error::Source)
//! - **JSON helpers**: Path-based extraction in [`json`]
//!
//! Requests are sent exactly once. There are no retries, no rate limiting and
//! no request timeout; a failed request is reported to the caller, which
//! decides whether to fall back.
//!
//! # Examples
//!
//! ```rust
//! use kyara::net::HttpClient;
//!
//! # async fn example() -> kyara::Result<()> {
//! let client = HttpClient::new("jikan-op").with_header("Accept", "application/json");
//!
//! let json: serde_json::Value = client
//!     .get_json("https://api.jikan.moe/v4/anime/21/characters")
//!     .await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, header::HeaderMap};
use tracing::debug;

pub mod json;

/// Global HTTP client instance.
///
/// Configured with connection pooling and gzip/brotli decompression. No
/// timeout is set: a hung upstream stalls its own fetch only.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// HTTP client wrapper bound to one source.
///
/// # Examples
///
/// ```rust
/// use kyara::net::HttpClient;
///
/// let client = HttpClient::new("dragonball")
///     .with_header("User-Agent", "Kyara/0.1.0")
///     .with_header("Accept", "application/json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    source_id: String,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified source.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Adds a custom header to all requests made by this client.
    ///
    /// Invalid header names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Performs a single GET request.
    ///
    /// # Errors
    ///
    /// * [`Error::Source`](crate::Error::Source) - For non-success HTTP statuses
    /// * [`Error::Network`](crate::Error::Network) - For network/connection errors
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        debug!(source = %self.source_id, %url, "GET");

        let response = CLIENT.get(url).headers(self.headers.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(crate::Error::source(
                &self.source_id,
                format!("HTTP {}", status),
            ));
        }

        Ok(response.bytes().await?)
    }

    /// Performs a GET request and deserializes the response as JSON.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Json`](crate::Error::Json) - If JSON parsing fails
    pub async fn get_json<T>(&self, url: &str) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(url).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}
