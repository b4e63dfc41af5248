//! Error types and result handling for Kyara operations.
//!
//! All fallible operations return a [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`.
//!
//! Note that most of the catalog pipeline is deliberately infallible from the
//! caller's point of view: a failing upstream source is replaced by its
//! fallback seed, and a failed aggregation degrades to an empty listing. The
//! errors below are what the individual [`Source`](crate::Source)
//! implementations, the HTTP layer, and the route parser report.
//!
//! # Error Categories
//!
//! - **Network Errors**: Connection issues and HTTP transport errors
//! - **Parse Errors**: Unexpected payload shapes or malformed routes
//! - **Source Errors**: Upstream-specific errors with context
//! - **Not Found**: Unknown routes or missing resources
//! - **IO / JSON Errors**: Reading seed files, decoding payloads
//! - **Join Errors**: Aggregation tasks that panicked or were cancelled
//!
//! # Examples
//!
//! ```rust
//! use kyara::{Error, Route};
//!
//! match Route::parse("/bleach") {
//!     Ok(route) => println!("Navigating to {}", route.path()),
//!     Err(Error::NotFound(msg)) => println!("No such page: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Type alias for Results with Kyara errors.
///
/// # Examples
///
/// ```rust
/// use kyara::{Result, Error};
///
/// fn example_operation() -> Result<String> {
///     Ok("Success".to_string())
/// }
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::parse("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all Kyara operations.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Parse`](Error::Parse) - Data parsing and format errors
/// * [`Source`](Error::Source) - Source-specific errors with context
/// * [`NotFound`](Error::NotFound) - Missing resources
/// * [`Io`](Error::Io) - File system and IO errors
/// * [`Json`](Error::Json) - JSON serialization errors
/// * [`Join`](Error::Join) - Aggregation task failures
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from reqwest: DNS failures, refused connections, TLS
    /// problems, and body read failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload and format errors.
    ///
    /// Used when a response does not have the expected envelope, or when a
    /// route or seed file cannot be understood.
    ///
    /// ```rust
    /// use kyara::Error;
    ///
    /// let error = Error::parse("Missing `items` array in response");
    /// ```
    #[error("Parse error: {0}")]
    Parse(String),

    /// Source-specific errors with contextual information.
    ///
    /// * `src` - The identifier of the source that encountered the error
    /// * `message` - Descriptive error message
    ///
    /// ```rust
    /// use kyara::Error;
    ///
    /// let error = Error::source("jikan-op", "HTTP 503 Service Unavailable");
    /// ```
    #[error("Source error [{src}]: {message}")]
    Source { src: String, message: String },

    /// Resource not found errors.
    ///
    /// ```rust
    /// use kyara::Error;
    ///
    /// let error = Error::not_found("Route: /bleach");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// File system and IO operation errors, e.g. when reading a seed file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Join errors from the per-source aggregation tasks.
    #[error("Join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// Creates a parse error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kyara::Error;
    ///
    /// let error = Error::parse("Invalid route");
    /// let error = Error::parse(format!("Unknown series: {}", "bleach"));
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a source-specific error with source ID and message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kyara::Error;
    ///
    /// let error = Error::source("dragonball", "HTTP 500 Internal Server Error");
    /// ```
    pub fn source(src: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Source {
            src: src.into(),
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
