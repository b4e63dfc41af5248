//! The trait every upstream character source implements.
//!
//! A [`Source`] fetches one series' characters from one upstream API and
//! normalizes them into [`CharacterRecord`]s. Sources report failures as
//! errors; recovering from them (with fallback seed data) is the job of the
//! [`Catalog`](crate::Catalog) that aggregates them.
//!
//! # Examples
//!
//! ```rust
//! use kyara::prelude::*;
//! use kyara::error::Result;
//! use async_trait::async_trait;
//!
//! struct StaticSource;
//!
//! #[async_trait]
//! impl Source for StaticSource {
//!     fn id(&self) -> &'static str { "static-db" }
//!     fn name(&self) -> &'static str { "Static Dragon Ball" }
//!     fn series(&self) -> Series { Series::DragonBall }
//!     fn base_url(&self) -> &str { "memory://" }
//!
//!     async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>> {
//!         Ok(vec![CharacterRecord::new(
//!             1,
//!             "Goku",
//!             "Saiyan raised on Earth.",
//!             SeriesDetails::DragonBall { ki: None, max_ki: None },
//!         )])
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{CharacterRecord, Series},
};

/// Trait that all character sources must implement.
///
/// # Implementation Guidelines
///
/// - Use the [`net::HttpClient`](crate::net::HttpClient) for HTTP requests
/// - Every returned record must belong to [`series()`](Source::series), which
///   also means its id carries that series' prefix
/// - Tolerate malformed items: substitute defaults instead of dropping or
///   failing, and only return an error when the payload as a whole is unusable
#[async_trait]
pub trait Source: Send + Sync {
    /// Unique, lowercase identifier, e.g. `"dragonball"` or `"jikan-op"`.
    fn id(&self) -> &'static str;

    /// Human-readable name of the upstream.
    fn name(&self) -> &'static str;

    /// The series every record from this source belongs to.
    fn series(&self) -> Series;

    /// Base URL of the upstream API, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Fetches and normalizes the full character list.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - For network/connection issues
    /// * [`Error::Source`](crate::Error::Source) - For non-success HTTP statuses
    /// * [`Error::Json`](crate::Error::Json) / [`Error::Parse`](crate::Error::Parse) -
    ///   When the response envelope is unusable
    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>>;
}
