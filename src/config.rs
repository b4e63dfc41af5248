//! Upstream endpoint configuration.
//!
//! [`CatalogConfig`] holds everything the built-in sources need to know about
//! their upstream APIs. The defaults point at the public Dragon Ball API and
//! the Jikan v4 API; the two base URLs can be overridden from the environment
//! with [`CatalogConfig::from_env`].
//!
//! # Examples
//!
//! ```rust
//! use kyara::config::{CatalogConfig, CatalogConfigBuilder};
//!
//! let config = CatalogConfigBuilder::default()
//!     .jikan_base_url("http://localhost:8080/v4")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.one_piece_anime_id, 21);
//! assert_eq!(config.jikan_base_url, "http://localhost:8080/v4");
//! ```

use derive_builder::Builder;

/// Environment variable overriding [`CatalogConfig::dragon_ball_base_url`].
pub const DRAGON_BALL_URL_ENV: &str = "KYARA_DRAGONBALL_URL";

/// Environment variable overriding [`CatalogConfig::jikan_base_url`].
pub const JIKAN_URL_ENV: &str = "KYARA_JIKAN_URL";

pub const DEFAULT_DRAGON_BALL_URL: &str = "https://dragonball-api.com/api";
pub const DEFAULT_JIKAN_URL: &str = "https://api.jikan.moe/v4";

/// Configuration shared by the built-in sources.
///
/// # Fields
///
/// * `dragon_ball_base_url` - Base of the Dragon Ball API, no trailing slash needed
/// * `dragon_ball_limit` - `limit` query parameter for the single character request
/// * `jikan_base_url` - Base of the Jikan API
/// * `one_piece_anime_id` - Jikan anime id for One Piece
/// * `naruto_anime_id` - Jikan anime id for Naruto
/// * `user_agent` - User-Agent header sent with every request
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), default)]
pub struct CatalogConfig {
    pub dragon_ball_base_url: String,
    pub dragon_ball_limit: u32,
    pub jikan_base_url: String,
    pub one_piece_anime_id: u32,
    pub naruto_anime_id: u32,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dragon_ball_base_url: DEFAULT_DRAGON_BALL_URL.to_string(),
            dragon_ball_limit: 100,
            jikan_base_url: DEFAULT_JIKAN_URL.to_string(),
            one_piece_anime_id: 21,
            naruto_anime_id: 20,
            user_agent: format!("Kyara/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Default configuration with base URLs taken from the environment when
    /// set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but reads variables through `lookup`.
    ///
    /// ```rust
    /// use kyara::config::{CatalogConfig, JIKAN_URL_ENV};
    ///
    /// let config = CatalogConfig::from_lookup(|key| {
    ///     (key == JIKAN_URL_ENV).then(|| "http://127.0.0.1:9000/v4/".to_string())
    /// });
    ///
    /// assert_eq!(config.jikan_base_url, "http://127.0.0.1:9000/v4");
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let pick = |key: &str| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = pick(DRAGON_BALL_URL_ENV) {
            config.dragon_ball_base_url = url;
        }
        if let Some(url) = pick(JIKAN_URL_ENV) {
            config.jikan_base_url = url;
        }
        config
    }
}
