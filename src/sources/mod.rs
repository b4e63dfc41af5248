//! Character source implementations with conditional compilation support.
//!
//! Each upstream series is protected by its own feature flag so a build can
//! include only the sources it needs. Sources that are compiled out are simply
//! absent from [`Catalog::from_config`](crate::Catalog::from_config).
//!
//! # Feature Flags
//!
//! - `source-dragonball` - Enables the Dragon Ball API source
//! - `source-onepiece` - Enables the Jikan-backed One Piece source
//! - `source-naruto` - Enables the Jikan-backed Naruto source
//! - `all-sources` - Enables all sources (default)
//!
//! # Examples
//!
//! Build with only the Dragon Ball source:
//! ```bash
//! cargo build --no-default-features --features source-dragonball
//! ```
//!
//! Build with both Jikan series:
//! ```bash
//! cargo build --no-default-features --features "source-onepiece,source-naruto"
//! ```
//!
//! # Available Sources
//!
//! - [`jikan`] - Configurable Jikan source shared by the anime series (always available)
//! - [`DragonBallSource`] - dragonball-api.com (requires `source-dragonball`)
//! - [`one_piece::source`] - One Piece via Jikan (requires `source-onepiece`)
//! - [`naruto::source`] - Naruto via Jikan (requires `source-naruto`)

pub mod jikan;

#[cfg(feature = "source-dragonball")]
pub mod dragonball;

#[cfg(feature = "source-onepiece")]
pub mod one_piece;

#[cfg(feature = "source-naruto")]
pub mod naruto;

pub use jikan::{JikanConfig, JikanEntry, JikanMapper, JikanSource};

#[cfg(feature = "source-dragonball")]
pub use dragonball::DragonBallSource;
