//! # Kyara - Unified anime character catalog
//!
//! Kyara aggregates character data from several public anime APIs into one
//! [`CharacterRecord`] shape and provides the listing pipeline on top of it:
//! mixing series, filtering, sorting, and pagination.
//!
//! ## Features
//!
//! - **Unified Records**: Dragon Ball, One Piece and Naruto characters share one type
//! - **Concurrent Aggregation**: Every source is fetched in its own task and joined
//! - **Graceful Degradation**: Failing sources fall back to bundled seed data
//! - **Fluent Listing API**: Chain series, filters and sorting, then page
//! - **Typed Routes**: Parse and render listing and detail paths
//! - **Feature-gated Sources**: Compile in only the upstreams you need
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kyara::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Catalog::from_config(&CatalogConfig::from_env());
//!
//!     // The mixed home listing, first page
//!     let home = catalog.listing().page(0, 10).await;
//!     for character in &home {
//!         println!("{} ({})", character.name, character.series());
//!     }
//!
//!     // One series, filtered and sorted
//!     let strongest = catalog
//!         .listing()
//!         .series(Series::DragonBall)
//!         .filter(FilterCriteriaBuilder::default().race("Saiyan").build().unwrap())
//!         .sort(SortSpec::descending(SortField::Ki))
//!         .page(0, 5)
//!         .await;
//!
//!     println!("{} Saiyans on the first page", strongest.len());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`source`]: The [`Source`] trait every upstream implements
//! - [`sources`]: Dragon Ball API and Jikan implementations
//! - [`catalog`]: Concurrent aggregation with fallback, and lookup by id
//! - [`listing`]: Interleaving, filtering, sorting and pagination
//! - [`route`]: Navigation targets
//! - [`types`]: Records, series, filters and sort specifications
//! - [`seed`]: Fallback data for unreachable sources
//! - [`config`]: Base URLs and request settings
//! - [`net`]: HTTP client and JSON helpers
//! - [`error`]: Error handling
//!
//! ## Offline Use
//!
//! The listing pipeline works on any `Vec<CharacterRecord>`, including the
//! bundled seed:
//!
//! ```rust
//! use kyara::prelude::*;
//!
//! let records = SeedData::builtin().for_series(Series::Naruto);
//! let konoha = records
//!     .apply_filter(&FilterCriteriaBuilder::default().affiliation("konoha").build().unwrap())
//!     .sort_with(&SortSpec::ascending(SortField::Name));
//!
//! assert!(!konoha.is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod net;
pub mod route;
pub mod seed;
pub mod source;
pub mod sources;
pub mod types;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude module for convenient imports.
///
/// ```rust
/// use kyara::prelude::*;
///
/// // Now you have access to:
/// // - Catalog, CatalogConfig, SeedData, Source
/// // - CharacterRecord, SeriesDetails, Series
/// // - FilterCriteria, SortSpec, SortField, SortDirection
/// // - ListingBuilder, CharacterListExt, CharacterList, PageState
/// // - Route
/// ```
pub mod prelude {
    pub use crate::{
        catalog::Catalog,
        config::{CatalogConfig, CatalogConfigBuilder},
        listing::{CharacterList, CharacterListExt, ListingBuilder, PageState},
        route::Route,
        seed::SeedData,
        source::Source,
        types::{
            CharacterRecord, FilterCriteria, FilterCriteriaBuilder, Series, SeriesDetails,
            SortDirection, SortField, SortSpec,
        },
    };
}

// Re-export main types at crate root for direct access
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use listing::{CharacterList, CharacterListExt, ListingBuilder, PageState};
pub use route::Route;
pub use seed::SeedData;
pub use source::Source;
pub use types::{
    CharacterRecord, FilterCriteria, Series, SeriesDetails, SortDirection, SortField, SortSpec,
};
