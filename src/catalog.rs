//! The aggregating character catalog.
//!
//! [`Catalog`] owns a set of [`Source`]s plus the [`SeedData`] used when one of
//! them fails. Loading fans out one task per source, waits for all of them,
//! and concatenates the results in fixed series order: Dragon Ball, One Piece,
//! Naruto.
//!
//! Callers never see a source failure. A failing source is replaced by its
//! series' fallback seed, and if the join itself fails the whole load degrades
//! to an empty list. Both conditions are logged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kyara::prelude::*;
//!
//! # async fn example() {
//! let catalog = Catalog::from_config(&CatalogConfig::from_env());
//!
//! let everything = catalog.load_all().await;
//! println!("{} characters", everything.len());
//!
//! if let Some(luffy) = catalog.find_by_id("op-40").await {
//!     println!("{}: {}", luffy.name, luffy.description);
//! }
//! # }
//! ```

use futures::future;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    config::CatalogConfig,
    error::Result,
    listing::ListingBuilder,
    seed::SeedData,
    source::Source,
    types::{CharacterRecord, Series},
};

/// A collection of character sources with fallback-aware aggregation.
///
/// # Examples
///
/// ```rust
/// use kyara::prelude::*;
///
/// let mut catalog = Catalog::new().with_seed(SeedData::empty());
/// assert!(catalog.is_empty());
///
/// catalog.add(kyara::sources::DragonBallSource::new(&CatalogConfig::default()));
/// assert_eq!(catalog.list_ids(), vec!["dragonball"]);
/// ```
pub struct Catalog {
    sources: Vec<Arc<dyn Source>>,
    by_id: HashMap<String, usize>,
    seed: Arc<SeedData>,
}

impl Catalog {
    /// Creates a catalog with no sources and the built-in fallback seed.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            by_id: HashMap::new(),
            seed: Arc::new(SeedData::builtin()),
        }
    }

    /// Creates a catalog with every source compiled into this build.
    #[allow(unused_mut, unused_variables)]
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut catalog = Self::new();

        #[cfg(feature = "source-dragonball")]
        catalog.add(crate::sources::DragonBallSource::new(config));

        #[cfg(feature = "source-onepiece")]
        catalog.add(crate::sources::one_piece::source(config));

        #[cfg(feature = "source-naruto")]
        catalog.add(crate::sources::naruto::source(config));

        catalog
    }

    /// Replaces the fallback seed.
    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.seed = Arc::new(seed);
        self
    }

    /// Adds a source. A source with an id that is already registered
    /// shadows the earlier one for [`get`](Self::get).
    pub fn add(&mut self, source: impl Source + 'static) -> &mut Self {
        let id = source.id().to_string();
        let index = self.sources.len();
        self.sources.push(Arc::new(source));
        self.by_id.insert(id, index);
        self
    }

    /// Gets a source by id.
    pub fn get(&self, id: &str) -> Option<&dyn Source> {
        self.by_id
            .get(id)
            .and_then(|&index| self.sources.get(index))
            .map(|s| s.as_ref())
    }

    /// Lists source ids in registration order.
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetches every source concurrently and reports each raw outcome,
    /// without falling back. Useful for diagnosing which upstream is down.
    pub async fn load_grouped(&self) -> Vec<(String, Result<Vec<CharacterRecord>>)> {
        let futures = self.sources.iter().map(|source| async move {
            (source.id().to_string(), source.fetch_characters().await)
        });

        future::join_all(futures).await
    }

    /// Loads every character from every source.
    ///
    /// Each source runs in its own task. A source that fails contributes its
    /// series' fallback seed instead; a join failure yields an empty list.
    /// The result is ordered Dragon Ball, One Piece, Naruto, with each
    /// source's records in upstream order.
    pub async fn load_all(&self) -> Vec<CharacterRecord> {
        let handles = self.sources.iter().map(|source| {
            let source = Arc::clone(source);
            let seed = Arc::clone(&self.seed);
            tokio::spawn(async move { load_with_fallback(source.as_ref(), &seed).await })
        });

        let joined: Result<Vec<(Series, Vec<CharacterRecord>)>> =
            future::try_join_all(handles).await.map_err(Into::into);

        match joined {
            Ok(mut groups) => {
                groups.sort_by_key(|(series, _)| *series);
                let records: Vec<CharacterRecord> =
                    groups.into_iter().flat_map(|(_, records)| records).collect();
                info!(count = records.len(), sources = self.sources.len(), "catalog loaded");
                records
            }
            Err(e) => {
                error!(error = %e, "catalog aggregation failed");
                Vec::new()
            }
        }
    }

    /// Finds a character by id.
    ///
    /// This reloads the whole catalog and scans it; nothing is cached.
    pub async fn find_by_id(&self, id: &str) -> Option<CharacterRecord> {
        let found = self.load_all().await.into_iter().find(|c| c.id == id);
        if found.is_none() {
            debug!(%id, "character not found");
        }
        found
    }

    /// Starts a fluent listing query over this catalog.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use kyara::prelude::*;
    ///
    /// # async fn example() {
    /// let catalog = Catalog::from_config(&CatalogConfig::default());
    ///
    /// let first_page = catalog
    ///     .listing()
    ///     .series(Series::DragonBall)
    ///     .sort(SortSpec::descending(SortField::Ki))
    ///     .page(0, 10)
    ///     .await;
    /// # }
    /// ```
    pub fn listing(&self) -> ListingBuilder<'_> {
        ListingBuilder::new(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_with_fallback(source: &dyn Source, seed: &SeedData) -> (Series, Vec<CharacterRecord>) {
    let series = source.series();
    match source.fetch_characters().await {
        Ok(records) => {
            debug!(source = source.id(), count = records.len(), "source loaded");
            (series, records)
        }
        Err(e) => {
            let fallback = seed.for_series(series);
            warn!(
                source = source.id(),
                error = %e,
                fallback = fallback.len(),
                "source failed, using fallback seed"
            );
            (series, fallback)
        }
    }
}
