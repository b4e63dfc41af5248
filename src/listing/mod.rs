//! Listing pipeline: interleave, filter, sort, paginate.
//!
//! Everything here is pure data shaping over `Vec<CharacterRecord>`; the only
//! I/O happens when a [`ListingBuilder`] asks its [`Catalog`] to load.
//!
//! # Examples
//!
//! The pipeline as a fluent query:
//!
//! ```rust,no_run
//! use kyara::prelude::*;
//!
//! # async fn example() {
//! let catalog = Catalog::from_config(&CatalogConfig::default());
//!
//! let saiyans = catalog
//!     .listing()
//!     .series(Series::DragonBall)
//!     .filter(FilterCriteriaBuilder::default().race("Saiyan").build().unwrap())
//!     .sort(SortSpec::descending(SortField::MaxKi))
//!     .all()
//!     .await;
//! # }
//! ```
//!
//! Or step by step on records you already have:
//!
//! ```rust
//! use kyara::prelude::*;
//!
//! let records = SeedData::builtin().for_series(Series::OnePiece);
//! let first_page = records
//!     .interleave(None)
//!     .apply_filter(&FilterCriteriaBuilder::default().affiliation("straw hat").build().unwrap())
//!     .sort_with(&SortSpec::ascending(SortField::Name))
//!     .paginate(0, 10);
//!
//! assert!(first_page.len() <= 10);
//! ```

pub mod filter;
pub mod interleave;
pub mod page;
pub mod sort;
pub mod view;

pub use filter::matches;
pub use page::{DEFAULT_PAGE_SIZE, PageState, page};
pub use sort::parse_power_level;
pub use view::CharacterList;

use crate::{
    catalog::Catalog,
    types::{CharacterRecord, FilterCriteria, Series, SortSpec},
};
use std::collections::BTreeSet;

/// A fluent listing query over a [`Catalog`].
///
/// Created by [`Catalog::listing`]. Nothing is fetched until
/// [`all`](ListingBuilder::all) or [`page`](ListingBuilder::page) is awaited.
pub struct ListingBuilder<'a> {
    catalog: &'a Catalog,
    series: Option<Series>,
    filter: FilterCriteria,
    sort: Option<SortSpec>,
}

impl<'a> ListingBuilder<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            series: None,
            filter: FilterCriteria::default(),
            sort: None,
        }
    }

    /// Restricts the listing to one series. Without it, series are mixed.
    pub fn series(mut self, series: Series) -> Self {
        self.series = Some(series);
        self
    }

    pub fn filter(mut self, criteria: FilterCriteria) -> Self {
        self.filter = criteria;
        self
    }

    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    /// Loads the catalog and returns every matching record.
    pub async fn all(self) -> Vec<CharacterRecord> {
        let records = self
            .catalog
            .load_all()
            .await
            .interleave(self.series)
            .apply_filter(&self.filter);

        match self.sort {
            Some(spec) => records.sort_with(&spec),
            None => records,
        }
    }

    /// Loads the catalog and returns one page of matching records.
    pub async fn page(self, index: usize, size: usize) -> Vec<CharacterRecord> {
        self.all().await.paginate(index, size)
    }
}

/// Pipeline stages as chainable methods on `Vec<CharacterRecord>`.
pub trait CharacterListExt {
    /// Restricts to `series`, or mixes series in blocks of three when `None`.
    fn interleave(self, series: Option<Series>) -> Self;

    /// Keeps records matching every active criterion.
    fn apply_filter(self, criteria: &FilterCriteria) -> Self;

    /// Stable sort by a single field.
    fn sort_with(self, spec: &SortSpec) -> Self;

    /// Keeps only the `index`-th page of `size` records.
    fn paginate(self, index: usize, size: usize) -> Self;

    /// Distinct non-blank affiliations, sorted.
    fn affiliations(&self) -> Vec<String>;
}

impl CharacterListExt for Vec<CharacterRecord> {
    fn interleave(self, series: Option<Series>) -> Self {
        interleave::interleave(self, series)
    }

    fn apply_filter(self, criteria: &FilterCriteria) -> Self {
        filter::apply_filter(self, criteria)
    }

    fn sort_with(self, spec: &SortSpec) -> Self {
        sort::sort_records(self, spec)
    }

    fn paginate(self, index: usize, size: usize) -> Self {
        let start = index.saturating_mul(size).min(self.len());
        self.into_iter().skip(start).take(size).collect()
    }

    fn affiliations(&self) -> Vec<String> {
        self.iter()
            .filter_map(|r| r.affiliation.as_deref())
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
