//! Stateful listing backing a character table.

use super::{
    CharacterListExt,
    filter::apply_filter,
    interleave::interleave,
    page::{PageState, page},
    sort::sort_records,
};
use crate::{
    catalog::Catalog,
    route::Route,
    types::{CharacterRecord, FilterCriteria, Series, SortSpec},
};

/// A loaded listing with its filters, sort and page cursor.
///
/// The loaded records are kept separately from the visible data so filters
/// can be changed without refetching. Changing the filters recomputes the
/// visible data from the loaded records, which drops any sort that was
/// applied, and rewinds to the first page.
///
/// # Examples
///
/// ```rust,no_run
/// use kyara::prelude::*;
///
/// # async fn example() {
/// let catalog = Catalog::from_config(&CatalogConfig::default());
/// let mut list = CharacterList::new();
///
/// list.load(&catalog, Some(Series::OnePiece)).await;
/// list.set_filters(FilterCriteriaBuilder::default().name("luffy").build().unwrap());
/// list.sort(SortSpec::ascending(SortField::Name));
///
/// for record in list.paged() {
///     println!("{}", record.name);
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharacterList {
    series: Option<Series>,
    loaded: Vec<CharacterRecord>,
    data: Vec<CharacterRecord>,
    filters: FilterCriteria,
    sort: Option<SortSpec>,
    pub pages: PageState,
}

impl CharacterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the catalog, restricted to `series` or mixed when `None`.
    pub async fn load(&mut self, catalog: &Catalog, series: Option<Series>) {
        let records = catalog.load_all().await;
        self.set_records(records, series);
    }

    /// Replaces the loaded records without touching the network.
    pub fn set_records(&mut self, records: Vec<CharacterRecord>, series: Option<Series>) {
        self.series = series;
        self.loaded = interleave(records, series);
        self.recompute();
    }

    /// Replaces the filters, rewinds to the first page and drops the sort.
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.filters = criteria;
        self.recompute();
    }

    /// Sorts the visible data. The page cursor is kept.
    pub fn sort(&mut self, spec: SortSpec) {
        self.data = sort_records(std::mem::take(&mut self.data), &spec);
        self.sort = (!spec.is_identity()).then_some(spec);
    }

    fn recompute(&mut self) {
        self.data = apply_filter(self.loaded.clone(), &self.filters);
        self.sort = None;
        self.pages.set_total_items(self.data.len());
    }

    /// Records on the current page.
    pub fn paged(&self) -> &[CharacterRecord] {
        page(&self.data, self.pages.current_page, self.pages.items_per_page)
    }

    /// Every record matching the current filters.
    pub fn data(&self) -> &[CharacterRecord] {
        &self.data
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// The sort applied since the filters last changed, if any.
    pub fn active_sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn series(&self) -> Option<Series> {
        self.series
    }

    /// Distinct non-blank affiliations of the loaded records, sorted.
    pub fn affiliations(&self) -> Vec<String> {
        self.loaded.affiliations()
    }

    /// Where a detail view opened from this listing should return to.
    pub fn return_route(&self) -> Route {
        self.series.map(Route::Series).unwrap_or(Route::Home)
    }
}
