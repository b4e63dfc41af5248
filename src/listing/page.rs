//! Fixed-size pagination.

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the `index`-th page of `size` items, clipped to the slice.
///
/// Pages past the end and pages of size zero are empty.
///
/// ```rust
/// use kyara::listing::page;
///
/// let items: Vec<u32> = (0..25).collect();
/// assert_eq!(page(&items, 2, 10), &[20, 21, 22, 23, 24]);
/// assert!(page(&items, 3, 10).is_empty());
/// assert!(page(&items, 0, 0).is_empty());
/// ```
pub fn page<T>(items: &[T], index: usize, size: usize) -> &[T] {
    let start = index.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Page cursor over a listing of known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(items_per_page: usize) -> Self {
        Self {
            current_page: 0,
            items_per_page,
            total_items: 0,
        }
    }

    /// Updates the total number of items and rewinds to the first page.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.current_page = 0;
    }

    /// Gets the `[start, end)` range of the current page.
    pub fn current_page_range(&self) -> (usize, usize) {
        let start = self.current_page.saturating_mul(self.items_per_page);
        let end = start
            .saturating_add(self.items_per_page)
            .min(self.total_items)
            .max(start);
        (start, end)
    }

    /// Moves to the next page if possible.
    pub fn next_page(&mut self) -> bool {
        if self.current_page + 1 < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page if possible.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Gets the total number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 || self.items_per_page == 0 {
            1
        } else {
            self.total_items.div_ceil(self.items_per_page)
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_navigation() {
        let mut state = PageState::new();
        state.set_total_items(25);

        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.current_page_range(), (0, 10));
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.current_page_range(), (20, 25));
        assert!(!state.next_page());
        assert!(state.previous_page());
        assert_eq!(state.current_page_range(), (10, 20));

        state.set_total_items(4);
        assert_eq!(state.current_page, 0);
        assert!(!state.previous_page());
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let state = PageState::new();

        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page_range(), (0, 0));
    }
}
