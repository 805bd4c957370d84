//! Stateful pagination controller.
//!
//! [`Controller`] owns the current page of one record screen. It knows the
//! total number of (filtered) items and the page size, computes the slice
//! bounds for the current page and the page window to render, and clamps
//! every navigation request into range.
//!
//! Pages are 1-indexed throughout, matching what the user sees.

use tracing::debug;

use crate::config::{PaginatorConfig, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::window::{self, WindowEntry, DEFAULT_MAX_VISIBLE, MIN_MAX_VISIBLE};

/// Pagination state for a single list of items.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::controller::Controller;
///
/// let mut controller = Controller::new(5).unwrap();
/// controller.on_filter_changed(50);
///
/// assert_eq!(controller.total_pages(), 10);
/// controller.go_to(4);
/// assert_eq!((controller.start_index(), controller.end_index()), (15, 20));
///
/// controller.next();
/// assert_eq!(controller.current_page(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    max_visible: usize,
}

impl Default for Controller {
    /// Page size [`DEFAULT_PAGE_SIZE`], default window, no items.
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl Controller {
    /// Creates a controller on page 1 with no items and the default window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    /// Creates a controller from a [`PaginatorConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] or [`Error::InvalidWindowSize`]
    /// when the config holds an unusable value.
    pub fn from_config(config: &PaginatorConfig) -> Result<Self> {
        Self::new(config.page_size)?.with_max_visible(config.max_visible)
    }

    /// Sets the window width (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] when `max_visible` is below 3.
    pub fn with_max_visible(mut self, max_visible: usize) -> Result<Self> {
        if max_visible < MIN_MAX_VISIBLE {
            return Err(Error::InvalidWindowSize { max_visible });
        }
        self.max_visible = max_visible;
        Ok(self)
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.on_filter_changed(total_items);
        self
    }

    /// The current page, 1-indexed.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Number of items being paginated.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Contiguous page numbers shown in the window.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.page_size)
    }

    /// Index one past the last slot of the current page.
    ///
    /// This is not clamped to the item count; use [`Controller::slice_bounds`]
    /// to index into a slice.
    pub fn end_index(&self) -> usize {
        self.start_index().saturating_add(self.page_size)
    }

    /// Start and end indices of the current page, clamped to `length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paginate::controller::Controller;
    ///
    /// let mut controller = Controller::new(5).unwrap().with_total_items(12);
    /// controller.last();
    /// assert_eq!(controller.slice_bounds(12), (10, 12));
    /// ```
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = self.start_index().min(length);
        let end = self.end_index().min(length);
        (start, end)
    }

    /// Returns the items of the current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.slice_bounds(items.len());
        &items[start..end]
    }

    /// Number of items shown on the current page.
    pub fn items_on_page(&self) -> usize {
        let (start, end) = self.slice_bounds(self.total_items);
        end - start
    }

    /// True when the current page is the first one.
    pub fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// True when the current page is the last one (or there are no pages).
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// False when there is nothing to paginate, in which case the paginator
    /// is not rendered at all.
    pub fn is_visible(&self) -> bool {
        self.total_items > 0
    }

    /// The page window for the current state.
    pub fn window(&self) -> Vec<WindowEntry> {
        // page_size and max_visible are validated on construction
        window::compute_window(
            self.total_items,
            self.page_size,
            self.current_page,
            self.max_visible,
        )
        .unwrap_or_default()
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Jumps to `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn go_to(&mut self, page: usize) {
        let target = page.clamp(1, self.last_page());
        if target != self.current_page {
            debug!(from = self.current_page, to = target, "page changed");
            self.current_page = target;
        }
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next(&mut self) {
        if !self.on_last_page() {
            self.go_to(self.current_page + 1);
        }
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn previous(&mut self) {
        if !self.on_first_page() {
            self.go_to(self.current_page - 1);
        }
    }

    /// Jumps to page 1.
    pub fn first(&mut self) {
        self.go_to(1);
    }

    /// Jumps to the last page.
    pub fn last(&mut self) {
        self.go_to(self.last_page());
    }

    /// Updates the item count after the underlying list changed.
    ///
    /// If the current page no longer exists it is reset to page 1, so a
    /// narrowed search never strands the user on an empty page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paginate::controller::Controller;
    ///
    /// let mut controller = Controller::new(5).unwrap().with_total_items(50);
    /// controller.go_to(8);
    ///
    /// controller.on_filter_changed(12); // 3 pages left
    /// assert_eq!(controller.current_page(), 1);
    /// assert_eq!(controller.start_index(), 0);
    /// ```
    pub fn on_filter_changed(&mut self, new_total_items: usize) {
        self.total_items = new_total_items;
        if self.current_page > self.total_pages() && self.current_page != 1 {
            debug!(
                stale_page = self.current_page,
                total_pages = self.total_pages(),
                "current page out of range, resetting to first page"
            );
            self.current_page = 1;
        }
    }

    /// Changes the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] when `page_size` is zero; the
    /// controller is left unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowEntry::{Ellipsis, Page};

    fn controller(total: usize) -> Controller {
        Controller::new(5).unwrap().with_total_items(total)
    }

    #[test]
    fn test_new_starts_on_first_page() {
        let c = Controller::new(5).unwrap();
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.total_pages(), 0);
        assert_eq!(c.start_index(), 0);
        assert_eq!(c.end_index(), 5);
        assert!(!c.is_visible());
        assert!(c.window().is_empty());
    }

    #[test]
    fn test_default_uses_page_size_five() {
        let c = Controller::default();
        assert_eq!(c.page_size(), 5);
        assert_eq!(c, Controller::new(5).unwrap());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(Controller::new(0), Err(Error::InvalidPageSize));
        let mut c = controller(10);
        assert_eq!(c.set_page_size(0), Err(Error::InvalidPageSize));
        assert_eq!(c.page_size(), 5);
    }

    #[test]
    fn test_from_config_validates_window() {
        let config = PaginatorConfig::default().with_max_visible(1);
        assert_eq!(
            Controller::from_config(&config),
            Err(Error::InvalidWindowSize { max_visible: 1 })
        );
        let c = Controller::from_config(&PaginatorConfig::default().with_page_size(10)).unwrap();
        assert_eq!(c.page_size(), 10);
        assert_eq!(c.max_visible(), 3);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = controller(50);
        c.go_to(0);
        assert_eq!(c.current_page(), 1);
        c.go_to(42);
        assert_eq!(c.current_page(), 10);
        c.go_to(6);
        assert_eq!(c.current_page(), 6);
    }

    #[test]
    fn test_go_to_without_items_stays_on_first_page() {
        let mut c = controller(0);
        c.go_to(3);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut c = controller(12);
        c.previous();
        assert_eq!(c.current_page(), 1);
        c.next();
        c.next();
        assert_eq!(c.current_page(), 3);
        assert!(c.on_last_page());
        c.next();
        assert_eq!(c.current_page(), 3);
        c.previous();
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_first_and_last() {
        let mut c = controller(50);
        c.last();
        assert_eq!(c.current_page(), 10);
        c.first();
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn test_slice_bounds_on_partial_last_page() {
        let items: Vec<u32> = (0..12).collect();
        let mut c = controller(items.len());
        c.last();
        assert_eq!(c.start_index(), 10);
        assert_eq!(c.end_index(), 15);
        assert_eq!(c.slice_bounds(items.len()), (10, 12));
        assert_eq!(c.page_slice(&items), &[10, 11]);
        assert_eq!(c.items_on_page(), 2);
    }

    #[test]
    fn test_filter_change_resets_stale_page() {
        let mut c = controller(50);
        c.go_to(7);
        c.on_filter_changed(14);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.start_index(), 0);
    }

    #[test]
    fn test_filter_change_keeps_page_still_in_range() {
        let mut c = controller(50);
        c.go_to(3);
        c.on_filter_changed(20);
        assert_eq!(c.current_page(), 3);
    }

    #[test]
    fn test_filter_change_to_empty() {
        let mut c = controller(50);
        c.go_to(4);
        c.on_filter_changed(0);
        assert_eq!(c.current_page(), 1);
        assert!(!c.is_visible());
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut c = controller(50);
        c.go_to(5);
        c.set_page_size(10).unwrap();
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.total_pages(), 5);
    }

    #[test]
    fn test_window_follows_navigation() {
        let mut c = controller(50);
        assert_eq!(c.window(), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        c.go_to(5);
        assert_eq!(
            c.window(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        c.last();
        assert_eq!(c.window(), vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let page_size = usize::MAX / 2 + 1;
        let mut c = Controller::new(page_size)
            .unwrap()
            .with_total_items(usize::MAX);
        assert_eq!(c.total_pages(), 2);

        c.go_to(2);
        assert_eq!(c.start_index(), page_size);
        assert_eq!(c.end_index(), usize::MAX);
        assert_eq!(c.slice_bounds(usize::MAX), (page_size, usize::MAX));
        assert_eq!(c.items_on_page(), usize::MAX / 2);
    }
}
