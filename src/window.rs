//! Page-window computation.
//!
//! A paginator control does not show every page number. It shows a small
//! window of pages around the current one, anchored by the first and last
//! pages, with ellipsis markers where pages were left out:
//!
//! ```text
//! 1 2 3 … 10        (near the start)
//! 1 … 4 5 6 … 10    (in the middle)
//! 1 … 8 9 10        (near the end)
//! ```
//!
//! [`compute_window`] is a pure function of the item count, page size,
//! current page and window width. It is the single source of truth for
//! every paginator in the crate.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};

/// Number of contiguous numbered pages shown by default.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Smallest accepted window. The middle layout shows the current page and
/// one neighbour on each side, so anything narrower cannot be laid out.
pub const MIN_MAX_VISIBLE: usize = 3;

/// A single entry of a page window, rendered left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowEntry {
    /// A selectable page number (1-indexed).
    Page(usize),
    /// A marker for one or more pages that are not shown.
    Ellipsis,
}

impl WindowEntry {
    /// Returns the page number, or `None` for an ellipsis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paginate::window::WindowEntry;
    ///
    /// assert_eq!(WindowEntry::Page(4).page(), Some(4));
    /// assert_eq!(WindowEntry::Ellipsis.page(), None);
    /// ```
    pub fn page(&self) -> Option<usize> {
        match self {
            WindowEntry::Page(n) => Some(*n),
            WindowEntry::Ellipsis => None,
        }
    }

    /// Returns true if this entry is an ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, WindowEntry::Ellipsis)
    }
}

impl fmt::Display for WindowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowEntry::Page(n) => write!(f, "{}", n),
            WindowEntry::Ellipsis => f.write_str("…"),
        }
    }
}

/// Returns the number of pages needed to show `total_items` items.
///
/// Zero items means zero pages.
///
/// # Errors
///
/// Returns [`Error::InvalidPageSize`] when `page_size` is zero.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::window::total_pages;
///
/// assert_eq!(total_pages(12, 5).unwrap(), 3);
/// assert_eq!(total_pages(50, 5).unwrap(), 10);
/// assert_eq!(total_pages(0, 5).unwrap(), 0);
/// assert!(total_pages(10, 0).is_err());
/// ```
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    Ok(total_items.div_ceil(page_size))
}

/// Computes the page numbers and ellipses a paginator should render.
///
/// `current_page` is 1-indexed and is clamped into `[1, total_pages]`
/// before use, so a stale or zero page never produces an invalid window.
///
/// Layout rules, with `m = max_visible` and `t = total_pages`:
///
/// 1. `t <= m`: every page, no ellipsis.
/// 2. current page `<= m - 1`: pages `1..=m`, ellipsis, `t`.
/// 3. current page `>= t - (m - 2)`: `1`, ellipsis, pages `t-(m-1)..=t`.
/// 4. otherwise: `1`, ellipsis, the current page with one neighbour on
///    each side, ellipsis, `t`.
///
/// An ellipsis is always emitted in rules 2 to 4 even when it stands for
/// no hidden page (for example `1 2 3 … 4` when `t == m + 1`).
///
/// # Errors
///
/// - [`Error::InvalidPageSize`] when `page_size` is zero.
/// - [`Error::InvalidWindowSize`] when `max_visible` is below
///   [`MIN_MAX_VISIBLE`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::window::{compute_window, WindowEntry::{Ellipsis, Page}};
///
/// let window = compute_window(50, 5, 5, 3).unwrap();
/// assert_eq!(
///     window,
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
///
/// // No items, nothing to render.
/// assert!(compute_window(0, 5, 1, 3).unwrap().is_empty());
/// ```
pub fn compute_window(
    total_items: usize,
    page_size: usize,
    current_page: usize,
    max_visible: usize,
) -> Result<Vec<WindowEntry>> {
    let total = total_pages(total_items, page_size)?;
    if max_visible < MIN_MAX_VISIBLE {
        return Err(Error::InvalidWindowSize { max_visible });
    }
    if total == 0 {
        return Ok(Vec::new());
    }

    let current = current_page.clamp(1, total);

    let entries = if total <= max_visible {
        (1..=total).map(WindowEntry::Page).collect()
    } else if current < max_visible {
        let mut entries: Vec<WindowEntry> = (1..=max_visible).map(WindowEntry::Page).collect();
        entries.push(WindowEntry::Ellipsis);
        entries.push(WindowEntry::Page(total));
        entries
    } else if current >= total - (max_visible - 2) {
        // total > max_visible >= 3, so the tail run starts at page 2 or later
        let mut entries = vec![WindowEntry::Page(1), WindowEntry::Ellipsis];
        entries.extend((total - (max_visible - 1)..=total).map(WindowEntry::Page));
        entries
    } else {
        vec![
            WindowEntry::Page(1),
            WindowEntry::Ellipsis,
            WindowEntry::Page(current - 1),
            WindowEntry::Page(current),
            WindowEntry::Page(current + 1),
            WindowEntry::Ellipsis,
            WindowEntry::Page(total),
        ]
    };

    trace!(
        total_items,
        page_size,
        current_page = current,
        max_visible,
        entries = entries.len(),
        "computed page window"
    );

    Ok(entries)
}

/// Shorthand for [`compute_window`] with [`DEFAULT_MAX_VISIBLE`].
pub fn compute_default_window(
    total_items: usize,
    page_size: usize,
    current_page: usize,
) -> Result<Vec<WindowEntry>> {
    compute_window(total_items, page_size, current_page, DEFAULT_MAX_VISIBLE)
}
