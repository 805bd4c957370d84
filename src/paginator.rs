//! A paginator component for bubbletea-rs record screens.
//!
//! The paginator renders the page window computed by [`crate::window`] and
//! moves between pages in response to key presses. It does not render the
//! records themselves; use [`Model::get_slice_bounds`] (or the underlying
//! [`Controller`]) to slice your own collection.
//!
//! ```text
//! ‹ 1 2 3 … 10 ›
//! ‹ 1 … 4 5 6 … 10 ›
//! ```

use crate::config::{PaginatorConfig, Type};
use crate::controller::Controller;
use crate::error::Result;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::window::WindowEntry;
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Key bindings for the paginator.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::paginator::PaginatorKeyMap;
/// use bubbletea_paginate::key::{self, KeyMap};
///
/// let keymap = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
///     ..PaginatorKeyMap::default()
/// };
/// assert_eq!(keymap.short_help().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}

/// Styles for the window view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The current page number.
    pub active_page: Style,
    /// Every other page number.
    pub inactive_page: Style,
    /// Ellipsis markers.
    pub ellipsis: Style,
    /// Prev/next arrows when they can be used.
    pub arrow: Style,
    /// Prev/next arrows on the first/last page.
    pub disabled_arrow: Style,
    /// The whole Arabic view.
    pub arabic: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#DDDDDD",
                })
                .bold(true)
                .underline(true),
            inactive_page: Style::new().foreground(subdued.clone()),
            ellipsis: Style::new().foreground(very_subdued.clone()),
            arrow: Style::new().foreground(subdued.clone()),
            disabled_arrow: Style::new().foreground(very_subdued),
            arabic: Style::new().foreground(subdued),
        }
    }
}

/// A paginator widget.
///
/// Wraps a [`Controller`] with key handling and rendering. Navigation
/// bindings are disabled at the boundaries (previous/first on page 1,
/// next/last on the last page), so they disappear from help and key
/// presses on them do nothing.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::paginator::Model;
/// use lipgloss_extras::lipgloss;
///
/// let mut paginator = Model::new().with_total_items(50); // 5 per page, 10 pages
/// paginator.go_to(5);
///
/// assert_eq!(lipgloss::strip_ansi(&paginator.view()), "‹ 1 … 4 5 6 … 10 ›");
///
/// let items: Vec<u32> = (0..50).collect();
/// let (start, end) = paginator.get_slice_bounds(items.len());
/// assert_eq!(&items[start..end], &[20, 21, 22, 23, 24]);
/// ```
///
/// ## Integration with bubbletea-rs
///
/// ```rust
/// use bubbletea_paginate::paginator::Model as Paginator;
/// use bubbletea_rs::{Cmd, Model, Msg};
///
/// struct App {
///     paginator: Paginator,
///     items: Vec<String>,
/// }
///
/// impl Model for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let items: Vec<String> = (1..=42).map(|i| format!("Record {}", i)).collect();
///         let paginator = Paginator::new().with_total_items(items.len());
///         (Self { paginator, items }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         self.paginator.update(&msg);
///         None
///     }
///
///     fn view(&self) -> String {
///         let (start, end) = self.paginator.get_slice_bounds(self.items.len());
///         format!("{}\n\n{}", self.items[start..end].join("\n"), self.paginator.view())
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// How the position is rendered.
    pub paginator_type: Type,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,
    /// Label of the previous-page arrow.
    pub prev_label: String,
    /// Label of the next-page arrow.
    pub next_label: String,
    /// Whether arrows are rendered around the window.
    pub show_arrows: bool,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    controller: Controller,
}

impl Default for Model {
    fn default() -> Self {
        let config = PaginatorConfig::default();
        let mut model = Self {
            paginator_type: config.paginator_type,
            arabic_format: config.arabic_format,
            prev_label: "‹".to_string(),
            next_label: "›".to_string(),
            show_arrows: true,
            styles: Styles::default(),
            keymap: PaginatorKeyMap::default(),
            controller: Controller::default(),
        };
        model.update_keybindings();
        model
    }
}

impl Model {
    /// Creates a paginator with five items per page and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a paginator from a config.
    ///
    /// # Errors
    ///
    /// Fails if the config's page size or window width is invalid.
    pub fn from_config(config: &PaginatorConfig) -> Result<Self> {
        let mut model = Self {
            paginator_type: config.paginator_type,
            arabic_format: config.arabic_format.clone(),
            controller: Controller::from_config(config)?,
            ..Self::default()
        };
        model.update_keybindings();
        Ok(model)
    }

    /// Sets the number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the display style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the arrow labels (builder pattern).
    pub fn with_arrows(mut self, prev: &str, next: &str) -> Self {
        self.prev_label = prev.to_string();
        self.next_label = next.to_string();
        self
    }

    /// The underlying controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Updates the item count, resetting to page 1 if the current page no
    /// longer exists.
    pub fn set_total_items(&mut self, items: usize) {
        self.controller.on_filter_changed(items);
        self.update_keybindings();
    }

    /// Changes the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// Fails when `per_page` is zero.
    pub fn set_per_page(&mut self, per_page: usize) -> Result<()> {
        self.controller.set_page_size(per_page)?;
        self.update_keybindings();
        Ok(())
    }

    /// The current page, 1-indexed.
    pub fn page(&self) -> usize {
        self.controller.current_page()
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.controller.total_pages()
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.controller.page_size()
    }

    /// Slice bounds of the current page for a collection of `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        self.controller.slice_bounds(length)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        self.controller.items_on_page()
    }

    /// True on the first page.
    pub fn on_first_page(&self) -> bool {
        self.controller.on_first_page()
    }

    /// True on the last page.
    pub fn on_last_page(&self) -> bool {
        self.controller.on_last_page()
    }

    /// Jumps to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.controller.go_to(page);
        self.update_keybindings();
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        self.controller.next();
        self.update_keybindings();
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        self.controller.previous();
        self.update_keybindings();
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.controller.first();
        self.update_keybindings();
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.controller.last();
        self.update_keybindings();
    }

    fn update_keybindings(&mut self) {
        let first = self.controller.on_first_page();
        let last = self.controller.on_last_page();
        self.keymap.prev_page.set_enabled(!first);
        self.keymap.first_page.set_enabled(!first);
        self.keymap.next_page.set_enabled(!last);
        self.keymap.last_page.set_enabled(!last);
    }

    /// Handles navigation keys. Returns true if the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        let before = self.page();
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page();
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page();
        }
        self.page() != before
    }

    /// Renders the paginator. Returns an empty string when there is nothing
    /// to paginate.
    pub fn view(&self) -> String {
        if !self.controller.is_visible() {
            return String::new();
        }
        match self.paginator_type {
            Type::Window => self.window_view(),
            Type::Arabic => self.arabic_view(),
        }
    }

    fn arabic_view(&self) -> String {
        let text = self
            .arabic_format
            .replacen("%d", &self.page().to_string(), 1)
            .replacen("%d", &self.total_pages().to_string(), 1);
        self.styles.arabic.clone().inline(true).render(&text)
    }

    fn window_view(&self) -> String {
        let current = self.page();
        let mut parts: Vec<String> = Vec::new();

        if self.show_arrows {
            parts.push(self.arrow(&self.prev_label, self.on_first_page()));
        }
        for entry in self.controller.window() {
            let rendered = match entry {
                WindowEntry::Page(n) if n == current => {
                    self.styles.active_page.clone().inline(true).render(&n.to_string())
                }
                WindowEntry::Page(n) => {
                    self.styles.inactive_page.clone().inline(true).render(&n.to_string())
                }
                WindowEntry::Ellipsis => self
                    .styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&entry.to_string()),
            };
            parts.push(rendered);
        }
        if self.show_arrows {
            parts.push(self.arrow(&self.next_label, self.on_last_page()));
        }

        parts.join(" ")
    }

    fn arrow(&self, label: &str, disabled: bool) -> String {
        let style = if disabled {
            &self.styles.disabled_arrow
        } else {
            &self.styles.arrow
        };
        style.clone().inline(true).render(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crossterm::event::{KeyCode, KeyModifiers};
    use lipgloss_extras::lipgloss;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn plain(model: &Model) -> String {
        lipgloss::strip_ansi(&model.view())
    }

    #[test]
    fn test_default_values() {
        let paginator = Model::new();
        assert_eq!(paginator.paginator_type, Type::Window);
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.per_page(), 5);
        assert_eq!(paginator.total_pages(), 0);
        assert_eq!(paginator.view(), "");
    }

    #[test]
    fn test_window_view_scenarios() {
        let mut paginator = Model::new().with_total_items(12);
        assert_eq!(plain(&paginator), "‹ 1 2 3 ›");

        paginator.set_total_items(50);
        assert_eq!(plain(&paginator), "‹ 1 2 3 … 10 ›");
        paginator.go_to(5);
        assert_eq!(plain(&paginator), "‹ 1 … 4 5 6 … 10 ›");
        paginator.last_page();
        assert_eq!(plain(&paginator), "‹ 1 … 8 9 10 ›");
    }

    #[test]
    fn test_window_view_without_arrows() {
        let mut paginator = Model::new().with_total_items(50);
        paginator.show_arrows = false;
        assert_eq!(plain(&paginator), "1 2 3 … 10");
    }

    #[test]
    fn test_arabic_view() {
        let mut paginator = Model::new().with_type(Type::Arabic).with_total_items(50);
        paginator.go_to(3);
        assert_eq!(plain(&paginator), "3/10");
        paginator.arabic_format = "page %d of %d".to_string();
        assert_eq!(plain(&paginator), "page 3 of 10");
    }

    #[test]
    fn test_empty_is_suppressed_in_both_modes() {
        let paginator = Model::new();
        assert_eq!(paginator.view(), "");
        let paginator = Model::new().with_type(Type::Arabic);
        assert_eq!(paginator.view(), "");
    }

    #[test]
    fn test_key_navigation() {
        let mut paginator = Model::new().with_total_items(50);
        assert!(paginator.update(&key(KeyCode::Right)));
        assert_eq!(paginator.page(), 2);
        assert!(paginator.update(&key(KeyCode::Char('l'))));
        assert_eq!(paginator.page(), 3);
        assert!(paginator.update(&key(KeyCode::PageUp)));
        assert_eq!(paginator.page(), 2);
        assert!(paginator.update(&key(KeyCode::End)));
        assert_eq!(paginator.page(), 10);
        assert!(paginator.update(&key(KeyCode::Home)));
        assert_eq!(paginator.page(), 1);
        assert!(!paginator.update(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_boundary_keys_are_noops() {
        let mut paginator = Model::new().with_total_items(12);
        assert!(!paginator.update(&key(KeyCode::Left)));
        assert_eq!(paginator.page(), 1);
        paginator.last_page();
        assert!(!paginator.update(&key(KeyCode::Right)));
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn test_bindings_disabled_at_bounds() {
        let mut paginator = Model::new().with_total_items(50);
        assert!(!paginator.keymap.prev_page.enabled());
        assert!(!paginator.keymap.first_page.enabled());
        assert!(paginator.keymap.next_page.enabled());

        paginator.last_page();
        assert!(paginator.keymap.prev_page.enabled());
        assert!(!paginator.keymap.next_page.enabled());
        assert!(!paginator.keymap.last_page.enabled());
    }

    #[test]
    fn test_non_key_messages_are_ignored() {
        let mut paginator = Model::new().with_total_items(50);
        let msg = Box::new(42u32) as Msg;
        assert!(!paginator.update(&msg));
    }

    #[test]
    fn test_shrinking_total_resets_page() {
        let mut paginator = Model::new().with_total_items(50);
        paginator.go_to(9);
        paginator.set_total_items(7);
        assert_eq!(paginator.page(), 1);
        assert_eq!(plain(&paginator), "‹ 1 2 ›");
    }

    #[test]
    fn test_from_config() {
        let config = PaginatorConfig::default()
            .with_page_size(10)
            .with_type(Type::Arabic);
        let paginator = Model::from_config(&config).unwrap().with_total_items(95);
        assert_eq!(paginator.total_pages(), 10);
        assert_eq!(plain(&paginator), "1/10");

        let bad = PaginatorConfig::default().with_page_size(0);
        assert_eq!(Model::from_config(&bad).unwrap_err(), Error::InvalidPageSize);
    }

    #[test]
    fn test_set_per_page() {
        let mut paginator = Model::new().with_total_items(50);
        paginator.go_to(4);
        paginator.set_per_page(25).unwrap();
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.total_pages(), 2);
        assert!(paginator.set_per_page(0).is_err());
    }
}
