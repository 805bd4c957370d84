#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-paginate/")]

//! # bubbletea-paginate
//!
//! Pagination, search and record-table components for building record
//! management screens with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The heart of the crate is a page-window algorithm: given the number of
//! items, the page size and the current page, it decides which page numbers
//! a paginator shows and where ellipses go.
//!
//! ```text
//! ‹ 1 2 3 … 10 ›
//! ‹ 1 … 4 5 6 … 10 ›
//! ‹ 1 … 8 9 10 ›
//! ```
//!
//! Around it sit the pieces a record screen needs:
//!
//! - [`window`]: the pure window computation.
//! - [`controller`]: current page, slicing bounds and navigation.
//! - [`paginator`]: a rendered, key-driven paginator.
//! - [`search`], [`table`], [`help`]: search bar, record table and key help.
//! - [`screen`]: a complete record screen (search, table, paginator, modal)
//!   over a [`screen::Repository`].
//!
//! ## Window computation
//!
//! ```rust
//! use bubbletea_paginate::{compute_window, WindowEntry};
//!
//! let window = compute_window(50, 5, 5, 3).unwrap();
//! assert_eq!(
//!     window,
//!     vec![
//!         WindowEntry::Page(1),
//!         WindowEntry::Ellipsis,
//!         WindowEntry::Page(4),
//!         WindowEntry::Page(5),
//!         WindowEntry::Page(6),
//!         WindowEntry::Ellipsis,
//!         WindowEntry::Page(10),
//!     ]
//! );
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_paginate::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     items: Vec<String>,
//!     paginator: Paginator,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items: Vec<String> = (1..=42).map(|i| format!("Work order {}", i)).collect();
//!         let paginator = Paginator::new().with_total_items(items.len());
//!         (Self { items, paginator }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.paginator.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         let (start, end) = self.paginator.get_slice_bounds(self.items.len());
//!         format!("{}\n\n{}", self.items[start..end].join("\n"), self.paginator.view())
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod help;
pub mod key;
pub mod paginator;
pub mod screen;
pub mod search;
pub mod table;
pub mod window;

use bubbletea_rs::Cmd;

/// Components that can take keyboard focus.
///
/// A focused component receives key input and renders its active state.
///
/// ```rust
/// use bubbletea_paginate::prelude::*;
///
/// let mut search = Search::new();
/// assert!(!search.focused());
///
/// search.focus();
/// assert!(search.focused());
///
/// search.blur();
/// assert!(!search.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Returns true while the component has focus.
    fn focused(&self) -> bool;
}

pub use config::{PaginatorConfig, Type as PaginatorType, DEFAULT_PAGE_SIZE};
pub use controller::Controller;
pub use error::{Error, Result};
pub use help::Model as HelpModel;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use paginator::{Model as Paginator, PaginatorKeyMap};
pub use screen::{InMemoryRepository, ModalMode, Record, Repository, Screen, ScreenKeyMap};
pub use search::Model as Search;
pub use table::{Column, Model as Table, Row};
pub use window::{
    compute_default_window, compute_window, total_pages, WindowEntry, DEFAULT_MAX_VISIBLE,
};

/// Commonly used types, for glob import.
///
/// ```rust
/// use bubbletea_paginate::prelude::*;
///
/// let mut controller = Controller::new(5).unwrap().with_total_items(12);
/// controller.next();
/// assert_eq!(controller.current_page(), 2);
/// ```
pub mod prelude {
    pub use crate::config::{PaginatorConfig, Type as PaginatorType};
    pub use crate::controller::Controller;
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{
        matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::paginator::Model as Paginator;
    pub use crate::screen::{InMemoryRepository, ModalMode, Record, Repository, Screen};
    pub use crate::search::Model as Search;
    pub use crate::table::{Column, Model as Table, Row};
    pub use crate::window::{compute_window, WindowEntry};
    pub use crate::Component;
}
