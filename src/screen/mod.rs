//! Record management screens.
//!
//! A record screen is the unit the maintenance dashboard is built from: a
//! search bar, a table showing one page of records, a paginator, and a
//! create/edit/view modal. [`Screen`] holds all of that state explicitly:
//!
//! - the [`Repository`] the records come from,
//! - the search term and the records it matches,
//! - the paginator (current page, page window),
//! - the modal mode and the record it targets.
//!
//! Screens do not share state, so each screen owns its own `Screen` value.
//!
//! ## Data flow
//!
//! ```text
//! key press ─▶ Screen::update ─▶ search term changed ─▶ Repository::list(term)
//!                                                          │
//!                      table rows ◀─ page slice ◀─ paginator.set_total_items
//! ```
//!
//! Form markup is left to the application: it collects the fields while the
//! modal is open and hands the finished record to [`Screen::submit`].
//!
//! # Examples
//!
//! ```
//! use bubbletea_paginate::screen::{InMemoryRepository, ModalMode, Record, Screen};
//! use bubbletea_paginate::table::Column;
//! use std::fmt;
//!
//! #[derive(Clone)]
//! struct Inspection { id: String, site: String }
//!
//! impl fmt::Display for Inspection {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{} at {}", self.id, self.site)
//!     }
//! }
//!
//! impl Record for Inspection {
//!     fn id(&self) -> String { self.id.clone() }
//!     fn filter_value(&self) -> String { format!("{} {}", self.id, self.site) }
//!     fn cells(&self) -> Vec<String> { vec![self.id.clone(), self.site.clone()] }
//! }
//!
//! let records: Vec<Inspection> = (1..=12)
//!     .map(|i| Inspection { id: format!("I-{}", i), site: format!("Site {}", i % 3) })
//!     .collect();
//! let mut screen = Screen::new(
//!     "Visual inspections",
//!     vec![Column::new("ID"), Column::new("Site")],
//!     InMemoryRepository::new(records),
//! );
//!
//! assert_eq!(screen.paginator().total_pages(), 3);
//! screen.last_page();
//! assert_eq!(screen.visible_records().len(), 2);
//!
//! screen.set_search_term("site 1");
//! assert_eq!(screen.paginator().page(), 1);
//! assert_eq!(screen.filtered_records().len(), 4);
//!
//! screen.open_create();
//! screen.submit(Inspection { id: "I-13".into(), site: "Site 1".into() }).unwrap();
//! assert_eq!(screen.modal(), &ModalMode::Closed);
//! assert_eq!(screen.filtered_records().len(), 5);
//! ```

mod filtering;
mod keys;
mod record;
mod repository;


pub use filtering::{filter_records, filter_records_with, FilterMode};
pub use keys::ScreenKeyMap;
pub use record::{ModalMode, Record};
pub use repository::{InMemoryRepository, Repository};

use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use crate::{help, paginator, search, table, Component};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use keys::ScreenHelp;
use lipgloss_extras::prelude::*;
use tracing::{debug, warn};

/// Styles for the parts of a screen the widgets do not cover.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The screen title.
    pub title: Style,
    /// The modal summary line.
    pub modal: Style,
    /// Error and status messages.
    pub status: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            modal: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
        }
    }
}

/// State of one record screen.
pub struct Screen<R: Record, S: Repository<R> = InMemoryRepository<R>> {
    title: String,
    repository: S,
    filtered: Vec<R>,
    search: search::Model,
    paginator: paginator::Model,
    table: table::Model,
    modal: ModalMode,
    status: Option<String>,
    /// Help view.
    pub help: help::Model,
    /// Key bindings.
    pub keymap: ScreenKeyMap,
    /// Styles.
    pub styles: Styles,
}

impl<R: Record, S: Repository<R>> Screen<R, S> {
    /// Creates a screen with the default paginator (5 records per page).
    pub fn new(title: &str, columns: Vec<table::Column>, repository: S) -> Self {
        let mut screen = Self {
            title: title.to_string(),
            repository,
            filtered: Vec::new(),
            search: search::Model::new(),
            paginator: paginator::Model::new(),
            table: table::Model::new(columns),
            modal: ModalMode::Closed,
            status: None,
            help: help::Model::new(),
            keymap: ScreenKeyMap::default(),
            styles: Styles::default(),
        };
        screen.refresh();
        screen
    }

    /// Creates a screen whose paginator follows `config`.
    ///
    /// # Errors
    ///
    /// Fails when the config's page size or window width is invalid.
    pub fn with_config(
        title: &str,
        columns: Vec<table::Column>,
        repository: S,
        config: &PaginatorConfig,
    ) -> Result<Self> {
        let mut screen = Self::new(title, columns, repository);
        screen.paginator = paginator::Model::from_config(config)?;
        screen.refresh();
        Ok(screen)
    }

    /// The screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The repository.
    pub fn repository(&self) -> &S {
        &self.repository
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    /// The search bar.
    pub fn search(&self) -> &search::Model {
        &self.search
    }

    /// The paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
        self.page_changed();
    }

    /// Moves to the previous page.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
        self.page_changed();
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.paginator.first_page();
        self.page_changed();
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        self.paginator.last_page();
        self.page_changed();
    }

    /// Jumps to `page`, clamped into the existing pages.
    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to(page);
        self.page_changed();
    }

    // table rows and cursor always follow the current page
    fn page_changed(&mut self) {
        self.table.select_first();
        self.sync_table();
    }

    /// The table.
    pub fn table(&self) -> &table::Model {
        &self.table
    }

    /// Every record matching the search term.
    pub fn filtered_records(&self) -> &[R] {
        &self.filtered
    }

    /// The records on the current page.
    pub fn visible_records(&self) -> &[R] {
        self.paginator.controller().page_slice(&self.filtered)
    }

    /// The record under the table cursor.
    pub fn selected_record(&self) -> Option<&R> {
        self.visible_records().get(self.table.selected_index())
    }

    /// The modal state.
    pub fn modal(&self) -> &ModalMode {
        &self.modal
    }

    /// True while the create/edit/view modal is open.
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// The record targeted by the edit or view modal.
    pub fn edit_target(&self) -> Option<R> {
        self.modal.target().and_then(|id| self.repository.get(id))
    }

    /// The last error or status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Reloads the matching records from the repository.
    ///
    /// The current page is kept if it still exists and reset to page 1
    /// otherwise.
    pub fn refresh(&mut self) {
        self.filtered = self.repository.list(self.search.value());
        self.paginator.set_total_items(self.filtered.len());
        self.sync_table();
    }

    /// Replaces the search term, re-filters and returns to page 1.
    pub fn set_search_term(&mut self, term: &str) {
        if term == self.search.value() {
            return;
        }
        self.search.set_value(term);
        self.apply_search();
    }

    fn apply_search(&mut self) {
        self.refresh();
        self.paginator.first_page();
        self.table.select_first();
        self.sync_table();
        debug!(
            term = self.search.value(),
            matches = self.filtered.len(),
            "search applied"
        );
    }

    fn sync_table(&mut self) {
        let rows = self
            .visible_records()
            .iter()
            .map(|r| table::Row::new(r.cells()))
            .collect();
        self.table.set_rows(rows);
    }

    /// Opens an empty create form.
    pub fn open_create(&mut self) {
        self.status = None;
        self.modal = ModalMode::Create;
    }

    /// Opens the edit form for the record with `id`.
    ///
    /// # Errors
    ///
    /// [`Error::RecordNotFound`] if there is no such record.
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.status = None;
        self.modal = ModalMode::Edit(id.to_string());
        Ok(())
    }

    /// Opens the read-only view of the record with `id`.
    ///
    /// # Errors
    ///
    /// [`Error::RecordNotFound`] if there is no such record.
    pub fn open_view(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.status = None;
        self.modal = ModalMode::View(id.to_string());
        Ok(())
    }

    fn require(&self, id: &str) -> Result<()> {
        match self.repository.get(id) {
            Some(_) => Ok(()),
            None => Err(Error::RecordNotFound { id: id.to_string() }),
        }
    }

    /// Closes the modal without saving.
    pub fn close_modal(&mut self) {
        self.status = None;
        self.modal = ModalMode::Closed;
    }

    /// Saves the record from the open create or edit form and closes it.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveForm`] when no create or edit form is open.
    /// - [`Error::MissingRequiredFields`] when the record leaves required
    ///   fields empty; the form stays open.
    /// - Repository errors (duplicate or unknown id); the form stays open.
    pub fn submit(&mut self, record: R) -> Result<()> {
        let result = self.save(record);
        match &result {
            Ok(()) => {
                self.status = None;
                self.modal = ModalMode::Closed;
                self.refresh();
            }
            Err(err) => {
                warn!(error = %err, "record not saved");
                self.status = Some(err.to_string());
            }
        }
        result
    }

    fn save(&mut self, record: R) -> Result<()> {
        let target = match &self.modal {
            ModalMode::Create => None,
            ModalMode::Edit(id) => Some(id.clone()),
            ModalMode::Closed | ModalMode::View(_) => return Err(Error::NoActiveForm),
        };

        let missing = record.missing_required_fields();
        if !missing.is_empty() {
            return Err(Error::MissingRequiredFields {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        match target {
            None => self.repository.create(record),
            Some(id) => self.repository.update(&id, record),
        }
    }

    /// Deletes the record with `id` and closes the modal if it showed it.
    ///
    /// # Errors
    ///
    /// [`Error::RecordNotFound`] if there is no such record.
    pub fn delete(&mut self, id: &str) -> Result<R> {
        let removed = self.repository.delete(id)?;
        if self.modal.target() == Some(id) {
            self.modal = ModalMode::Closed;
        }
        self.refresh();
        Ok(removed)
    }

    /// Handles a message: search input, paginator keys, row selection and
    /// record actions. Returns a quit command when the quit key is pressed.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.search.focused() {
            self.update_search(msg, key_msg);
            return None;
        }

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.modal.is_open() {
            if self.keymap.close_modal.matches(key_msg) {
                self.close_modal();
            }
            return None;
        }

        if self.paginator.update(msg) {
            self.page_changed();
            return None;
        }

        if self.keymap.search.matches(key_msg) {
            self.search.focus();
        } else if self.keymap.row_up.matches(key_msg) {
            self.table.select_prev();
        } else if self.keymap.row_down.matches(key_msg) {
            self.table.select_next();
        } else if self.keymap.create.matches(key_msg) {
            self.open_create();
        } else if self.keymap.edit.matches(key_msg) {
            self.act_on_selected(|screen, id| screen.open_edit(&id));
        } else if self.keymap.view.matches(key_msg) {
            self.act_on_selected(|screen, id| screen.open_view(&id));
        } else if self.keymap.delete.matches(key_msg) {
            self.act_on_selected(|screen, id| screen.delete(&id).map(|_| ()));
        } else if self.keymap.toggle_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        }
        None
    }

    fn update_search(&mut self, msg: &Msg, key_msg: &KeyMsg) {
        if self.keymap.accept_search.matches(key_msg) {
            self.search.blur();
        } else if self.keymap.cancel_search.matches(key_msg) {
            self.search.blur();
            if !self.search.value().is_empty() {
                self.search.reset();
                self.apply_search();
            }
        } else if self.search.update(msg) {
            self.apply_search();
        }
    }

    fn act_on_selected(&mut self, action: impl FnOnce(&mut Self, String) -> Result<()>) {
        let Some(id) = self.selected_record().map(Record::id) else {
            return;
        };
        if let Err(err) = action(self, id) {
            warn!(error = %err, "record action failed");
            self.status = Some(err.to_string());
        }
    }

    /// Renders the screen: title, search bar, table, paginator (omitted when
    /// there are no matching records), modal summary, status and help.
    pub fn view(&self) -> String {
        let mut sections = vec![
            self.styles.title.clone().render(&self.title),
            self.search.view(),
            self.table.view(),
        ];

        let pagination = self.paginator.view();
        if !pagination.is_empty() {
            sections.push(pagination);
        }

        if let Some(summary) = self.modal_summary() {
            sections.push(self.styles.modal.clone().render(&summary));
        }

        if let Some(status) = &self.status {
            sections.push(self.styles.status.clone().render(status));
        }

        sections.push(self.help.view(&ScreenHelp {
            screen: &self.keymap,
            paginator: &self.paginator.keymap,
        }));

        sections.join("\n\n")
    }

    fn modal_summary(&self) -> Option<String> {
        match &self.modal {
            ModalMode::Closed => None,
            ModalMode::Create => Some("New record".to_string()),
            ModalMode::Edit(_) => self.edit_target().map(|r| format!("Editing {}", r)),
            ModalMode::View(_) => self.edit_target().map(|r| format!("Viewing {}", r)),
        }
    }
}
