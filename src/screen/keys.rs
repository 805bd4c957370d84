//! Key bindings for record screens.
//!
//! - **Rows**: `↑/k`, `↓/j`
//! - **Pages**: paginator keys (`←/h`, `→/l`, `g`, `G`)
//! - **Search**: `/` to focus, `enter` to keep the term, `esc` to clear it
//! - **Records**: `n` new, `e`/`enter` edit, `v` view, `d`/`delete` delete
//! - **Modal**: `esc` closes
//! - **Help / quit**: `?`, `q`/`ctrl+c`

use crate::key::{self, KeyMap};
use crate::paginator::PaginatorKeyMap;

/// Key bindings of a record screen.
#[derive(Debug, Clone)]
pub struct ScreenKeyMap {
    /// Select the previous row.
    pub row_up: key::Binding,
    /// Select the next row.
    pub row_down: key::Binding,
    /// Focus the search bar.
    pub search: key::Binding,
    /// Leave the search bar keeping the term.
    pub accept_search: key::Binding,
    /// Leave the search bar and clear the term.
    pub cancel_search: key::Binding,
    /// Open the create form.
    pub create: key::Binding,
    /// Open the edit form for the selected row.
    pub edit: key::Binding,
    /// Open the read-only view for the selected row.
    pub view: key::Binding,
    /// Delete the selected row.
    pub delete: key::Binding,
    /// Close the modal.
    pub close_modal: key::Binding,
    /// Toggle the full help.
    pub toggle_help: key::Binding,
    /// Quit.
    pub quit: key::Binding,
}

impl Default for ScreenKeyMap {
    fn default() -> Self {
        Self {
            row_up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            row_down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            accept_search: key::new_binding(vec![
                key::with_keys_str(&["enter", "tab"]),
                key::with_help("enter", "apply search"),
            ]),
            cancel_search: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear search"),
            ]),
            create: key::new_binding(vec![
                key::with_keys_str(&["n"]),
                key::with_help("n", "new"),
            ]),
            edit: key::new_binding(vec![
                key::with_keys_str(&["e", "enter"]),
                key::with_help("e", "edit"),
            ]),
            view: key::new_binding(vec![
                key::with_keys_str(&["v"]),
                key::with_help("v", "view"),
            ]),
            delete: key::new_binding(vec![
                key::with_keys_str(&["d", "delete"]),
                key::with_help("d", "delete"),
            ]),
            close_modal: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "close"),
            ]),
            toggle_help: key::new_binding(vec![
                key::with_keys_str(&["?"]),
                key::with_help("?", "more"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q", "ctrl+c"]),
                key::with_help("q", "quit"),
            ]),
        }
    }
}

/// Screen and paginator bindings combined for the help view.
pub(super) struct ScreenHelp<'a> {
    pub(super) screen: &'a ScreenKeyMap,
    pub(super) paginator: &'a PaginatorKeyMap,
}

impl KeyMap for ScreenHelp<'_> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.paginator.prev_page,
            &self.paginator.next_page,
            &self.screen.search,
            &self.screen.create,
            &self.screen.edit,
            &self.screen.delete,
            &self.screen.toggle_help,
            &self.screen.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.screen.row_up, &self.screen.row_down],
            vec![
                &self.paginator.prev_page,
                &self.paginator.next_page,
                &self.paginator.first_page,
                &self.paginator.last_page,
            ],
            vec![
                &self.screen.search,
                &self.screen.accept_search,
                &self.screen.cancel_search,
            ],
            vec![
                &self.screen.create,
                &self.screen.edit,
                &self.screen.view,
                &self.screen.delete,
            ],
            vec![&self.screen.toggle_help, &self.screen.quit],
        ]
    }
}
