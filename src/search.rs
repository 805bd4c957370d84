//! Search bar component.
//!
//! A single-line input used to narrow a record list. It only accepts input
//! while focused; [`Model::update`] reports whether the search term changed
//! so the owner can re-filter its records.
//!
//! ```text
//! Search: oil▏
//! ```

use crate::key::{self, KeyMap};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing keys of the search bar.
#[derive(Debug, Clone)]
pub struct SearchKeyMap {
    /// Delete the character before the cursor.
    pub delete_char_backward: key::Binding,
    /// Clear the whole search term.
    pub clear: key::Binding,
}

impl Default for SearchKeyMap {
    fn default() -> Self {
        Self {
            delete_char_backward: key::new_binding(vec![
                key::with_keys_str(&["backspace", "ctrl+h"]),
                key::with_help("backspace", "delete"),
            ]),
            clear: key::new_binding(vec![
                key::with_keys_str(&["ctrl+u"]),
                key::with_help("ctrl+u", "clear"),
            ]),
        }
    }
}

impl KeyMap for SearchKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.delete_char_backward, &self.clear]]
    }
}

/// Styles for the search bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The prompt.
    pub prompt: Style,
    /// The entered text.
    pub text: Style,
    /// The placeholder shown when empty.
    pub placeholder: Style,
    /// The cursor block shown while focused.
    pub cursor: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            cursor: Style::new().reverse(true),
        }
    }
}

/// Search bar state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::search::Model;
/// use bubbletea_paginate::Component;
/// use bubbletea_rs::{KeyMsg, Msg};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut search = Model::new();
/// search.focus();
///
/// let msg = Box::new(KeyMsg { key: KeyCode::Char('o'), modifiers: KeyModifiers::NONE }) as Msg;
/// assert!(search.update(&msg));
/// assert_eq!(search.value(), "o");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the input.
    pub prompt: String,
    /// Text shown when the input is empty.
    pub placeholder: String,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,
    /// Key bindings.
    pub keymap: SearchKeyMap,
    /// Styles.
    pub styles: Styles,
    value: String,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "Search: ".to_string(),
            placeholder: "type / to search".to_string(),
            char_limit: 0,
            keymap: SearchKeyMap::default(),
            styles: Styles::default(),
            value: String::new(),
            focus: false,
        }
    }
}

impl Model {
    /// Creates an empty, unfocused search bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder (builder pattern).
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// The current search term.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the search term, truncated to `char_limit`.
    pub fn set_value(&mut self, value: &str) {
        self.value = if self.char_limit > 0 {
            value.chars().take(self.char_limit).collect()
        } else {
            value.to_string()
        };
    }

    /// Clears the search term.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Applies an editing key. Returns true if the search term changed.
    ///
    /// Does nothing while the search bar is blurred.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        if self.keymap.clear.matches(key_msg) {
            let changed = !self.value.is_empty();
            self.value.clear();
            return changed;
        }
        if self.keymap.delete_char_backward.matches(key_msg) {
            return self.value.pop().is_some();
        }

        match key_msg.key {
            KeyCode::Char(c)
                if !key_msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.char_limit > 0 && self.value.chars().count() >= self.char_limit {
                    return false;
                }
                self.value.push(c);
                true
            }
            _ => false,
        }
    }

    /// Renders the prompt and the term (or the placeholder).
    pub fn view(&self) -> String {
        let prompt = self.styles.prompt.clone().inline(true).render(&self.prompt);
        let body = if self.value.is_empty() && !self.focus {
            self.styles
                .placeholder
                .clone()
                .inline(true)
                .render(&self.placeholder)
        } else {
            self.styles.text.clone().inline(true).render(&self.value)
        };
        let cursor = if self.focus {
            self.styles.cursor.clone().inline(true).render(" ")
        } else {
            String::new()
        };
        format!("{}{}{}", prompt, body, cursor)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers,
        }) as Msg
    }

    fn typed(search: &mut Model, text: &str) {
        for c in text.chars() {
            search.update(&key(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_ignores_input_when_blurred() {
        let mut search = Model::new();
        assert!(!search.update(&key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(search.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut search = Model::new();
        search.focus();
        typed(&mut search, "oil");
        assert_eq!(search.value(), "oil");
        assert!(search.update(&key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(search.value(), "oi");
    }

    #[test]
    fn test_backspace_on_empty_reports_no_change() {
        let mut search = Model::new();
        search.focus();
        assert!(!search.update(&key(KeyCode::Backspace, KeyModifiers::NONE)));
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut search = Model::new();
        search.focus();
        typed(&mut search, "T-104");
        assert!(search.update(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(search.value(), "");
        assert!(!search.update(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut search = Model::new();
        search.focus();
        assert!(!search.update(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)));
        assert!(search.update(&key(KeyCode::Char('X'), KeyModifiers::SHIFT)));
        assert_eq!(search.value(), "X");
    }

    #[test]
    fn test_char_limit() {
        let mut search = Model::new();
        search.char_limit = 3;
        search.focus();
        typed(&mut search, "abcd");
        assert_eq!(search.value(), "abc");
        search.set_value("wxyz");
        assert_eq!(search.value(), "wxy");
    }

    #[test]
    fn test_view() {
        let mut search = Model::new();
        assert_eq!(
            lipgloss::strip_ansi(&search.view()),
            "Search: type / to search"
        );
        search.focus();
        search.set_value("oil");
        assert_eq!(lipgloss::strip_ansi(&search.view()), "Search: oil ");
        search.blur();
        assert_eq!(lipgloss::strip_ansi(&search.view()), "Search: oil");
    }
}
