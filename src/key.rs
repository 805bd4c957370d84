//! Key bindings for the paginator, search bar and record screen.
//!
//! A [`Binding`] pairs one or more key presses with the help text shown for
//! them. Bindings are built either with the fluent methods on [`Binding`]
//! or with functional options:
//!
//! ```rust
//! use bubbletea_paginate::key::{self, KeyMap};
//!
//! let next = key::new_binding(vec![
//!     key::with_keys_str(&["pgdown", "right", "l"]),
//!     key::with_help("→/l", "next page"),
//! ]);
//! assert_eq!(next.help().desc, "next page");
//! assert_eq!(next.keys().len(), 3);
//! ```
//!
//! Components expose their bindings through the [`KeyMap`] trait so the
//! [`crate::help`] component can render them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers held with the key.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key description such as `"left"`, `"G"` or `"ctrl+u"`.
    ///
    /// Returns `None` for names that are not recognised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_paginate::key::KeyPress;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let press = KeyPress::parse("ctrl+u").unwrap();
    /// assert_eq!(press.code, KeyCode::Char('u'));
    /// assert_eq!(press.modifiers, KeyModifiers::CONTROL);
    /// assert!(KeyPress::parse("hyper+x").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" on its own, or a trailing "+" as in "ctrl++"
        let name = match parts.pop() {
            Some("") if s.ends_with('+') => {
                parts.pop();
                "+"
            }
            Some(name) => name,
            None => return None,
        };

        for part in parts {
            match part {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Returns true if this press matches the given key message.
    ///
    /// Shift is ignored for character keys, since terminals report `G` both
    /// with and without the shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if matches!(self.code, KeyCode::Char(_)) {
            let mut expected = self.modifiers;
            let mut actual = msg.modifiers;
            expected.remove(KeyModifiers::SHIFT);
            actual.remove(KeyModifiers::SHIFT);
            expected == actual
        } else {
            self.modifiers == msg.modifiers
        }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"→/l"`.
    pub key: String,
    /// Description, e.g. `"next page"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it has keys and was not disabled.
    /// Disabled bindings never match and are hidden from help.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and one of its keys matches.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from functional options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys from their string names. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys
        .iter()
        .filter_map(|name| {
            let press = KeyPress::parse(name);
            if press.is_none() {
                debug!(key = *name, "ignoring unknown key name");
            }
            press
        })
        .collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the keys.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Returns true if any of the bindings matches the key message.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Bindings exposed by a component for help rendering.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, one inner `Vec` per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
