//! A help component that renders key bindings.
//!
//! The help line is generated from any type implementing [`KeyMap`]. It has
//! two modes:
//!
//! ```text
//! ←/h prev page • →/l next page • / search          (short)
//!
//! ←/h prev page    / search                          (full)
//! →/l next page    esc clear search
//! ```
//!
//! Disabled bindings are skipped. When `width` is set the short view is cut
//! off with an ellipsis rather than wrapping.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation ellipsis.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator between items in the short view.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Separator between columns in the full view.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::help::Model;
/// use bubbletea_paginate::key::{Binding, KeyMap};
/// use crossterm::event::KeyCode;
/// use lipgloss_extras::lipgloss;
///
/// struct Keys {
///     next: Binding,
///     quit: Binding,
/// }
///
/// impl KeyMap for Keys {
///     fn short_help(&self) -> Vec<&Binding> {
///         vec![&self.next, &self.quit]
///     }
///     fn full_help(&self) -> Vec<Vec<&Binding>> {
///         vec![vec![&self.next], vec![&self.quit]]
///     }
/// }
///
/// let keys = Keys {
///     next: Binding::new(vec![KeyCode::Right]).with_help("→", "next page"),
///     quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
/// };
/// let help = Model::new();
/// assert_eq!(lipgloss::strip_ansi(&help.view(&keys)), "→ next page • q quit");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full multi-column view instead of the short line.
    pub show_all: bool,
    /// Maximum width of the short view; 0 means unlimited.
    pub width: usize,
    /// Separator between short-view items.
    pub short_separator: String,
    /// Separator between full-view columns.
    pub full_separator: String,
    /// Marker appended when the short view is truncated.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line separated by bullets.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut builder = String::new();
        let mut total_width = 0;

        for kb in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders groups of bindings as aligned columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let columns: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| self.render_column(group))
            .filter(|column| !column.is_empty())
            .collect();

        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .map(|c| c.iter().map(|l| lipgloss::width_visible(l)).max().unwrap_or(0))
            .collect();
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            // Columns past the last one with an entry on this row add nothing.
            let last = columns.iter().rposition(|c| row < c.len()).unwrap_or(0);
            let mut line = String::new();
            for (i, column) in columns.iter().enumerate().take(last + 1) {
                if i > 0 {
                    line.push_str(&separator);
                }
                let cell = column.get(row).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                if i < last {
                    let pad = widths[i].saturating_sub(lipgloss::width_visible(cell));
                    line.push_str(&" ".repeat(pad));
                }
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_column(&self, group: Vec<&Binding>) -> Vec<String> {
        let enabled: Vec<&Binding> = group.into_iter().filter(|b| b.enabled()).collect();
        let key_width = enabled
            .iter()
            .map(|b| lipgloss::width_visible(&b.help().key))
            .max()
            .unwrap_or(0);

        enabled
            .iter()
            .map(|b| {
                let help = b.help();
                let pad = key_width.saturating_sub(lipgloss::width_visible(&help.key));
                format!(
                    "{}{} {}",
                    self.styles.full_key.clone().inline(true).render(&help.key),
                    " ".repeat(pad),
                    self.styles.full_desc.clone().inline(true).render(&help.desc)
                )
            })
            .collect()
    }

    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some(String::new());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{new_binding, with_disabled, with_help, with_keys_str};

    struct TestKeys {
        prev: Binding,
        next: Binding,
        search: Binding,
        hidden: Binding,
    }

    impl TestKeys {
        fn new() -> Self {
            Self {
                prev: new_binding(vec![with_keys_str(&["left"]), with_help("←", "prev page")]),
                next: new_binding(vec![with_keys_str(&["right"]), with_help("→", "next page")]),
                search: new_binding(vec![with_keys_str(&["/"]), with_help("/", "search")]),
                hidden: new_binding(vec![
                    with_keys_str(&["x"]),
                    with_help("x", "hidden"),
                    with_disabled(),
                ]),
            }
        }
    }

    impl KeyMap for TestKeys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.prev, &self.hidden, &self.next, &self.search]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.prev, &self.next], vec![&self.search, &self.hidden]]
        }
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let view = Model::new().view(&TestKeys::new());
        assert_eq!(
            lipgloss::strip_ansi(&view),
            "← prev page • → next page • / search"
        );
    }

    #[test]
    fn test_short_view_truncates() {
        let view = Model::new().with_width(20).view(&TestKeys::new());
        let plain = lipgloss::strip_ansi(&view);
        assert_eq!(plain, "← prev page …");
        assert!(lipgloss::width_visible(&plain) <= 20);
    }

    #[test]
    fn test_full_view_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = lipgloss::strip_ansi(&help.view(&TestKeys::new()));
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "← prev page    / search");
        assert_eq!(lines[1], "→ next page");
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(Vec::new()), "");
        assert_eq!(help.full_help_view(Vec::new()), "");
    }
}
