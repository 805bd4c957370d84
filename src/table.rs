//! Table component for one page of records.
//!
//! The table holds only the rows it is asked to show; the owning screen
//! slices its filtered records with the paginator and passes the current
//! page in via [`Model::set_rows`].

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// A table column.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Fixed width; when `None` the column fits its widest cell.
    pub width: Option<usize>,
}

impl Column {
    /// Creates a column that fits its content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
        }
    }

    /// Sets a fixed width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell texts, one per column.
    pub cells: Vec<String>,
}

impl Row {
    /// Creates a row.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// Styles for the table.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header row.
    pub header: Style,
    /// The selected row.
    pub selected: Style,
    /// The message shown when there are no rows.
    pub empty: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            selected: Style::new().foreground(Color::from("212")),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

/// Table state.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::table::{Column, Model, Row};
/// use lipgloss_extras::lipgloss;
///
/// let table = Model::new(vec![Column::new("ID"), Column::new("Location")])
///     .with_rows(vec![
///         Row::new(vec!["T-1".into(), "North yard".into()]),
///         Row::new(vec!["T-22".into(), "Substation 4".into()]),
///     ]);
///
/// let view = lipgloss::strip_ansi(&table.view());
/// assert_eq!(
///     view,
///     "  ID   | Location    \n  -----+-------------\n> T-1  | North yard  \n  T-22 | Substation 4"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    columns: Vec<Column>,
    rows: Vec<Row>,
    selected: usize,
    /// Text shown when there are no rows.
    pub empty_message: String,
    /// Styles.
    pub styles: Styles,
}

impl Model {
    /// Creates a table with the given columns and no rows.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            selected: 0,
            empty_message: "No records.".to_string(),
            styles: Styles::default(),
        }
    }

    /// Sets the rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replaces the rows, keeping the selection in range.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// The columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the selected row within the current rows.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected row, if any.
    pub fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected)
    }

    /// Selects the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Selects the next row, wrapping around.
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    /// Selects the previous row, wrapping around.
    pub fn select_prev(&mut self) {
        if !self.rows.is_empty() {
            self.selected = if self.selected == 0 {
                self.rows.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                column.width.unwrap_or_else(|| {
                    self.rows
                        .iter()
                        .filter_map(|row| row.cells.get(i))
                        .map(|cell| lipgloss::width_visible(cell))
                        .chain(std::iter::once(lipgloss::width_visible(&column.title)))
                        .max()
                        .unwrap_or(0)
                })
            })
            .collect()
    }

    fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, (cell, width)) in cells.zip(widths).enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            line.push_str(&fit(cell, *width));
        }
        line
    }

    /// Renders the header, a separator and the rows. The selected row is
    /// marked with `>`.
    pub fn view(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header = Self::render_line(self.columns.iter().map(|c| c.title.as_str()), &widths);
        lines.push(format!("  {}", self.styles.header.clone().inline(true).render(&header)));

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(format!("  {}", separator.join("-+-")));

        if self.rows.is_empty() {
            lines.push(format!(
                "  {}",
                self.styles
                    .empty
                    .clone()
                    .inline(true)
                    .render(&self.empty_message)
            ));
            return lines.join("\n");
        }

        for (index, row) in self.rows.iter().enumerate() {
            let line = Self::render_line(row.cells.iter().map(String::as_str), &widths);
            if index == self.selected {
                lines.push(format!("> {}", self.styles.selected.clone().inline(true).render(&line)));
            } else {
                lines.push(format!("  {}", line));
            }
        }

        lines.join("\n")
    }
}

/// Pads or truncates `cell` to exactly `width` visible columns.
fn fit(cell: &str, width: usize) -> String {
    let visible = lipgloss::width_visible(cell);
    if visible <= width {
        return format!("{}{}", cell, " ".repeat(width - visible));
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in cell.chars() {
        let w = lipgloss::width_visible(&c.to_string());
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    fn table() -> Model {
        Model::new(vec![Column::new("ID"), Column::new("kV").with_width(4)]).with_rows(vec![
            row(&["T-1", "110"]),
            row(&["T-2", "35"]),
            row(&["T-3", "10"]),
        ])
    }

    #[test]
    fn test_selection_wraps() {
        let mut t = table();
        assert_eq!(t.selected_index(), 0);
        t.select_prev();
        assert_eq!(t.selected_index(), 2);
        t.select_next();
        assert_eq!(t.selected_index(), 0);
        t.select_next();
        assert_eq!(t.selected_row(), Some(&row(&["T-2", "35"])));
    }

    #[test]
    fn test_set_rows_clamps_selection() {
        let mut t = table();
        t.select_prev();
        t.set_rows(vec![row(&["T-9", "6"])]);
        assert_eq!(t.selected_index(), 0);
        t.set_rows(Vec::new());
        assert!(t.selected_row().is_none());
    }

    #[test]
    fn test_view_pads_and_marks_selection() {
        let mut t = table();
        t.select_next();
        let view = lipgloss::strip_ansi(&t.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "  ID  | kV  ");
        assert_eq!(lines[1], "  ----+-----");
        assert_eq!(lines[2], "  T-1 | 110 ");
        assert_eq!(lines[3], "> T-2 | 35  ");
    }

    #[test]
    fn test_empty_view() {
        let t = Model::new(vec![Column::new("ID")]);
        let view = lipgloss::strip_ansi(&t.view());
        assert_eq!(view.lines().last(), Some("  No records."));
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Substation", 6), "Subst…");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abc", 0), "");
    }
}
