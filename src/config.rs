//! Paginator configuration.
//!
//! Every record screen is configured with a fixed page size and a fixed
//! window width. [`PaginatorConfig`] carries those values together with the
//! display style of the paginator, using the same builder methods the
//! widgets use.

use crate::window::DEFAULT_MAX_VISIBLE;

/// Default number of records shown on one page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// How the paginator renders its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Type {
    /// Page numbers with ellipses, e.g. `‹ 1 … 4 5 6 … 10 ›`.
    #[default]
    Window,
    /// Current and total page as Arabic numerals, e.g. `5/10`.
    Arabic,
}

/// Settings shared by [`crate::controller::Controller`] and
/// [`crate::paginator::Model`].
///
/// Values are validated when a controller is built from the config, not
/// here, so a config can be deserialized or assembled freely.
///
/// # Examples
///
/// ```rust
/// use bubbletea_paginate::config::{PaginatorConfig, Type};
///
/// let config = PaginatorConfig::default()
///     .with_page_size(10)
///     .with_type(Type::Arabic);
///
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.max_visible, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginatorConfig {
    /// Records per page.
    pub page_size: usize,
    /// Contiguous page numbers shown in the window.
    pub max_visible: usize,
    /// Display style.
    pub paginator_type: Type,
    /// Format string for [`Type::Arabic`]; the two `%d` are replaced by the
    /// current and total page.
    pub arabic_format: String,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible: DEFAULT_MAX_VISIBLE,
            paginator_type: Type::default(),
            arabic_format: "%d/%d".to_string(),
        }
    }
}

impl PaginatorConfig {
    /// Sets the page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the window width (builder pattern).
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Sets the display style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the Arabic format string (builder pattern).
    pub fn with_arabic_format(mut self, format: &str) -> Self {
        self.arabic_format = format.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.max_visible, 3);
        assert_eq!(config.paginator_type, Type::Window);
        assert_eq!(config.arabic_format, "%d/%d");
    }

    #[test]
    fn test_builders() {
        let config = PaginatorConfig::default()
            .with_page_size(10)
            .with_max_visible(5)
            .with_type(Type::Arabic)
            .with_arabic_format("page %d of %d");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible, 5);
        assert_eq!(config.paginator_type, Type::Arabic);
        assert_eq!(config.arabic_format, "page %d of %d");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: PaginatorConfig =
            serde_json::from_str(r#"{"page_size": 10, "paginator_type": "arabic"}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible, 3);
        assert_eq!(config.paginator_type, Type::Arabic);
    }
}
