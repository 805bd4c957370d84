//! Record trait and modal state for record screens.

use std::fmt::Display;

/// A record shown on a record screen.
///
/// Records are identified by a string id, searched through
/// [`Record::filter_value`] and rendered as one table row through
/// [`Record::cells`].
///
/// # Examples
///
/// ```
/// use bubbletea_paginate::screen::Record;
/// use std::fmt;
///
/// #[derive(Clone)]
/// struct OilTest {
///     id: String,
///     transformer: String,
///     breakdown_kv: f32,
/// }
///
/// impl fmt::Display for OilTest {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} ({})", self.id, self.transformer)
///     }
/// }
///
/// impl Record for OilTest {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///     fn filter_value(&self) -> String {
///         format!("{} {}", self.id, self.transformer)
///     }
///     fn cells(&self) -> Vec<String> {
///         vec![self.id.clone(), self.transformer.clone(), format!("{:.1}", self.breakdown_kv)]
///     }
///     fn missing_required_fields(&self) -> Vec<&'static str> {
///         if self.transformer.trim().is_empty() { vec!["transformer"] } else { Vec::new() }
///     }
/// }
/// ```
pub trait Record: Display + Clone {
    /// Unique id of the record.
    fn id(&self) -> String;

    /// Text matched against the search term.
    fn filter_value(&self) -> String;

    /// Table cells, one per screen column.
    fn cells(&self) -> Vec<String>;

    /// Names of required fields that are empty. Submitting a record with
    /// any missing field is rejected.
    fn missing_required_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// What the create/edit/view modal is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalMode {
    /// No modal.
    #[default]
    Closed,
    /// Entering a new record.
    Create,
    /// Editing the record with this id.
    Edit(String),
    /// Viewing the record with this id (read only).
    View(String),
}

impl ModalMode {
    /// True unless the modal is closed.
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalMode::Closed)
    }

    /// The id of the record being edited or viewed.
    pub fn target(&self) -> Option<&str> {
        match self {
            ModalMode::Edit(id) | ModalMode::View(id) => Some(id),
            ModalMode::Closed | ModalMode::Create => None,
        }
    }
}
