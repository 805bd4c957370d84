//! Error types shared by the pagination core and the record screen.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by pagination and record-screen operations.
///
/// Configuration errors (`InvalidPageSize`, `InvalidWindowSize`) are
/// programmer errors and are reported at the point of computation instead
/// of being replaced by a default. Out-of-range navigation is never an
/// error; it is clamped by [`crate::controller::Controller`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The page size was zero.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// The visible window is too narrow to hold the first, current and last pages.
    #[error("visible window must hold at least 3 pages, got {max_visible}")]
    InvalidWindowSize {
        /// Requested window size
        max_visible: usize,
    },

    /// No record with the given id exists in the repository.
    #[error("record not found: {id}")]
    RecordNotFound {
        /// Record id
        id: String,
    },

    /// A record with the given id already exists in the repository.
    #[error("record already exists: {id}")]
    DuplicateRecord {
        /// Record id
        id: String,
    },

    /// The submitted record left required fields empty.
    #[error("required fields are empty: {}", fields.join(", "))]
    MissingRequiredFields {
        /// Names of the empty fields
        fields: Vec<String>,
    },

    /// A record was submitted while no create or edit form was open.
    #[error("no create or edit form is open")]
    NoActiveForm,
}
