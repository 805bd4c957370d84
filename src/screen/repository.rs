//! Record storage behind a record screen.

use super::filtering::{filter_records_with, FilterMode};
use super::record::Record;
use crate::error::{Error, Result};
use tracing::debug;

/// Storage for the records of one screen.
///
/// The screen only talks to this trait, so an in-memory list and a real
/// backend are interchangeable.
pub trait Repository<R: Record> {
    /// Records matching the search term, in display order. An empty term
    /// returns every record.
    ///
    /// How the term matches is up to the implementation.
    /// [`InMemoryRepository`] matches fuzzily by default, which is looser
    /// than a substring search; see [`FilterMode`].
    fn list(&self, filter: &str) -> Vec<R>;

    /// The record with the given id.
    fn get(&self, id: &str) -> Option<R>;

    /// Adds a record.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateRecord`] if the id is taken.
    fn create(&mut self, record: R) -> Result<()>;

    /// Replaces the record stored under `id`. The new record may carry a
    /// different id.
    ///
    /// # Errors
    ///
    /// [`Error::RecordNotFound`] if `id` is unknown, [`Error::DuplicateRecord`]
    /// if the new id belongs to another record.
    fn update(&mut self, id: &str, record: R) -> Result<()>;

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    ///
    /// [`Error::RecordNotFound`] if `id` is unknown.
    fn delete(&mut self, id: &str) -> Result<R>;

    /// Total number of stored records.
    fn len(&self) -> usize;

    /// True when no records are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A repository over a `Vec`, in insertion order.
///
/// # Examples
///
/// ```
/// # use bubbletea_paginate::screen::{InMemoryRepository, Record, Repository};
/// # #[derive(Clone, Debug, PartialEq)]
/// # struct R(String);
/// # impl std::fmt::Display for R {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
/// # }
/// # impl Record for R {
/// #     fn id(&self) -> String { self.0.clone() }
/// #     fn filter_value(&self) -> String { self.0.clone() }
/// #     fn cells(&self) -> Vec<String> { vec![self.0.clone()] }
/// # }
/// let mut repo = InMemoryRepository::new(vec![R("T-1".into())]);
/// repo.create(R("T-2".into())).unwrap();
/// assert!(repo.create(R("T-2".into())).is_err());
/// assert_eq!(repo.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<R> {
    records: Vec<R>,
    filter_mode: FilterMode,
}

impl<R: Record> InMemoryRepository<R> {
    /// Creates a repository holding `records`.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            filter_mode: FilterMode::default(),
        }
    }

    /// Sets how [`Repository::list`] matches the search term.
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// The current filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// All records, in order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<R: Record> Repository<R> for InMemoryRepository<R> {
    fn list(&self, filter: &str) -> Vec<R> {
        filter_records_with(&self.records, filter, self.filter_mode)
    }

    fn get(&self, id: &str) -> Option<R> {
        self.position(id).map(|i| self.records[i].clone())
    }

    fn create(&mut self, record: R) -> Result<()> {
        let id = record.id();
        if self.position(&id).is_some() {
            return Err(Error::DuplicateRecord { id });
        }
        debug!(id = %id, "record created");
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, id: &str, record: R) -> Result<()> {
        let index = self.position(id).ok_or_else(|| Error::RecordNotFound { id: id.to_string() })?;
        let new_id = record.id();
        if new_id != id && self.position(&new_id).is_some() {
            return Err(Error::DuplicateRecord { id: new_id });
        }
        debug!(id = %id, new_id = %new_id, "record updated");
        self.records[index] = record;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<R> {
        let index = self.position(id).ok_or_else(|| Error::RecordNotFound { id: id.to_string() })?;
        debug!(id = %id, "record deleted");
        Ok(self.records.remove(index))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
