//! Fuzzy search over records.

use super::record::Record;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// How a search term is matched against [`Record::filter_value`].
///
/// Fuzzy matching accepts the term's characters in order with gaps, so
/// `"T-1"` matches `"TR-117 Site 1"`. Substring matching only accepts the
/// term as one contiguous, case-insensitive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Skim-style subsequence matching.
    #[default]
    Fuzzy,
    /// Case-insensitive substring matching.
    Substring,
}

/// Returns the records whose [`Record::filter_value`] fuzzy-matches `term`,
/// in their original order.
///
/// An empty or all-whitespace term matches everything. Matching ignores
/// case.
///
/// # Examples
///
/// ```
/// # use bubbletea_paginate::screen::{filter_records, Record};
/// # #[derive(Clone)]
/// # struct R(&'static str);
/// # impl std::fmt::Display for R {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.0) }
/// # }
/// # impl Record for R {
/// #     fn id(&self) -> String { self.0.to_string() }
/// #     fn filter_value(&self) -> String { self.0.to_string() }
/// #     fn cells(&self) -> Vec<String> { vec![self.0.to_string()] }
/// # }
/// let records = vec![R("Oil test T-104"), R("Insulation T-17"), R("oil test T-9")];
/// let found = filter_records(&records, "OIL");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].0, "oil test T-9");
/// ```
pub fn filter_records<R: Record>(records: &[R], term: &str) -> Vec<R> {
    filter_records_with(records, term, FilterMode::Fuzzy)
}

/// Like [`filter_records`], with an explicit [`FilterMode`].
pub fn filter_records_with<R: Record>(records: &[R], term: &str, mode: FilterMode) -> Vec<R> {
    let term = term.trim();
    if term.is_empty() {
        return records.to_vec();
    }

    match mode {
        FilterMode::Fuzzy => {
            let matcher = SkimMatcherV2::default().ignore_case();
            records
                .iter()
                .filter(|record| matcher.fuzzy_match(&record.filter_value(), term).is_some())
                .cloned()
                .collect()
        }
        FilterMode::Substring => {
            let needle = term.to_lowercase();
            records
                .iter()
                .filter(|record| record.filter_value().to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
    }
}
