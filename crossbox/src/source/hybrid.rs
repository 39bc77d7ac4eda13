//! Source whose shape can change between calls.

use serde::Deserialize;
use serde::Serialize;

use crate::record::Row;
use crate::selection::SelectionSet;

use super::materialized;
use super::{Counted, CrossPageDefault, DataSource, Materialized};

/// Either a row list or a bare count, inspected on every call.
///
/// A table typically starts out with a count from a cheap summary request and
/// switches to rows once a background fetch completes.
///
/// Deserializes from either a JSON number or a JSON array of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hybrid<R> {
    Count(usize),
    Rows(Vec<R>),
}

impl<R> Default for Hybrid<R> {
    fn default() -> Self {
        Hybrid::Count(0)
    }
}

impl<R> Hybrid<R> {
    /// Switch to a row list.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        *self = Hybrid::Rows(rows);
    }

    /// Switch to a bare count.
    pub fn set_count(&mut self, count: usize) {
        *self = Hybrid::Count(count);
    }

    /// Whether the source currently holds rows.
    pub fn is_rows(&self) -> bool {
        matches!(self, Hybrid::Rows(_))
    }
}

impl<R: Row + Clone> DataSource<R> for Hybrid<R> {
    fn total_size(&self) -> usize {
        match self {
            Hybrid::Count(count) => *count,
            Hybrid::Rows(rows) => rows.len(),
        }
    }

    fn select_all(&self, set: &mut SelectionSet<R>, default: CrossPageDefault) {
        match self {
            Hybrid::Count(count) => {
                DataSource::<R>::select_all(&Counted::new(*count), set, default)
            }
            Hybrid::Rows(rows) => materialized::select_rows(rows, set, default),
        }
    }

    fn all_rows_if_available(&self) -> Option<&[R]> {
        match self {
            Hybrid::Count(_) => None,
            Hybrid::Rows(rows) => Some(rows),
        }
    }
}

impl<R> From<Vec<R>> for Hybrid<R> {
    fn from(rows: Vec<R>) -> Self {
        Hybrid::Rows(rows)
    }
}

impl<R> From<usize> for Hybrid<R> {
    fn from(count: usize) -> Self {
        Hybrid::Count(count)
    }
}

impl<R> From<Materialized<R>> for Hybrid<R> {
    fn from(source: Materialized<R>) -> Self {
        Hybrid::Rows(source.into_rows())
    }
}

impl<R> From<Counted> for Hybrid<R> {
    fn from(source: Counted) -> Self {
        Hybrid::Count(source.count())
    }
}
