//! Source backed by every selectable row.

use log::trace;

use crate::record::Row;
use crate::selection::SelectionSet;

use super::{CrossPageDefault, DataSource};

/// All rows across all pages, held in memory.
#[derive(Debug, Clone, Default)]
pub struct Materialized<R> {
    rows: Vec<R>,
}

impl<R> Materialized<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Get all rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace all rows.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Take the rows back out.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R: Row + Clone> DataSource<R> for Materialized<R> {
    fn total_size(&self) -> usize {
        self.rows.len()
    }

    fn select_all(&self, set: &mut SelectionSet<R>, default: CrossPageDefault) {
        select_rows(&self.rows, set, default);
    }

    fn all_rows_if_available(&self) -> Option<&[R]> {
        Some(&self.rows)
    }
}

/// Select-all policy for an in-memory row list.
pub(super) fn select_rows<R: Row + Clone>(
    rows: &[R],
    set: &mut SelectionSet<R>,
    default: CrossPageDefault,
) {
    match default {
        CrossPageDefault::Full => {
            trace!("select-all: storing {} rows", rows.len());
            set.replace_with(rows);
        }
        CrossPageDefault::Empty => {
            trace!("select-all over {} rows: complement mode", rows.len());
            set.invert_all();
        }
    }
}

impl<R> From<Vec<R>> for Materialized<R> {
    fn from(rows: Vec<R>) -> Self {
        Self::new(rows)
    }
}
