//! Source that only knows how many rows exist.

use log::trace;

use crate::record::Row;
use crate::selection::SelectionSet;

use super::{CrossPageDefault, DataSource};

/// A total count of selectable rows; the rows themselves are never loaded.
///
/// Selecting everything cannot list every row, so it always switches the set
/// to complement mode, whatever [`CrossPageDefault`] says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counted {
    count: usize,
}

impl Counted {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Get the count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the count.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }
}

impl<R: Row + Clone> DataSource<R> for Counted {
    fn total_size(&self) -> usize {
        self.count
    }

    fn select_all(&self, set: &mut SelectionSet<R>, _default: CrossPageDefault) {
        trace!(
            "counted select-all over {} rows: complement mode",
            self.count
        );
        set.invert_all();
    }

    fn all_rows_if_available(&self) -> Option<&[R]> {
        None
    }
}

impl From<usize> for Counted {
    fn from(count: usize) -> Self {
        Self::new(count)
    }
}
