//! Data-source adapters.
//!
//! A table knows its selectable rows in one of three shapes: every row in
//! memory ([`Materialized`]), only a total count ([`Counted`]), or either one
//! depending on what the last fetch returned ([`Hybrid`]). The engine only
//! talks to the [`DataSource`] trait, so one state machine serves all three.

mod counted;
mod hybrid;
mod materialized;

pub use counted::Counted;
pub use hybrid::Hybrid;
pub use materialized::Materialized;

use serde::Deserialize;
use serde::Serialize;

use crate::record::Row;
use crate::selection::SelectionSet;

/// What "select across all pages" stores when every row is in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossPageDefault {
    /// Store every row as an inclusion.
    #[default]
    Full,
    /// Store nothing and switch to complement mode.
    Empty,
}

/// Shape-independent view of the rows a table can select.
pub trait DataSource<R: Row + Clone> {
    /// Selectable rows across all pages.
    fn total_size(&self) -> usize;

    /// Fill `set` so that it represents "every row selected".
    fn select_all(&self, set: &mut SelectionSet<R>, default: CrossPageDefault);

    /// Every selectable row, when the source holds them.
    fn all_rows_if_available(&self) -> Option<&[R]>;

    /// Whether the full row set is in memory.
    fn is_full_data(&self) -> bool {
        self.all_rows_if_available().is_some()
    }
}
