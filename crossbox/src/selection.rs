//! Selection-set storage for across-page table selection.
//!
//! The set holds row snapshots, never references into the provider's data,
//! so it survives page changes and refetches. Membership is decided by the
//! configured [`RowKey`], which keeps the set free of duplicate identities.

use std::collections::HashMap;

use crate::record::Row;
use crate::row_key::{RowIdentity, RowKey};
use crate::status::Representation;

/// Collection of unique row snapshots plus its representation.
///
/// In [`Representation::Inclusive`] the rows are the selection; in
/// [`Representation::Exclusive`] they are the rows excluded from an
/// otherwise full selection.
///
/// Rows are indexed by identity, so membership tests stay constant-time when
/// the set holds every row of a large source.
#[derive(Debug, Clone)]
pub struct SelectionSet<R> {
    key: RowKey,
    rows: Vec<R>,
    /// Identity of each stored row mapped to its index in `rows`.
    index: HashMap<RowIdentity, usize>,
    representation: Representation,
}

impl<R: Row + Clone> SelectionSet<R> {
    /// Create an empty inclusive set.
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            rows: Vec::new(),
            index: HashMap::new(),
            representation: Representation::Inclusive,
        }
    }

    /// The key used for membership tests.
    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// Get the stored row snapshots.
    ///
    /// Rows keep insertion order until one is removed; removal moves the last
    /// row into the gap.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Get the number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How the stored rows relate to the selection.
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Check if a row with the same identity is stored.
    pub fn contains<Q: Row + ?Sized>(&self, row: &Q) -> bool {
        self.index.contains_key(&self.key.identity(row))
    }

    /// Store a snapshot of `row`. Returns `false` if it was already stored.
    pub fn insert(&mut self, row: &R) -> bool {
        let identity = self.key.identity(row);
        if self.index.contains_key(&identity) {
            return false;
        }
        self.index.insert(identity, self.rows.len());
        self.rows.push(row.clone());
        true
    }

    /// Drop the stored row matching `row`. Returns `false` if none matched.
    pub fn remove<Q: Row + ?Sized>(&mut self, row: &Q) -> bool {
        let Some(position) = self.index.remove(&self.key.identity(row)) else {
            return false;
        };
        self.rows.swap_remove(position);
        if let Some(moved) = self.rows.get(position) {
            self.index.insert(self.key.identity(moved), position);
        }
        true
    }

    /// Keep only the stored rows for which `keep` returns `true`.
    /// Returns how many rows were dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&R) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(keep);
        if self.rows.len() != before {
            self.reindex();
        }
        before - self.rows.len()
    }

    /// Replace the content with snapshots of `rows` in inclusive mode.
    ///
    /// Rows sharing an identity are stored once.
    pub fn replace_with<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        self.rows.clear();
        self.index.clear();
        self.representation = Representation::Inclusive;
        for row in rows {
            self.insert(row);
        }
    }

    /// Switch to complement mode with no exclusions, meaning "everything".
    pub fn invert_all(&mut self) {
        self.rows.clear();
        self.index.clear();
        self.representation = Representation::Exclusive;
    }

    /// Empty the set and return to inclusive mode.
    /// Returns the rows that were stored.
    pub fn clear(&mut self) -> Vec<R> {
        self.representation = Representation::Inclusive;
        self.index.clear();
        std::mem::take(&mut self.rows)
    }

    /// Check whether `row` counts as selected under the current representation.
    pub fn is_selected<Q: Row + ?Sized>(&self, row: &Q) -> bool {
        match self.representation {
            Representation::Inclusive => self.contains(row),
            Representation::Exclusive => !self.contains(row),
        }
    }

    /// Compare stored content with another set, ignoring order.
    pub fn same_rows(&self, other: &Self) -> bool {
        self.representation == other.representation
            && self.rows.len() == other.rows.len()
            && self.rows.iter().all(|row| other.contains(row))
    }

    fn reindex(&mut self) {
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (self.key.identity(row), i))
            .collect();
    }
}
