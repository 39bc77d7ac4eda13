//! Row identity resolution.
//!
//! Two rows are the same row iff every configured key field holds strictly
//! equal values in both. Selection sets store row snapshots, so identity is
//! the only link between a stored snapshot and a freshly fetched row.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::SelectionError;
use crate::record::Row;
use crate::value::Value;

/// Key fields used when none are configured.
pub const DEFAULT_ROW_KEY: [&str; 2] = ["name", "id"];

/// The resolved identity of a row: one entry per key field, in key order.
///
/// A missing field resolves to `None`, so rows that all lack a key field
/// compare equal on it. Identities hash, so large selections look rows up
/// by identity instead of scanning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowIdentity(Vec<Option<Value>>);

impl RowIdentity {
    /// The per-field values, in key order.
    pub fn values(&self) -> &[Option<Value>] {
        &self.0
    }
}

impl std::fmt::Display for RowIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{}", v)?,
                None => write!(f, "<missing>")?,
            }
        }
        write!(f, ")")
    }
}

/// Ordered list of fields that identify a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey {
    fields: Vec<String>,
}

impl Default for RowKey {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_KEY)
    }
}

impl RowKey {
    /// Create a key from field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The key fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Resolve the identity of a row.
    pub fn identity<R: Row + ?Sized>(&self, row: &R) -> RowIdentity {
        RowIdentity(self.fields.iter().map(|f| row.field(f)).collect())
    }

    /// Check whether two rows are the same row.
    pub fn equals<A: Row + ?Sized, B: Row + ?Sized>(&self, a: &A, b: &B) -> bool {
        self.fields.iter().all(|f| a.field(f) == b.field(f))
    }

    /// Find the index of `row` inside `rows` with a linear scan.
    ///
    /// Meant for page-sized slices; [`SelectionSet`](crate::SelectionSet)
    /// keeps a hash index for whole-source selections.
    pub fn position<R: Row, Q: Row + ?Sized>(&self, rows: &[R], row: &Q) -> Option<usize> {
        let identity = self.identity(row);
        rows.iter().position(|item| {
            self.fields
                .iter()
                .zip(identity.values())
                .all(|(field, value)| item.field(field).as_ref() == value.as_ref())
        })
    }

    /// Find the first pair of rows that share an identity.
    ///
    /// Returns `(first, second)` indices with `first < second`.
    pub fn find_duplicate<R: Row>(&self, rows: &[R]) -> Option<(usize, usize)> {
        let mut seen: HashMap<RowIdentity, usize> = HashMap::with_capacity(rows.len());
        for (second, row) in rows.iter().enumerate() {
            if let Some(first) = seen.insert(self.identity(row), second) {
                return Some((first, second));
            }
        }
        None
    }

    /// Check that no two rows of a page share an identity.
    pub fn validate_page<R: Row>(&self, rows: &[R]) -> Result<(), SelectionError> {
        match self.find_duplicate(rows) {
            Some((first, second)) => Err(SelectionError::DuplicateRowKey {
                first,
                second,
                identity: self.identity(&rows[second]),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn pod(name: &str, id: i64) -> Record {
        Record::new().set("name", name).set("id", id)
    }

    #[test]
    fn test_default_key_uses_name_and_id() {
        let key = RowKey::default();
        assert_eq!(key.fields(), ["name", "id"]);
        assert!(key.equals(&pod("a", 1), &pod("a", 1).set("phase", "Running")));
        assert!(!key.equals(&pod("a", 1), &pod("a", 2)));
        assert!(!key.equals(&pod("a", 1), &pod("b", 1)));
    }

    #[test]
    fn test_missing_fields_compare_equal() {
        let key = RowKey::new(["uid"]);
        assert!(key.equals(&pod("a", 1), &pod("b", 2)));
    }

    #[test]
    fn test_position() {
        let key = RowKey::new(["id"]);
        let rows = vec![pod("a", 1), pod("b", 2), pod("c", 3)];
        assert_eq!(key.position(&rows, &pod("other", 2)), Some(1));
        assert_eq!(key.position(&rows, &pod("a", 9)), None);
    }

    #[test]
    fn test_find_duplicate() {
        let key = RowKey::default();
        let rows = vec![pod("a", 1), pod("b", 2), pod("a", 1)];
        assert_eq!(key.find_duplicate(&rows), Some((0, 2)));
        assert_eq!(key.find_duplicate(&rows[..2]), None);
    }

    #[test]
    fn test_validate_page_reports_identity() {
        let key = RowKey::new(["name"]);
        let rows = vec![pod("a", 1), pod("a", 2)];
        let err = key.validate_page(&rows).unwrap_err();
        assert!(err.to_string().contains("\"a\""));
        assert!(matches!(
            err,
            SelectionError::DuplicateRowKey {
                first: 0,
                second: 1,
                ..
            }
        ));
    }
}
