//! Row model: the `Row` trait and a dynamic `Record`

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::value::Value;

/// A table row the selection engine can identify.
///
/// The engine never inspects rows beyond reading their key fields through
/// this trait, and never mutates them.
pub trait Row {
    /// Returns the value of a field, or `None` when the row has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

/// A dynamic table row.
///
/// Records hold field values as a `HashMap<String, Value>` and deserialize
/// from a flat JSON object, which is the shape backend list endpoints return.
///
/// # Example
///
/// ```
/// use crossbox::{Record, Row, Value};
///
/// let record = Record::new()
///     .set("name", "nginx-7f9c")
///     .set("id", 12i64);
///
/// assert_eq!(record.field("name"), Some(Value::from("nginx-7f9c")));
/// assert_eq!(record.field("namespace"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record has the field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Row for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl Row for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(Value::from_json)
    }
}

impl Row for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json_object() {
        let record: Record =
            serde_json::from_str(r#"{"name": "redis", "id": 4, "ready": true}"#).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.field("id"), Some(Value::Int(4)));
        assert_eq!(record.field("ready"), Some(Value::Bool(true)));
    }

    #[test]
    fn test_json_value_row() {
        let row = serde_json::json!({"name": "etcd", "labels": {"tier": "control"}});
        assert_eq!(row.field("name"), Some(Value::from("etcd")));
        assert_eq!(row.field("labels"), None);
        assert_eq!(row.field("id"), None);
    }
}
