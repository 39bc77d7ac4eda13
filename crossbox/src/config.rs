//! Selection engine configuration.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::row_key::RowKey;
use crate::source::CrossPageDefault;

/// Per-table selection configuration.
///
/// Field names follow the JSON option names table views already use
/// (`rowKey`, `defaultCrossPageMode`, `showCrossPageOption`); missing fields
/// take their defaults.
///
/// # Example
///
/// ```
/// use crossbox::{CrossPageDefault, SelectionConfig};
///
/// let json = r#"{"rowKey": ["uid"], "defaultCrossPageMode": "empty"}"#;
/// let config = SelectionConfig::from_json(json)?;
/// assert_eq!(config.row_key.fields(), ["uid"]);
/// assert_eq!(config.default_cross_page_mode, CrossPageDefault::Empty);
/// assert!(config.show_cross_page_option);
/// # Ok::<(), crossbox::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionConfig {
    /// Fields that identify a row.
    pub row_key: RowKey,

    /// What "select across pages" stores for an in-memory source.
    pub default_cross_page_mode: CrossPageDefault,

    /// Whether the header offers "select across pages" at all.
    /// When false, cross-page requests are ignored.
    pub show_cross_page_option: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            row_key: RowKey::default(),
            default_cross_page_mode: CrossPageDefault::Full,
            show_cross_page_option: true,
        }
    }
}

impl SelectionConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the row key fields.
    pub fn with_row_key<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_key = RowKey::new(fields);
        self
    }

    /// Set the cross-page default.
    pub fn with_cross_page_default(mut self, default: CrossPageDefault) -> Self {
        self.default_cross_page_mode = default;
        self
    }

    /// Hide the cross-page option (page-only selection).
    pub fn page_only(mut self) -> Self {
        self.show_cross_page_option = false;
        self
    }

    /// Check the row key for fields that cannot identify a row.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = self.row_key.fields();
        if fields.is_empty() {
            return Err(ConfigError::EmptyRowKey);
        }
        let mut seen = HashSet::new();
        for (i, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(ConfigError::BlankKeyField(i));
            }
            if !seen.insert(field.as_str()) {
                return Err(ConfigError::DuplicateKeyField(field.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.row_key.fields(), ["name", "id"]);
        assert_eq!(config.default_cross_page_mode, CrossPageDefault::Full);
        assert!(config.show_cross_page_option);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SelectionConfig::from_json(r#"{"showCrossPageOption": false}"#).unwrap();
        assert!(!config.show_cross_page_option);
        assert_eq!(config.row_key, RowKey::default());
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let err = SelectionConfig::from_json(r#"{"rowKey": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRowKey));
    }

    #[test]
    fn test_validate_rejects_blank_and_duplicate_fields() {
        let blank = SelectionConfig::new().with_row_key(["name", " "]);
        assert!(matches!(blank.validate(), Err(ConfigError::BlankKeyField(1))));

        let dup = SelectionConfig::new().with_row_key(["id", "id"]);
        assert!(matches!(
            dup.validate(),
            Err(ConfigError::DuplicateKeyField(field)) if field == "id"
        ));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = SelectionConfig::from_json(r#"{"defaultCrossPageMode": "half"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
