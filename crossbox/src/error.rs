//! Error types

use thiserror::Error;

use crate::row_key::RowIdentity;

/// Errors raised while loading or validating a [`SelectionConfig`](crate::SelectionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `rowKey` lists no fields, so every row would share one identity.
    #[error("rowKey must name at least one field")]
    EmptyRowKey,

    /// A `rowKey` entry is empty or whitespace.
    #[error("rowKey field at position {0} is blank")]
    BlankKeyField(usize),

    /// A `rowKey` entry appears twice.
    #[error("rowKey field '{0}' is listed more than once")]
    DuplicateKeyField(String),

    /// The JSON document could not be parsed.
    #[error("invalid selection config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by the optional validation helpers.
///
/// The engine's own operations never fail; these come from explicit checks
/// an integrator opts into.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Two distinct rows of one page resolve to the same identity.
    #[error("rows {first} and {second} share the identity {identity}")]
    DuplicateRowKey {
        /// Index of the first row.
        first: usize,
        /// Index of the row that repeats it.
        second: usize,
        /// The shared identity.
        identity: RowIdentity,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
