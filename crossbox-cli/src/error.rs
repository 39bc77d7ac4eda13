//! CLI error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] crossbox::ConfigError),

    #[error("step {step}: row {identity} is not part of the table")]
    UnknownRow { step: usize, identity: String },

    #[error("step {step}: page {page} is out of range (1..={pages})")]
    PageOutOfRange {
        step: usize,
        page: usize,
        pages: usize,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(String),
}
