//! Logger setup.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;

/// Install a global logger writing to `path`, or to stderr when `None`.
pub fn init(level: LevelFilter, path: Option<&Path>) -> Result<(), CliError> {
    let result = match path {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?),
        None => WriteLogger::init(level, Config::default(), std::io::stderr()),
    };
    result.map_err(|e| CliError::Logger(e.to_string()))
}
