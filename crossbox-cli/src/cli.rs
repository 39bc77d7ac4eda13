//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(
    name = "crossbox-replay",
    version,
    about = "Replay a table selection scenario through the across-page selection engine"
)]
pub struct Cli {
    /// Scenario JSON file (use - for stdin).
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Print one JSON object per step instead of a text table.
    #[arg(long)]
    pub json: bool,

    /// Log level.
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevelArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}
