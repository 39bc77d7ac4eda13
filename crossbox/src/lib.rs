//! Selection state for paginated tables that can select across pages.
//!
//! A table header checkbox can mean "this page" or "every row on every
//! page". [`AcrossCheck`] tracks which one the user asked for, which rows
//! were toggled since, and what the header and the "N of M selected" banner
//! should show. It works the same whether the table holds every row, only a
//! total count, or switches between the two.

pub mod config;
pub mod engine;
pub mod error;
pub mod presentation;
pub mod record;
pub mod row_key;
pub mod selection;
pub mod source;
pub mod status;
pub mod value;
pub mod widget;

pub use config::SelectionConfig;
pub use engine::{AcrossCheck, SelectionSnapshot};
pub use error::{ConfigError, SelectionError};
pub use presentation::{Banner, BannerAction, BannerPrompt, HeaderControl};
pub use record::{Record, Row};
pub use row_key::{RowIdentity, RowKey};
pub use selection::SelectionSet;
pub use source::{Counted, CrossPageDefault, DataSource, Hybrid, Materialized};
pub use status::{CheckMode, CheckStatus, Representation};
pub use value::Value;
pub use widget::{AcrossCheckId, AcrossCheckState};

pub mod prelude {
    pub use crate::config::SelectionConfig;
    pub use crate::engine::{AcrossCheck, SelectionSnapshot};
    pub use crate::presentation::{BannerAction, BannerPrompt};
    pub use crate::record::{Record, Row};
    pub use crate::source::{Counted, CrossPageDefault, DataSource, Hybrid, Materialized};
    pub use crate::status::{CheckMode, CheckStatus};
    pub use crate::widget::AcrossCheckState;
}
