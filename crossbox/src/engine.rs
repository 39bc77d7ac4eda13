//! Across-page selection engine.
//!
//! One engine serves one paginated table. It owns the selection set and the
//! header status and keeps them consistent across three kinds of input:
//!
//! - bulk requests from the header or banner ([`AcrossCheck::set_mode`])
//! - per-row checkbox toggles ([`AcrossCheck::toggle_row`])
//! - new data from the provider ([`AcrossCheck::set_page`],
//!   [`AcrossCheck::set_source`])
//!
//! Every operation is synchronous and total: it mutates local state and
//! recomputes the status before returning.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::config::SelectionConfig;
use crate::presentation::{Banner, BannerAction, HeaderControl};
use crate::record::Row;
use crate::row_key::RowIdentity;
use crate::selection::SelectionSet;
use crate::source::DataSource;
use crate::status::{self, CheckMode, CheckStatus, Counts, Representation};

/// The rows a bulk backend action should operate on.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionSnapshot<R> {
    /// Nothing selected.
    Empty,
    /// These rows, and only these.
    Rows(Vec<R>),
    /// Every row of the source except `excluded`; the source cannot list them.
    AllExcept {
        total: usize,
        excluded: Vec<R>,
    },
}

impl<R> SelectionSnapshot<R> {
    /// Number of selected rows the snapshot stands for.
    pub fn count(&self) -> usize {
        match self {
            SelectionSnapshot::Empty => 0,
            SelectionSnapshot::Rows(rows) => rows.len(),
            SelectionSnapshot::AllExcept { total, excluded } => {
                total.saturating_sub(excluded.len())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Selection state machine for a paginated table.
///
/// Generic over the row type and the [`DataSource`] shape. Use
/// [`Hybrid`](crate::Hybrid) when the source may switch between a count and
/// a row list at runtime.
///
/// # Example
///
/// ```
/// use crossbox::{AcrossCheck, CheckMode, CheckStatus, Materialized, Record, SelectionConfig};
///
/// let rows: Vec<Record> = (0..25).map(|i| Record::new().set("id", i as i64)).collect();
/// let page = rows[..10].to_vec();
///
/// let mut engine = AcrossCheck::new(
///     SelectionConfig::new().with_row_key(["id"]),
///     Materialized::new(rows.clone()),
/// )
/// .with_page(page);
///
/// engine.set_mode(CheckMode::Checked);
/// assert_eq!(engine.status(), CheckStatus::Checked);
///
/// engine.toggle_row(&rows[3], false);
/// assert_eq!(engine.status(), CheckStatus::HalfChecked);
/// assert_eq!(engine.selected_count(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct AcrossCheck<R, D> {
    config: SelectionConfig,
    source: D,
    page: Vec<R>,
    selection: SelectionSet<R>,
    status: CheckStatus,
}

impl<R, D> AcrossCheck<R, D>
where
    R: Row + Clone,
    D: DataSource<R>,
{
    /// Create an engine with an empty page and nothing selected.
    pub fn new(config: SelectionConfig, source: D) -> Self {
        let selection = SelectionSet::new(config.row_key.clone());
        Self {
            config,
            source,
            page: Vec::new(),
            selection,
            status: CheckStatus::Unchecked,
        }
    }

    /// Set the initial page (builder pattern).
    pub fn with_page(mut self, rows: Vec<R>) -> Self {
        self.set_page(rows);
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> &[R] {
        &self.page
    }

    /// The raw selection set. In complement mode it holds the exclusions.
    pub fn selection(&self) -> &SelectionSet<R> {
        &self.selection
    }

    pub fn representation(&self) -> Representation {
        self.selection.representation()
    }

    /// Whether the selection set holds exclusions rather than inclusions.
    pub fn is_complement_mode(&self) -> bool {
        self.representation() == Representation::Exclusive
    }

    /// Selectable rows across all pages, as the source reports it now.
    pub fn total_size(&self) -> usize {
        self.source.total_size()
    }

    /// Number of rows the user has selected.
    ///
    /// A cross-page selection never counts more rows than the source reports.
    pub fn selected_count(&self) -> usize {
        let stored = self.selection.len();
        match self.representation() {
            Representation::Inclusive if self.status.is_across() => stored.min(self.total_size()),
            Representation::Inclusive => stored,
            Representation::Exclusive => self.total_size().saturating_sub(stored),
        }
    }

    /// Whether a row's checkbox should render as checked.
    pub fn is_row_selected<Q: Row + ?Sized>(&self, row: &Q) -> bool {
        self.selection.is_selected(row)
    }

    /// Resolve the selection into something a bulk action can consume.
    pub fn snapshot(&self) -> SelectionSnapshot<R> {
        if self.selected_count() == 0 {
            return SelectionSnapshot::Empty;
        }
        match self.representation() {
            Representation::Inclusive => SelectionSnapshot::Rows(self.selection.rows().to_vec()),
            Representation::Exclusive => match self.source.all_rows_if_available() {
                Some(all) => SelectionSnapshot::Rows(
                    all.iter()
                        .filter(|row| !self.selection.contains(*row))
                        .cloned()
                        .collect(),
                ),
                None => SelectionSnapshot::AllExcept {
                    total: self.total_size(),
                    excluded: self.selection.rows().to_vec(),
                },
            },
        }
    }

    // -------------------------------------------------------------------------
    // Bulk requests
    // -------------------------------------------------------------------------

    /// Apply a header or banner request.
    pub fn set_mode(&mut self, mode: CheckMode) {
        let prev = self.status;
        match mode {
            CheckMode::Unchecked => {
                self.selection.clear();
            }
            CheckMode::Checked => {
                self.selection.replace_with(&self.page);
            }
            CheckMode::AcrossChecked => {
                if !self.config.show_cross_page_option {
                    warn!("ignoring select-across request: cross-page option is disabled");
                    return;
                }
                self.source
                    .select_all(&mut self.selection, self.config.default_cross_page_mode);
            }
        }
        self.status = CheckStatus::from(mode);
        self.refresh_status();
        debug!("set_mode {:?}: {} -> {}", mode, prev, self.status);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.set_mode(CheckMode::Unchecked);
    }

    /// Select every row of the current page, replacing the selection.
    pub fn select_current_page(&mut self) {
        self.set_mode(CheckMode::Checked);
    }

    /// Select every row across all pages.
    pub fn select_all(&mut self) {
        self.set_mode(CheckMode::AcrossChecked);
    }

    /// Apply a banner gesture.
    pub fn dispatch(&mut self, action: BannerAction) {
        self.set_mode(action.into());
    }

    // -------------------------------------------------------------------------
    // Row toggles
    // -------------------------------------------------------------------------

    /// Apply a row checkbox change. Returns whether the selection set changed.
    ///
    /// The row is not checked against the page or the source.
    pub fn toggle_row(&mut self, row: &R, checked: bool) -> bool {
        let prev = self.status;
        let changed = self.apply_toggle(row, checked);
        self.refresh_status();
        if changed {
            debug!(
                "toggle_row checked={}: {} -> {} ({} stored)",
                checked,
                prev,
                self.status,
                self.selection.len()
            );
        }
        changed
    }

    /// Apply the same change to several rows, recomputing once.
    /// Returns how many rows changed the set.
    pub fn toggle_rows<'a, I>(&mut self, rows: I, checked: bool) -> usize
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let prev = self.status;
        let changed = rows
            .into_iter()
            .filter(|row| self.apply_toggle(row, checked))
            .count();
        self.refresh_status();
        debug!(
            "toggle_rows checked={}: {} rows changed, {} -> {}",
            checked, changed, prev, self.status
        );
        changed
    }

    fn apply_toggle(&mut self, row: &R, checked: bool) -> bool {
        let changed = match (self.representation(), checked) {
            (Representation::Inclusive, true) | (Representation::Exclusive, false) => {
                self.selection.insert(row)
            }
            (Representation::Inclusive, false) | (Representation::Exclusive, true) => {
                self.selection.remove(row)
            }
        };
        trace!(
            "{:?} toggle checked={} identity={} changed={}",
            self.representation(),
            checked,
            self.selection.key().identity(row),
            changed
        );
        changed
    }

    // -------------------------------------------------------------------------
    // Provider inputs
    // -------------------------------------------------------------------------

    /// Install the rows of the page now being shown.
    pub fn set_page(&mut self, rows: Vec<R>) {
        if let Some((first, second)) = self.selection.key().find_duplicate(&rows) {
            warn!(
                "page rows {} and {} share the identity {}; check the row key {:?}",
                first,
                second,
                self.selection.key().identity(&rows[second]),
                self.config.row_key.fields()
            );
        }
        self.page = rows;
        self.on_page_or_total_changed();
    }

    /// Replace the data source.
    pub fn set_source(&mut self, source: D) {
        self.source = source;
        self.on_page_or_total_changed();
    }

    /// Mutate the data source in place, then recompute.
    pub fn update_source<F>(&mut self, f: F)
    where
        F: FnOnce(&mut D),
    {
        f(&mut self.source);
        self.on_page_or_total_changed();
    }

    /// Recompute the status against the current page and total.
    ///
    /// Call after changing inputs through any path the engine cannot see.
    pub fn on_page_or_total_changed(&mut self) {
        let prev = self.status;
        self.drop_vanished_rows();
        self.refresh_status();
        if prev != self.status {
            debug!(
                "inputs changed (page {}, total {}): {} -> {}",
                self.page.len(),
                self.total_size(),
                prev,
                self.status
            );
        }
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// View model for the header checkbox.
    pub fn header(&self) -> HeaderControl {
        HeaderControl {
            status: self.status,
            disabled: self.total_size() == 0,
            show_cross_page_option: self.config.show_cross_page_option,
        }
    }

    /// View model for the "N of M selected" banner.
    pub fn banner(&self) -> Banner {
        Banner {
            selected_count: self.selected_count(),
            total_count: self.total_size(),
            status: self.status,
            is_full_data_mode: self.source.is_full_data(),
            cross_page_enabled: self.config.show_cross_page_option,
        }
    }

    /// Forget stored rows the source no longer holds.
    ///
    /// Applies to cross-page selections and exclusions, which are relative to
    /// the whole source. Page-local picks are left alone, and so is every
    /// source that cannot list its rows.
    fn drop_vanished_rows(&mut self) {
        if self.selection.is_empty() || !(self.status.is_across() || self.is_complement_mode()) {
            return;
        }
        let Some(all) = self.source.all_rows_if_available() else {
            return;
        };
        let key = self.selection.key().clone();
        let present: HashSet<RowIdentity> = all.iter().map(|row| key.identity(row)).collect();
        let dropped = self
            .selection
            .retain(|row| present.contains(&key.identity(row)));
        if dropped > 0 {
            debug!(
                "dropped {} stored rows missing from the source ({:?})",
                dropped,
                self.representation()
            );
        }
    }

    fn counts(&self) -> Counts {
        Counts::new(self.selection.len(), self.page.len(), self.total_size())
    }

    fn refresh_status(&mut self) {
        self.status = status::recompute(self.status, self.counts(), self.representation());
    }
}
