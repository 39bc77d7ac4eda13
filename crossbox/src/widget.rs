//! Shared selection state for table widgets.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::SelectionConfig;
use crate::engine::{AcrossCheck, SelectionSnapshot};
use crate::presentation::{Banner, BannerAction, HeaderControl};
use crate::record::Row;
use crate::source::DataSource;
use crate::status::{CheckMode, CheckStatus};

/// Unique identifier for an across-check state instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcrossCheckId(usize);

impl AcrossCheckId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for AcrossCheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__across_check_{}", self.0)
    }
}

/// A cloneable handle to one table's selection engine.
///
/// The header checkbox, the banner and every row checkbox of a table hold
/// clones of the same handle. Mutations mark the handle dirty so the
/// renderer knows to redraw.
///
/// # Example
///
/// ```
/// use crossbox::{AcrossCheckState, CheckMode, CheckStatus, Counted, Record, SelectionConfig};
///
/// let state = AcrossCheckState::<Record, _>::new(SelectionConfig::new(), Counted::new(100));
/// let header = state.clone();
///
/// header.set_mode(CheckMode::AcrossChecked);
/// assert!(state.is_dirty());
/// assert_eq!(state.status(), CheckStatus::AcrossChecked);
/// assert_eq!(state.selected_count(), 100);
/// ```
#[derive(Debug)]
pub struct AcrossCheckState<R, D> {
    /// Unique identifier.
    id: AcrossCheckId,
    /// Engine state.
    inner: Arc<RwLock<AcrossCheck<R, D>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R, D> AcrossCheckState<R, D>
where
    R: Row + Clone,
    D: DataSource<R>,
{
    /// Create a new selection state.
    pub fn new(config: SelectionConfig, source: D) -> Self {
        Self::from_engine(AcrossCheck::new(config, source))
    }

    /// Wrap an existing engine.
    pub fn from_engine(engine: AcrossCheck<R, D>) -> Self {
        Self {
            id: AcrossCheckId::new(),
            inner: Arc::new(RwLock::new(engine)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> AcrossCheckId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the header status.
    pub fn status(&self) -> CheckStatus {
        self.inner.read().map(|g| g.status()).unwrap_or_default()
    }

    /// Get the number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.inner.read().map(|g| g.selected_count()).unwrap_or(0)
    }

    /// Get the total selectable rows.
    pub fn total_size(&self) -> usize {
        self.inner.read().map(|g| g.total_size()).unwrap_or(0)
    }

    /// Check if a row renders as selected.
    pub fn is_row_selected(&self, row: &R) -> bool {
        self.inner
            .read()
            .map(|g| g.is_row_selected(row))
            .unwrap_or(false)
    }

    /// Get the header view model.
    pub fn header(&self) -> Option<HeaderControl> {
        self.inner.read().ok().map(|g| g.header())
    }

    /// Get the banner view model.
    pub fn banner(&self) -> Option<Banner> {
        self.inner.read().ok().map(|g| g.banner())
    }

    /// Get the selection resolved for a bulk action.
    pub fn snapshot(&self) -> SelectionSnapshot<R> {
        self.inner
            .read()
            .map(|g| g.snapshot())
            .unwrap_or(SelectionSnapshot::Empty)
    }

    /// Run a closure against the engine.
    pub fn with<T>(&self, f: impl FnOnce(&AcrossCheck<R, D>) -> T) -> Option<T> {
        self.inner.read().ok().map(|g| f(&g))
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Apply a header or banner request.
    pub fn set_mode(&self, mode: CheckMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.set_mode(mode);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Apply a banner gesture.
    pub fn dispatch(&self, action: BannerAction) {
        self.set_mode(action.into());
    }

    /// Handle a plain click on the header checkbox.
    pub fn click_header(&self) {
        if let Some(mode) = self.header().and_then(|h| h.on_click()) {
            self.set_mode(mode);
        }
    }

    /// Apply a row checkbox change. Returns whether the selection changed.
    pub fn toggle_row(&self, row: &R, checked: bool) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.toggle_row(row, checked)
        {
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Apply the same row checkbox change to several rows at once.
    /// Returns how many rows changed the selection.
    pub fn toggle_rows<'a, I>(&self, rows: I, checked: bool) -> usize
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let Ok(mut guard) = self.inner.write() else {
            return 0;
        };
        let changed = guard.toggle_rows(rows, checked);
        if changed > 0 {
            self.dirty.store(true, Ordering::SeqCst);
        }
        changed
    }

    /// Install the rows of the page now being shown.
    pub fn set_page(&self, rows: Vec<R>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.set_page(rows);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the data source.
    pub fn set_source(&self, source: D) {
        if let Ok(mut guard) = self.inner.write() {
            guard.set_source(source);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Mutate the data source in place.
    pub fn update_source(&self, f: impl FnOnce(&mut D)) {
        if let Ok(mut guard) = self.inner.write() {
            guard.update_source(f);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R, D> Clone for AcrossCheckState<R, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
