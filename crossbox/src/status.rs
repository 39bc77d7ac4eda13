//! Selection status and the recompute rule.
//!
//! The status is attached to the table as a whole. It is a pure function of
//! the selection set size, the current page size, the total size, how the
//! set is represented, and the previous status.

use serde::Deserialize;
use serde::Serialize;

/// Header checkbox status of a paginated table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckStatus {
    /// Nothing selected.
    #[default]
    Unchecked,
    /// Some rows of the current page selected.
    HalfChecked,
    /// Cross-page selection active, some rows excluded.
    HalfAcrossChecked,
    /// Every row of the current page selected.
    Checked,
    /// Cross-page selection active, every row selected.
    AcrossChecked,
}

impl CheckStatus {
    /// Returns `true` for the two cross-page states.
    pub fn is_across(self) -> bool {
        matches!(
            self,
            CheckStatus::AcrossChecked | CheckStatus::HalfAcrossChecked
        )
    }

    /// Returns `true` for the three page-local states.
    pub fn is_page_local(self) -> bool {
        !self.is_across()
    }

    /// Returns `true` when the header checkbox renders as indeterminate.
    pub fn is_indeterminate(self) -> bool {
        matches!(
            self,
            CheckStatus::HalfChecked | CheckStatus::HalfAcrossChecked
        )
    }

    /// Returns `true` when the header checkbox renders as checked.
    pub fn is_checked(self) -> bool {
        matches!(self, CheckStatus::Checked | CheckStatus::AcrossChecked)
    }

    /// The mode a plain click on the header checkbox requests.
    pub fn next_on_click(self) -> CheckMode {
        match self {
            CheckStatus::Unchecked | CheckStatus::HalfChecked => CheckMode::Checked,
            CheckStatus::Checked | CheckStatus::HalfAcrossChecked | CheckStatus::AcrossChecked => {
                CheckMode::Unchecked
            }
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CheckStatus::Unchecked => "unchecked",
            CheckStatus::HalfChecked => "half-checked",
            CheckStatus::HalfAcrossChecked => "half-across-checked",
            CheckStatus::Checked => "checked",
            CheckStatus::AcrossChecked => "across-checked",
        };
        f.write_str(name)
    }
}

/// Bulk selection request issued by the header control or the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckMode {
    /// Clear the selection.
    Unchecked,
    /// Select every row of the current page.
    Checked,
    /// Select every row across all pages.
    AcrossChecked,
}

impl From<CheckMode> for CheckStatus {
    fn from(mode: CheckMode) -> Self {
        match mode {
            CheckMode::Unchecked => CheckStatus::Unchecked,
            CheckMode::Checked => CheckStatus::Checked,
            CheckMode::AcrossChecked => CheckStatus::AcrossChecked,
        }
    }
}

/// How the selection set relates to the true selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Representation {
    /// The set lists the selected rows.
    #[default]
    Inclusive,
    /// Complement mode: every row is selected except the ones the set lists.
    Exclusive,
}

/// Sizes the recompute rule looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Entries in the selection set (selected rows, or exclusions).
    pub stored: usize,
    /// Rows on the current page.
    pub page: usize,
    /// Selectable rows across all pages.
    pub total: usize,
}

impl Counts {
    pub fn new(stored: usize, page: usize, total: usize) -> Self {
        Self {
            stored,
            page,
            total,
        }
    }
}

/// Recompute the status after the selection set or its inputs changed.
///
/// Page-local states are only reachable from page-local states and cross-page
/// states only from cross-page states; entering cross-page selection takes an
/// explicit `CheckMode::AcrossChecked` request. Input combinations no rule
/// covers keep the previous status.
///
/// In complement mode, excluding every row reads as `Unchecked`.
pub fn recompute(prev: CheckStatus, counts: Counts, repr: Representation) -> CheckStatus {
    let Counts {
        stored,
        page,
        total,
    } = counts;

    match repr {
        Representation::Exclusive => {
            if stored >= total {
                CheckStatus::Unchecked
            } else if stored == 0 {
                CheckStatus::AcrossChecked
            } else {
                CheckStatus::HalfAcrossChecked
            }
        }
        Representation::Inclusive => {
            if stored == 0 {
                return CheckStatus::Unchecked;
            }
            if prev.is_across() {
                return if stored >= total {
                    CheckStatus::AcrossChecked
                } else {
                    CheckStatus::HalfAcrossChecked
                };
            }
            if stored < page {
                CheckStatus::HalfChecked
            } else if stored == page {
                CheckStatus::Checked
            } else {
                // More rows than the page holds, picked across page changes.
                match prev {
                    CheckStatus::Unchecked => CheckStatus::HalfChecked,
                    other => other,
                }
            }
        }
    }
}
