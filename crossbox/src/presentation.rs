//! View models for the header checkbox and the inter-row banner.
//!
//! Both are plain data derived from the engine; rendering them is up to the
//! table component. User gestures come back as [`CheckMode`] requests.

use serde::Deserialize;
use serde::Serialize;

use crate::status::{CheckMode, CheckStatus};

/// State of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderControl {
    pub status: CheckStatus,
    /// Nothing to select.
    pub disabled: bool,
    /// Whether the dropdown offers "select across pages".
    pub show_cross_page_option: bool,
}

impl HeaderControl {
    /// Modes offered by the header dropdown.
    pub fn options(&self) -> Vec<CheckMode> {
        if self.disabled {
            return Vec::new();
        }
        let mut options = vec![CheckMode::Checked];
        if self.show_cross_page_option {
            options.push(CheckMode::AcrossChecked);
        }
        options.push(CheckMode::Unchecked);
        options
    }

    /// Mode requested by a plain click on the checkbox, if enabled.
    pub fn on_click(&self) -> Option<CheckMode> {
        (!self.disabled).then(|| self.status.next_on_click())
    }
}

/// What the banner between header and rows should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BannerPrompt {
    /// No banner.
    Hidden,
    /// "N selected on this page. Select all M?"
    OfferSelectAcross,
    /// "N of M selected. Clear selection?"
    OfferClear,
}

impl std::fmt::Display for BannerPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BannerPrompt::Hidden => "-",
            BannerPrompt::OfferSelectAcross => "offer select-across",
            BannerPrompt::OfferClear => "offer clear",
        };
        f.write_str(text)
    }
}

/// Banner gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BannerAction {
    /// "Clear selection".
    Clear,
    /// "Select all across pages".
    SelectAcross,
}

impl From<BannerAction> for CheckMode {
    fn from(action: BannerAction) -> Self {
        match action {
            BannerAction::Clear => CheckMode::Unchecked,
            BannerAction::SelectAcross => CheckMode::AcrossChecked,
        }
    }
}

/// "N of M selected" banner shown between the header and the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Rows currently selected, counting the complement in complement mode.
    pub selected_count: usize,
    pub total_count: usize,
    pub status: CheckStatus,
    /// Every row is in memory.
    pub is_full_data_mode: bool,
    /// Whether select-across requests will be honored.
    pub cross_page_enabled: bool,
}

impl Banner {
    pub fn prompt(&self) -> BannerPrompt {
        match self.status {
            CheckStatus::Checked
                if self.cross_page_enabled && self.selected_count < self.total_count =>
            {
                BannerPrompt::OfferSelectAcross
            }
            CheckStatus::AcrossChecked | CheckStatus::HalfAcrossChecked => BannerPrompt::OfferClear,
            _ => BannerPrompt::Hidden,
        }
    }

    /// Actions the banner offers for its current prompt.
    pub fn actions(&self) -> Vec<BannerAction> {
        match self.prompt() {
            BannerPrompt::Hidden => Vec::new(),
            BannerPrompt::OfferSelectAcross => vec![BannerAction::SelectAcross],
            BannerPrompt::OfferClear => vec![BannerAction::Clear],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(status: CheckStatus, selected: usize, total: usize) -> Banner {
        Banner {
            selected_count: selected,
            total_count: total,
            status,
            is_full_data_mode: true,
            cross_page_enabled: true,
        }
    }

    #[test]
    fn test_header_options() {
        let header = HeaderControl {
            status: CheckStatus::Unchecked,
            disabled: false,
            show_cross_page_option: true,
        };
        assert_eq!(
            header.options(),
            vec![
                CheckMode::Checked,
                CheckMode::AcrossChecked,
                CheckMode::Unchecked,
            ]
        );

        let page_only = HeaderControl {
            show_cross_page_option: false,
            ..header
        };
        assert_eq!(
            page_only.options(),
            vec![CheckMode::Checked, CheckMode::Unchecked]
        );
    }

    #[test]
    fn test_disabled_header_offers_nothing() {
        let header = HeaderControl {
            status: CheckStatus::Unchecked,
            disabled: true,
            show_cross_page_option: true,
        };
        assert!(header.options().is_empty());
        assert_eq!(header.on_click(), None);
    }

    #[test]
    fn test_banner_prompt() {
        use CheckStatus::{AcrossChecked, Checked, HalfAcrossChecked, HalfChecked};

        assert_eq!(
            banner(Checked, 10, 25).prompt(),
            BannerPrompt::OfferSelectAcross
        );
        assert_eq!(banner(Checked, 10, 10).prompt(), BannerPrompt::Hidden);
        assert_eq!(banner(HalfChecked, 4, 25).prompt(), BannerPrompt::Hidden);
        assert_eq!(
            banner(AcrossChecked, 25, 25).prompt(),
            BannerPrompt::OfferClear
        );
        assert_eq!(
            banner(HalfAcrossChecked, 24, 25).actions(),
            vec![BannerAction::Clear]
        );
    }

    #[test]
    fn test_banner_respects_disabled_cross_page() {
        let b = Banner {
            cross_page_enabled: false,
            ..banner(CheckStatus::Checked, 10, 25)
        };
        assert_eq!(b.prompt(), BannerPrompt::Hidden);
    }
}
