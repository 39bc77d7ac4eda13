//! Scenario files and their replay.

use log::debug;
use serde::{Deserialize, Serialize};

use crossbox::prelude::*;
use crossbox::{BannerPrompt, RowKey};

use crate::error::CliError;

fn default_page_size() -> usize {
    10
}

/// A recorded sequence of table interactions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub config: SelectionConfig,
    pub source: ScenarioSource,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub steps: Vec<Step>,
}

/// Initial data source.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioSource {
    Rows(Vec<Record>),
    Count(usize),
}

#[derive(Debug, Deserialize)]
pub struct ToggleStep {
    pub row: Record,
    pub checked: bool,
}

/// One user or provider event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Show a 1-based page.
    Page(usize),
    /// Header dropdown choice.
    Mode(CheckMode),
    /// Plain click on the header checkbox.
    HeaderClick,
    /// Row checkbox change.
    Toggle(ToggleStep),
    /// Banner link.
    Banner(BannerAction),
    /// The source now only reports a count.
    Count(usize),
    /// The source now holds every row.
    Rows(Vec<Record>),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Page(page) => write!(f, "page {}", page),
            Step::Mode(mode) => write!(f, "mode {:?}", mode),
            Step::HeaderClick => write!(f, "header click"),
            Step::Toggle(t) => write!(f, "toggle {}", if t.checked { "on" } else { "off" }),
            Step::Banner(action) => write!(f, "banner {:?}", action),
            Step::Count(count) => write!(f, "count {}", count),
            Step::Rows(rows) => write!(f, "rows x{}", rows.len()),
        }
    }
}

/// State after one step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step: usize,
    pub action: String,
    pub page: usize,
    pub status: CheckStatus,
    pub selected: usize,
    pub total: usize,
    pub complement: bool,
    pub prompt: BannerPrompt,
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let complement = if self.complement {
            "  [complement]"
        } else {
            ""
        };
        write!(
            f,
            "{:>3}  {:<24} p{:<3} {:<20} {:>6}/{:<6} {}{}",
            self.step,
            self.action,
            self.page,
            self.status.to_string(),
            self.selected,
            self.total,
            self.prompt,
            complement
        )
    }
}

type Engine = AcrossCheck<Record, Hybrid<Record>>;

/// Replay a scenario and report the state after every step.
pub fn replay(scenario: &Scenario) -> Result<Vec<StepReport>, CliError> {
    scenario.config.validate()?;

    let page_size = scenario.page_size.max(1);
    let source = match &scenario.source {
        ScenarioSource::Rows(rows) => Hybrid::Rows(rows.clone()),
        ScenarioSource::Count(count) => Hybrid::Count(*count),
    };
    let mut engine: Engine = AcrossCheck::new(scenario.config.clone(), source);
    let mut page = 1;
    let rows = page_rows(&engine, page, page_size);
    engine.set_page(rows);

    let mut reports = Vec::with_capacity(scenario.steps.len());
    for (i, step) in scenario.steps.iter().enumerate() {
        let step_no = i + 1;
        debug!("step {}: {}", step_no, step);
        match step {
            Step::Page(target) => {
                let pages = page_count(engine.total_size(), page_size);
                if *target == 0 || *target > pages {
                    return Err(CliError::PageOutOfRange {
                        step: step_no,
                        page: *target,
                        pages,
                    });
                }
                page = *target;
                let rows = page_rows(&engine, page, page_size);
                engine.set_page(rows);
            }
            Step::Mode(mode) => engine.set_mode(*mode),
            Step::HeaderClick => {
                if let Some(mode) = engine.header().on_click() {
                    engine.set_mode(mode);
                }
            }
            Step::Toggle(toggle) => {
                let row = resolve_row(&engine, &toggle.row, step_no)?;
                engine.toggle_row(&row, toggle.checked);
            }
            Step::Banner(action) => engine.dispatch(*action),
            Step::Count(count) => {
                engine.update_source(|source| source.set_count(*count));
                page = page.min(page_count(*count, page_size));
                let rows = page_rows(&engine, page, page_size);
                engine.set_page(rows);
            }
            Step::Rows(rows) => {
                engine.update_source(|source| source.set_rows(rows.clone()));
                page = page.min(page_count(rows.len(), page_size));
                let rows = page_rows(&engine, page, page_size);
                engine.set_page(rows);
            }
        }

        let banner = engine.banner();
        reports.push(StepReport {
            step: step_no,
            action: step.to_string(),
            page,
            status: engine.status(),
            selected: banner.selected_count,
            total: banner.total_count,
            complement: engine.is_complement_mode(),
            prompt: banner.prompt(),
        });
    }
    Ok(reports)
}

fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Rows shown on a 1-based page.
///
/// Count-only sources have no rows to show, so rows are synthesized with
/// every key field set to the row's absolute index.
fn page_rows(engine: &Engine, page: usize, page_size: usize) -> Vec<Record> {
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(engine.total_size());
    match engine.source() {
        Hybrid::Rows(rows) => rows.get(start..end).unwrap_or_default().to_vec(),
        Hybrid::Count(_) => (start..end)
            .map(|i| synthetic_row(&engine.config().row_key, i))
            .collect(),
    }
}

fn synthetic_row(key: &RowKey, index: usize) -> Record {
    key.fields().iter().fold(Record::new(), |record, field| {
        record.set(field.clone(), index as i64)
    })
}

/// Map a scenario row onto the table's own row when the table holds rows.
fn resolve_row(engine: &Engine, row: &Record, step: usize) -> Result<Record, CliError> {
    match engine.source().all_rows_if_available() {
        Some(rows) => {
            let key = &engine.config().row_key;
            key.position(rows, row)
                .map(|i| rows[i].clone())
                .ok_or_else(|| CliError::UnknownRow {
                    step,
                    identity: key.identity(row).to_string(),
                })
        }
        None => Ok(row.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Scenario {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_replay_materialized_scenario() {
        let rows: Vec<String> = (0..25).map(|i| format!(r#"{{"id": {i}}}"#)).collect();
        let scenario = parse(&format!(
            r#"{{
                "config": {{"rowKey": ["id"]}},
                "source": {{"rows": [{}]}},
                "steps": [
                    {{"mode": "checked"}},
                    {{"toggle": {{"row": {{"id": 4}}, "checked": false}}}},
                    {{"banner": "selectAcross"}},
                    {{"page": 3}},
                    {{"toggle": {{"row": {{"id": 21}}, "checked": false}}}},
                    {{"banner": "clear"}}
                ]
            }}"#,
            rows.join(",")
        ));

        let reports = replay(&scenario).unwrap();
        let summary: Vec<(CheckStatus, usize)> =
            reports.iter().map(|r| (r.status, r.selected)).collect();
        assert_eq!(
            summary,
            vec![
                (CheckStatus::Checked, 10),
                (CheckStatus::HalfChecked, 9),
                (CheckStatus::AcrossChecked, 25),
                (CheckStatus::AcrossChecked, 25),
                (CheckStatus::HalfAcrossChecked, 24),
                (CheckStatus::Unchecked, 0),
            ]
        );
        assert_eq!(reports[0].prompt, BannerPrompt::OfferSelectAcross);
        assert_eq!(reports[3].page, 3);
    }

    #[test]
    fn test_replay_counted_scenario() {
        let scenario = parse(
            r#"{
                "config": {"rowKey": ["id"]},
                "source": {"count": 100},
                "steps": [
                    "headerClick",
                    {"banner": "selectAcross"},
                    {"toggle": {"row": {"id": 3}, "checked": false}},
                    {"toggle": {"row": {"id": 50}, "checked": false}},
                    {"toggle": {"row": {"id": 99}, "checked": false}},
                    {"count": 120}
                ]
            }"#,
        );
        let reports = replay(&scenario).unwrap();
        assert_eq!(reports[1].status, CheckStatus::AcrossChecked);
        assert!(reports[1].complement);
        assert_eq!(reports[4].selected, 97);
        assert_eq!(reports[5].selected, 117);
        assert_eq!(reports[5].total, 120);
    }

    #[test]
    fn test_unknown_row_is_an_error() {
        let scenario = parse(
            r#"{
                "config": {"rowKey": ["id"]},
                "source": {"rows": [{"id": 1}, {"id": 2}]},
                "steps": [{"toggle": {"row": {"id": 7}, "checked": true}}]
            }"#,
        );
        let err = replay(&scenario).unwrap_err();
        assert!(matches!(err, CliError::UnknownRow { step: 1, .. }));
    }

    #[test]
    fn test_page_out_of_range() {
        let scenario = parse(
            r#"{
                "source": {"count": 15},
                "pageSize": 10,
                "steps": [{"page": 3}]
            }"#,
        );
        let err = replay(&scenario).unwrap_err();
        assert!(matches!(err, CliError::PageOutOfRange { pages: 2, .. }));
    }

    #[test]
    fn test_synthetic_rows_use_key_fields() {
        let row = synthetic_row(&RowKey::default(), 7);
        assert_eq!(row.get("id"), Some(&crossbox::Value::Int(7)));
        assert_eq!(row.get("name"), Some(&crossbox::Value::Int(7)));
    }
}
