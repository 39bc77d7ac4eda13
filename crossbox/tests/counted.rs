use crossbox::prelude::*;
use crossbox::SelectionSnapshot;

fn row(id: i64) -> Record {
    Record::new().set("id", id)
}

fn page(start: i64, len: i64) -> Vec<Record> {
    (start..start + len).map(row).collect()
}

fn engine(count: usize) -> AcrossCheck<Record, Counted> {
    let config = SelectionConfig::new().with_row_key(["id"]);
    AcrossCheck::new(config, Counted::new(count)).with_page(page(0, 10))
}

#[test]
fn test_select_all_enters_complement_mode() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    assert_eq!(engine.status(), CheckStatus::AcrossChecked);
    assert!(engine.selection().is_empty());
    assert!(engine.is_complement_mode());
    assert_eq!(engine.selected_count(), 100);
}

#[test]
fn test_excluding_rows_reduces_selected_count() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    for id in [3, 41, 77] {
        assert!(engine.toggle_row(&row(id), false));
    }
    assert_eq!(engine.status(), CheckStatus::HalfAcrossChecked);
    assert_eq!(engine.selection().len(), 3);
    assert_eq!(engine.banner().selected_count, 97);
    assert!(!engine.banner().is_full_data_mode);
}

#[test]
fn test_excluding_twice_is_noop() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    assert!(engine.toggle_row(&row(5), false));
    assert!(!engine.toggle_row(&row(5), false));
    assert_eq!(engine.selected_count(), 99);
}

#[test]
fn test_unexcluding_last_exclusion_restores_across_checked() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    engine.toggle_row(&row(5), false);
    assert!(engine.toggle_row(&row(5), true));
    assert!(engine.selection().is_empty());
    assert_eq!(engine.status(), CheckStatus::AcrossChecked);
}

#[test]
fn test_excluding_everything_reads_unchecked_and_is_reversible() {
    let mut engine = AcrossCheck::new(SelectionConfig::new().with_row_key(["id"]), Counted::new(3))
        .with_page(page(0, 3));
    engine.set_mode(CheckMode::AcrossChecked);
    engine.toggle_rows(&page(0, 3), false);
    assert_eq!(engine.status(), CheckStatus::Unchecked);
    assert_eq!(engine.selected_count(), 0);
    assert_eq!(engine.snapshot(), SelectionSnapshot::Empty);

    // The exclusions are kept, so re-checking one row picks up from there.
    assert!(engine.is_complement_mode());
    engine.toggle_row(&row(1), true);
    assert_eq!(engine.status(), CheckStatus::HalfAcrossChecked);
    assert_eq!(engine.selected_count(), 1);
}

#[test]
fn test_page_local_mode_on_counted_source() {
    let mut engine = engine(100);
    engine.toggle_row(&row(2), true);
    assert_eq!(engine.status(), CheckStatus::HalfChecked);
    assert!(!engine.is_complement_mode());
    engine.set_mode(CheckMode::Checked);
    assert_eq!(engine.status(), CheckStatus::Checked);
    assert_eq!(engine.selected_count(), 10);
}

#[test]
fn test_snapshot_all_except() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    engine.toggle_row(&row(8), false);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.count(), 99);
    assert_eq!(
        snapshot,
        SelectionSnapshot::AllExcept {
            total: 100,
            excluded: vec![row(8)],
        }
    );
}

#[test]
fn test_count_change_keeps_exclusions() {
    let mut engine = engine(100);
    engine.set_mode(CheckMode::AcrossChecked);
    engine.toggle_row(&row(8), false);
    engine.update_source(|source| source.set_count(120));
    assert_eq!(engine.selected_count(), 119);
    assert_eq!(engine.status(), CheckStatus::HalfAcrossChecked);
}

#[test]
fn test_clear_leaves_complement_mode() {
    let mut engine = engine(100);
    engine.select_all();
    engine.toggle_row(&row(8), false);
    engine.clear();
    assert_eq!(engine.status(), CheckStatus::Unchecked);
    assert!(!engine.is_complement_mode());
    assert!(engine.selection().is_empty());
}
