use std::io::Cursor;
use swingfit::telemetry::loader::load_shot_table;
use swingfit::telemetry::{summarize, Metric};

#[test]
fn loader_parses_in_memory_csv() {
    let data = "Ball Speed (mph),Carry (yds),Spin Rate (rpm)\n150.1,245.0,5800\n151.3,248.2,6100\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.column(0), vec![Some(150.1), Some(151.3)]);
}

#[test]
fn loader_skips_units_row_under_header() {
    let data = "Ball Speed,Carry\nmph,yds\n150.0,245.0\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.column(1), vec![Some(245.0)]);
}

#[test]
fn loader_treats_left_prefix_as_negative() {
    let data = "Total Side\nL 4.2\nR 3.1\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    assert_eq!(table.column(0), vec![Some(-4.2), Some(3.1)]);
}

#[test]
fn loader_unparseable_cells_become_missing() {
    let data = "Carry,Spin Rate\n245.0,-\nbad,6000\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    assert_eq!(table.column(0), vec![Some(245.0), None]);
    assert_eq!(table.column(1), vec![None, Some(6000.0)]);
}

#[test]
fn summarize_resolves_aliased_headers() {
    // Human-authored spellings: case, punctuation, unit suffixes.
    let data = "BALL SPEED (MPH),carry dist,Launch,Face-To-Path (deg)\n\
                150.0,240.0,15.5,1.0\n\
                152.0,244.0,16.5,-1.0\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "vs-65-s");

    assert_eq!(row.shaft_id, "vs-65-s");
    assert_eq!(row.shots, 2);
    assert_eq!(row.mean(Metric::BallSpeed), Some(151.0));
    assert_eq!(row.mean(Metric::Carry), Some(242.0));
    assert_eq!(row.mean(Metric::LaunchAngle), Some(16.0));
    assert_eq!(row.sd(Metric::BallSpeed), Some(1.0));
}

#[test]
fn summarize_first_matching_column_wins_on_duplicates() {
    let data = "Carry,Carry\n240.0,999.0\n242.0,999.0\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "x");
    assert_eq!(row.mean(Metric::Carry), Some(241.0));
}

#[test]
fn summarize_omits_unmeasured_metrics_entirely() {
    let data = "Carry,Spin Rate\n240.0,\n242.0,\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "x");

    // Spin column exists but carried no values: absent means unknown,
    // never zero.
    assert!(row.mean(Metric::SpinRate).is_none());
    assert!(row.stats.get(&Metric::SpinRate).is_none());
    assert_eq!(row.mean(Metric::Carry), Some(241.0));
}

#[test]
fn summarize_means_ignore_missing_samples() {
    let data = "Carry\n240.0\n\n244.0\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "x");
    assert_eq!(row.mean(Metric::Carry), Some(242.0));
}

#[test]
fn summarize_rounds_to_two_decimals() {
    let data = "Smash Factor\n1.381\n1.392\n1.401\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "x");
    assert_eq!(row.mean(Metric::SmashFactor), Some(1.39));
}

#[test]
fn summarize_empty_table_has_no_stats() {
    let data = "Carry\n";
    let table = load_shot_table(Cursor::new(data)).expect("load failed");
    let row = summarize(&table, "x");
    assert_eq!(row.shots, 0);
    assert!(row.stats.is_empty());
}
