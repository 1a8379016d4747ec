//! JSON export round-trip tests

use retax_core::{ScenarioInputs, YearlyDepreciation, evaluate};
use tempfile::tempdir;

use crate::export::export_json;

#[test]
fn test_export_schedule_round_trips() {
    let dir = tempdir().unwrap();
    let report = evaluate(&ScenarioInputs::default()).unwrap();

    let path = export_json(dir.path(), "depreciation_schedule.json", &report.schedule).unwrap();
    assert_eq!(path, dir.path().join("depreciation_schedule.json"));

    let json = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<YearlyDepreciation> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report.schedule);
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("exports");

    let report = evaluate(&ScenarioInputs::default()).unwrap();
    let path = export_json(&nested, "operating_cash_flow.json", &report.cash_flow).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_overwrites_previous_file() {
    let dir = tempdir().unwrap();

    let short = evaluate(&ScenarioInputs {
        modeling_years: 3,
        ..ScenarioInputs::default()
    })
    .unwrap();
    let long = evaluate(&ScenarioInputs {
        modeling_years: 8,
        ..ScenarioInputs::default()
    })
    .unwrap();

    export_json(dir.path(), "depreciation_schedule.json", &short.schedule).unwrap();
    let path = export_json(dir.path(), "depreciation_schedule.json", &long.schedule).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<YearlyDepreciation> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 8);
}
