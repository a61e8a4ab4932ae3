mod common;

use std::fs;

use insta::assert_snapshot;
use rust_decimal_macros::dec;
use tally_core::{
    domain::TransactionType,
    snapshot::{self, SnapshotError},
    AggregationEngine, AggregationOptions,
};

use common::{household_snapshot, temp_base_dir, today, SNAPSHOT_JSON};

#[test]
fn totals_render_as_exact_decimal_strings() {
    let report =
        AggregationEngine::aggregate(&household_snapshot(), today(), &AggregationOptions::default());
    let json = serde_json::to_string_pretty(report.totals()).expect("serialize totals");

    assert_snapshot!(json, @r###"
    {
      "total_income": "1000",
      "total_expense": "300",
      "total_investment": "0",
      "net_balance": "700"
    }
    "###);
}

#[test]
fn exported_snapshot_is_parsed_and_diagnosed() {
    let records = snapshot::parse_records(SNAPSHOT_JSON).expect("parse snapshot");
    assert_eq!(records.len(), 7);

    let report = AggregationEngine::aggregate(&records, today(), &AggregationOptions::default());
    assert_eq!(report.record_count(), 4);
    assert_eq!(report.totals().total_expense, dec!(165.50));
    assert_eq!(report.totals().net_balance, dec!(2334.50));
    assert_eq!(report.breakdown_by_type(TransactionType::Expense)[0].category, "Travel");

    assert_snapshot!(report.diagnostics().summary_lines().join("\n"), @r###"
    1 record skipped: invalid amount
    1 record skipped: invalid date
    1 record skipped: unknown type
    "###);
}

#[test]
fn radar_view_renders_scaled_integers() {
    let records = vec![
        tally_core::domain::RawTransaction::new("2025-01-10", "Expense", "Rent", "300"),
        tally_core::domain::RawTransaction::new("2025-01-11", "Expense", "Food", "100"),
    ];
    let report = AggregationEngine::aggregate(&records, today(), &AggregationOptions::default());
    let json =
        serde_json::to_string_pretty(report.radar(TransactionType::Expense)).expect("serialize");

    assert_snapshot!(json, @r###"
    [
      {
        "category": "Rent",
        "value": 100
      },
      {
        "category": "Food",
        "value": 33
      }
    ]
    "###);
}

#[test]
fn load_records_reads_from_disk() {
    let path = temp_base_dir().join("export.json");
    fs::write(&path, SNAPSHOT_JSON).expect("write export");

    let records = snapshot::load_records(&path).expect("load export");
    assert_eq!(records[2].kind, "expense");
    assert_eq!(records[3].source, None);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = temp_base_dir().join("absent.json");
    let err = snapshot::load_records(&path).expect_err("missing file");
    assert!(matches!(err, SnapshotError::Io(_)));
}

#[test]
fn report_json_round_trips_through_serde() {
    let report =
        AggregationEngine::aggregate(&household_snapshot(), today(), &AggregationOptions::default());
    let json = snapshot::report_to_json(&report).expect("render report");
    let restored: tally_core::AggregateReport = serde_json::from_str(&json).expect("parse report");

    assert_eq!(restored.totals(), report.totals());
    assert_eq!(restored.monthly_series(), report.monthly_series());
}
