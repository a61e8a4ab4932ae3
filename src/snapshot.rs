//! JSON adapter between a transaction store's list export and the engine.

use std::{fs, io, path::Path};

use tally_domain::RawTransaction;
use tally_engine::AggregateReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Parses a JSON array of raw records. Field-level problems are left to the
/// engine's validation; only malformed JSON fails here.
pub fn parse_records(json: &str) -> Result<Vec<RawTransaction>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_records(path: &Path) -> Result<Vec<RawTransaction>, SnapshotError> {
    let data = fs::read_to_string(path)?;
    let records = parse_records(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded snapshot");
    Ok(records)
}

pub fn report_to_json(report: &AggregateReport) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_field_types() {
        let json = r#"[
            {"id": "a", "date": "2025-01-10", "type": "Income", "category": "Salary", "amount": 1000},
            {"id": "b", "date": "2025-01-11", "type": "Expense", "category": "Food", "amount": "12.50", "source": "Cash"}
        ]"#;
        let records = parse_records(json).expect("parse snapshot");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, "1000");
        assert_eq!(records[1].source.as_deref(), Some("Cash"));
    }

    #[test]
    fn numeric_amounts_reach_the_engine_exactly() {
        let json = r#"[{"id": "big", "date": "2025-01-10", "type": "Income",
            "category": "Salary", "amount": 1234567890.123456789}]"#;
        let records = parse_records(json).expect("parse snapshot");
        assert_eq!(records[0].amount, "1234567890.123456789");
    }

    #[test]
    fn one_odd_field_does_not_fail_the_snapshot() {
        let json = r#"[
            {"id": "a", "date": "2025-01-10", "type": "Income", "category": "Salary", "amount": "10"},
            {"id": "b", "date": "2025-01-11", "type": "Expense", "category": "Food", "amount": "4", "source": 7}
        ]"#;
        let records = parse_records(json).expect("parse snapshot");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source.as_deref(), Some("7"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_records("{").expect_err("malformed");
        assert!(matches!(err, SnapshotError::Serde(_)));
    }
}
