#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tally_core::domain::RawTransaction;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn temp_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 15).expect("valid date")
}

/// Salary in January, food in January and February, all paid in cash.
pub fn household_snapshot() -> Vec<RawTransaction> {
    vec![
        RawTransaction::new("2025-01-10", "Income", "Salary", "1000").with_source("Cash"),
        RawTransaction::new("2025-01-15", "Expense", "Food", "200").with_source("Cash"),
        RawTransaction::new("2025-02-01", "Expense", "Food", "100").with_source("Cash"),
    ]
}

pub const SNAPSHOT_JSON: &str = r#"[
  {"id": "t1", "date": "2025-02-10", "type": "Income", "category": "Salary", "source": "Bank Account", "amount": 2500},
  {"id": "t2", "date": "2025-02-11", "type": "Expense", "category": "Food", "source": "Cash", "amount": "45.50"},
  {"id": "t3", "date": "2025-02-12T09:30:00Z", "type": "expense", "category": "Travel", "source": "Debit Card", "amount": "120"},
  {"id": "t4", "date": "2025-02-13", "type": "Investment", "category": "Gold", "amount": "300"},
  {"id": "t5", "date": "2025-02-14", "type": "Expense", "category": "Food", "amount": "abc"},
  {"id": "t6", "date": "not-a-date", "type": "Expense", "category": "Food", "amount": "5"},
  {"id": "t7", "date": "2025-02-14", "type": "Loan", "category": "Food", "amount": "5"}
]"#;
