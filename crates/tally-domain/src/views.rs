//! Derived views produced by the aggregation engine.
//!
//! Every view is a plain value: it owns its data, carries no identity beyond
//! the call that produced it, and serializes deterministically.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{common::Amounted, transaction::TransactionType};

/// Weekday labels in bucket order, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Running totals over every accepted record.
pub struct Totals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_investment: Decimal,
    pub net_balance: Decimal,
}

impl Totals {
    pub fn from_parts(income: Decimal, expense: Decimal, investment: Decimal) -> Self {
        Self {
            total_income: income,
            total_expense: expense,
            total_investment: investment,
            net_balance: income - expense,
        }
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self::from_parts(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One `YYYY-MM` bucket of the monthly series.
pub struct MonthlyPoint {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub investment: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

impl Amounted for CategoryAmount {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Category sums for a single transaction type.
pub struct CategoryBreakdown {
    pub kind: TransactionType,
    pub entries: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Money moving through one payment source. `balance` may be negative.
pub struct SourceFlow {
    pub source: String,
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub balance: Decimal,
}

impl SourceFlow {
    pub fn volume(&self) -> Decimal {
        self.inflow + self.outflow
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A calendar day with at least one record inside the trailing window.
pub struct DailyPoint {
    /// `MM-DD` label.
    pub day: String,
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Expense activity on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub day: String,
    pub total_expense: Decimal,
    pub count: u64,
    /// `total_expense / count` rounded to two decimal places, midpoints away
    /// from zero. Zero when `count` is zero.
    pub average: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAmount {
    pub kind: TransactionType,
    pub amount: Decimal,
}

impl Amounted for TypeAmount {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A category rescaled to a 0-100 share of the largest selected category.
pub struct RadarPoint {
    pub category: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarView {
    pub kind: TransactionType,
    pub points: Vec<RadarPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Headline figures for one transaction type.
pub struct TypeSummary {
    pub kind: TransactionType,
    pub total: Decimal,
    pub count: u64,
    pub average_transaction: Decimal,
    pub top_category: Option<String>,
    pub category_count: usize,
}

impl TypeSummary {
    pub fn empty(kind: TransactionType) -> Self {
        Self {
            kind,
            total: Decimal::ZERO,
            count: 0,
            average_transaction: Decimal::ZERO,
            top_category: None,
            category_count: 0,
        }
    }
}
