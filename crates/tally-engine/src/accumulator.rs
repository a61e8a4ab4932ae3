//! Single-pass reduction state.
//!
//! [`Accumulators`] holds one independent accumulator per view. Each accepted
//! record is pushed exactly once and touches every accumulator it belongs to,
//! so the cost of a snapshot is linear in its size no matter how many views
//! are read from the result. Ordering is applied only when views are emitted.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use tally_domain::{
    is_listed_category, CategoryAmount, DailyPoint, Diagnostics, MonthlyPoint, RadarPoint,
    RawTransaction, SourceFlow, Totals, Transaction, TransactionType, TypeAmount, TypeSummary,
    WeekdayBucket, WEEKDAY_LABELS,
};

use crate::validation;

const KINDS: usize = TransactionType::ALL.len();

#[derive(Debug, Default, Clone, Copy)]
struct FlowSums {
    income: Decimal,
    expense: Decimal,
}

#[derive(Debug, Default, Clone, Copy)]
struct MonthSums {
    income: Decimal,
    expense: Decimal,
    investment: Decimal,
}

#[derive(Debug, Default, Clone, Copy)]
struct ExpenseTally {
    total: Decimal,
    count: u64,
}

/// Inclusive range of days tracked by the daily trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl TrendWindow {
    /// The `window_days` calendar days ending on `now`, so `now - window_days`
    /// itself is excluded. A zero-day window still covers `now`.
    pub fn trailing(now: NaiveDate, window_days: u32) -> Self {
        let back = u64::from(window_days.saturating_sub(1));
        let first = now
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN);
        Self { first, last: now }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }
}

#[derive(Debug, Default)]
pub struct Accumulators {
    by_type: [Decimal; KINDS],
    count_by_type: [u64; KINDS],
    categories: [HashMap<String, Decimal>; KINDS],
    months: BTreeMap<(i32, u32), MonthSums>,
    sources: HashMap<String, FlowSums>,
    weekdays: [ExpenseTally; 7],
    trend: Option<TrendWindow>,
    days: BTreeMap<NaiveDate, FlowSums>,
    accepted: usize,
    unlisted_categories: usize,
}

impl Accumulators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also tracks per-day sums for records inside `window`.
    pub fn with_trend(window: TrendWindow) -> Self {
        Self {
            trend: Some(window),
            ..Self::default()
        }
    }

    /// Validates every record once, pushing the accepted ones that satisfy `keep`.
    pub fn ingest<F>(&mut self, records: &[RawTransaction], keep: F) -> Diagnostics
    where
        F: Fn(&Transaction) -> bool,
    {
        validation::partition(records, |txn| {
            if keep(&txn) {
                self.push(&txn);
            }
        })
    }

    pub fn push(&mut self, txn: &Transaction) {
        let slot = txn.kind.index();
        let amount = txn.amount;
        self.accepted += 1;
        self.by_type[slot] += amount;
        self.count_by_type[slot] += 1;
        *self.categories[slot]
            .entry(txn.category.clone())
            .or_default() += amount;
        if !is_listed_category(txn.kind, &txn.category) {
            self.unlisted_categories += 1;
        }

        let month = self
            .months
            .entry((txn.date.year(), txn.date.month()))
            .or_default();
        match txn.kind {
            TransactionType::Income => month.income += amount,
            TransactionType::Expense => month.expense += amount,
            TransactionType::Investment => month.investment += amount,
            TransactionType::Transfer => {}
        }

        match txn.kind {
            TransactionType::Income => {
                self.sources.entry(txn.source.clone()).or_default().income += amount;
            }
            TransactionType::Expense => {
                self.sources.entry(txn.source.clone()).or_default().expense += amount;
                let bucket = &mut self.weekdays[txn.date.weekday().num_days_from_sunday() as usize];
                bucket.total += amount;
                bucket.count += 1;
            }
            TransactionType::Investment | TransactionType::Transfer => {}
        }

        if let Some(window) = self.trend {
            if window.contains(txn.date) {
                let day = self.days.entry(txn.date).or_default();
                match txn.kind {
                    TransactionType::Income => day.income += amount,
                    TransactionType::Expense => day.expense += amount,
                    TransactionType::Investment | TransactionType::Transfer => {}
                }
            }
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn unlisted_categories(&self) -> usize {
        self.unlisted_categories
    }

    pub fn totals(&self) -> Totals {
        Totals::from_parts(
            self.by_type[TransactionType::Income.index()],
            self.by_type[TransactionType::Expense.index()],
            self.by_type[TransactionType::Investment.index()],
        )
    }

    /// Ascending by `YYYY-MM`.
    pub fn monthly_series(&self) -> Vec<MonthlyPoint> {
        self.months
            .iter()
            .map(|(&(year, month), sums)| MonthlyPoint {
                month: format!("{year:04}-{month:02}"),
                income: sums.income,
                expense: sums.expense,
                investment: sums.investment,
                net: sums.income - sums.expense,
            })
            .collect()
    }

    /// Types with a positive sum, in [`TransactionType::ALL`] order.
    pub fn distribution_by_type(&self) -> Vec<TypeAmount> {
        TransactionType::ALL
            .into_iter()
            .map(|kind| TypeAmount {
                kind,
                amount: self.by_type[kind.index()],
            })
            .filter(|entry| entry.amount > Decimal::ZERO)
            .collect()
    }

    /// Categories with a positive sum, largest first, ties by name.
    pub fn breakdown(&self, kind: TransactionType) -> Vec<CategoryAmount> {
        let mut entries: Vec<CategoryAmount> = self.categories[kind.index()]
            .iter()
            .filter(|(_, amount)| **amount > Decimal::ZERO)
            .map(|(category, amount)| CategoryAmount {
                category: category.clone(),
                amount: *amount,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        entries
    }

    /// Sources with any inflow or outflow, busiest first, ties by name.
    pub fn source_flow(&self) -> Vec<SourceFlow> {
        let mut flows: Vec<SourceFlow> = self
            .sources
            .iter()
            .filter(|(_, sums)| !(sums.income.is_zero() && sums.expense.is_zero()))
            .map(|(source, sums)| SourceFlow {
                source: source.clone(),
                inflow: sums.income,
                outflow: sums.expense,
                balance: sums.income - sums.expense,
            })
            .collect();
        flows.sort_by(|a, b| {
            b.volume()
                .cmp(&a.volume())
                .then_with(|| a.source.cmp(&b.source))
        });
        flows
    }

    /// The most recent `max_buckets` days holding records, oldest first.
    pub fn daily_trend(&self, max_buckets: usize) -> Vec<DailyPoint> {
        let skip = self.days.len().saturating_sub(max_buckets);
        self.days
            .iter()
            .skip(skip)
            .map(|(date, sums)| DailyPoint {
                day: date.format("%m-%d").to_string(),
                date: *date,
                income: sums.income,
                expense: sums.expense,
            })
            .collect()
    }

    /// Always seven buckets, Sunday first.
    pub fn weekday_pattern(&self) -> Vec<WeekdayBucket> {
        WEEKDAY_LABELS
            .iter()
            .zip(self.weekdays.iter())
            .map(|(label, tally)| WeekdayBucket {
                day: (*label).to_string(),
                total_expense: tally.total,
                count: tally.count,
                average: average(tally.total, tally.count),
            })
            .collect()
    }

    pub fn type_summary(&self, kind: TransactionType) -> TypeSummary {
        let slot = kind.index();
        let breakdown = self.breakdown(kind);
        TypeSummary {
            kind,
            total: self.by_type[slot],
            count: self.count_by_type[slot],
            average_transaction: average(self.by_type[slot], self.count_by_type[slot]),
            top_category: breakdown.first().map(|entry| entry.category.clone()),
            category_count: breakdown.len(),
        }
    }
}

/// Rescales the first `top_n` entries of a sorted breakdown to 0-100.
pub fn radar(breakdown: &[CategoryAmount], top_n: usize) -> Vec<RadarPoint> {
    let selected = &breakdown[..top_n.min(breakdown.len())];
    let Some(max) = selected.iter().map(|entry| entry.amount).max() else {
        return Vec::new();
    };
    if max <= Decimal::ZERO {
        return Vec::new();
    }
    selected
        .iter()
        .map(|entry| {
            let scaled = (entry.amount * Decimal::ONE_HUNDRED / max)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            RadarPoint {
                category: entry.category.clone(),
                value: scaled.to_u32().unwrap_or(0).min(100),
            }
        })
        .collect()
}

/// `total / count` to two decimal places, or zero for an empty bucket.
fn average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
