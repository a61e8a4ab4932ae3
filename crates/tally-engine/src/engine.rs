use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_domain::{
    CategoryAmount, CategoryBreakdown, DailyPoint, Diagnostics, MonthlyPoint, RadarPoint,
    RadarView, RawTransaction, SourceFlow, Totals, Transaction, TransactionType, TypeAmount,
    TypeSummary, WeekdayBucket,
};

use crate::{
    accumulator::{self, Accumulators, TrendWindow},
    validation, AggregationOptions,
};

/// Stateless entry point of the aggregation pipeline.
///
/// Every call validates the snapshot and reduces it in a single traversal,
/// allocating fresh accumulators; nothing is cached between calls.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Derives every view from `records` as of `now`.
    pub fn aggregate(
        records: &[RawTransaction],
        now: NaiveDate,
        options: &AggregationOptions,
    ) -> AggregateReport {
        let mut acc = Accumulators::with_trend(TrendWindow::trailing(now, options.window_days));
        let diagnostics = acc.ingest(records, |_| true);

        tracing::debug!(
            records = records.len(),
            accepted = acc.accepted(),
            rejected = diagnostics.count(),
            unlisted_categories = acc.unlisted_categories(),
            %now,
            "aggregated transaction snapshot"
        );
        if !diagnostics.is_empty() {
            tracing::warn!(
                rejected = diagnostics.count(),
                "skipped invalid transaction records"
            );
        }

        AggregateReport::assemble(&acc, diagnostics, now, *options)
    }

    /// Normalizes `records` without aggregating them.
    pub fn validate(records: &[RawTransaction]) -> (Vec<Transaction>, Diagnostics) {
        let mut accepted = Vec::with_capacity(records.len());
        let diagnostics = validation::partition(records, |txn| accepted.push(txn));
        (accepted, diagnostics)
    }
}

/// Immutable bundle of views derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    now: NaiveDate,
    options: AggregationOptions,
    record_count: usize,
    totals: Totals,
    monthly_series: Vec<MonthlyPoint>,
    distribution_by_type: Vec<TypeAmount>,
    breakdowns: Vec<CategoryBreakdown>,
    radars: Vec<RadarView>,
    type_summaries: Vec<TypeSummary>,
    source_flow: Vec<SourceFlow>,
    daily_trend: Vec<DailyPoint>,
    weekday_pattern: Vec<WeekdayBucket>,
    diagnostics: Diagnostics,
}

impl AggregateReport {
    fn assemble(
        acc: &Accumulators,
        diagnostics: Diagnostics,
        now: NaiveDate,
        options: AggregationOptions,
    ) -> Self {
        let breakdowns: Vec<CategoryBreakdown> = TransactionType::ALL
            .into_iter()
            .map(|kind| CategoryBreakdown {
                kind,
                entries: acc.breakdown(kind),
            })
            .collect();
        let radars = breakdowns
            .iter()
            .map(|breakdown| RadarView {
                kind: breakdown.kind,
                points: accumulator::radar(&breakdown.entries, options.radar_top_n),
            })
            .collect();

        Self {
            now,
            options,
            record_count: acc.accepted(),
            totals: acc.totals(),
            monthly_series: acc.monthly_series(),
            distribution_by_type: acc.distribution_by_type(),
            breakdowns,
            radars,
            type_summaries: TransactionType::ALL
                .into_iter()
                .map(|kind| acc.type_summary(kind))
                .collect(),
            source_flow: acc.source_flow(),
            daily_trend: acc.daily_trend(options.max_trend_buckets),
            weekday_pattern: acc.weekday_pattern(),
            diagnostics,
        }
    }

    pub fn now(&self) -> NaiveDate {
        self.now
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Number of accepted records.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn monthly_series(&self) -> &[MonthlyPoint] {
        &self.monthly_series
    }

    pub fn distribution_by_type(&self) -> &[TypeAmount] {
        &self.distribution_by_type
    }

    pub fn breakdown_by_type(&self, kind: TransactionType) -> &[CategoryAmount] {
        self.breakdowns
            .iter()
            .find(|breakdown| breakdown.kind == kind)
            .map(|breakdown| breakdown.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn source_flow(&self) -> &[SourceFlow] {
        &self.source_flow
    }

    pub fn daily_trend(&self) -> &[DailyPoint] {
        &self.daily_trend
    }

    pub fn weekday_pattern(&self) -> &[WeekdayBucket] {
        &self.weekday_pattern
    }

    /// Radar of the configured top-N categories for `kind`.
    pub fn radar(&self, kind: TransactionType) -> &[RadarPoint] {
        self.radars
            .iter()
            .find(|radar| radar.kind == kind)
            .map(|radar| radar.points.as_slice())
            .unwrap_or(&[])
    }

    /// Radar over a different number of categories than the configured one.
    pub fn radar_with(&self, kind: TransactionType, top_n: usize) -> Vec<RadarPoint> {
        accumulator::radar(self.breakdown_by_type(kind), top_n)
    }

    pub fn type_summary(&self, kind: TransactionType) -> TypeSummary {
        self.type_summaries
            .iter()
            .find(|summary| summary.kind == kind)
            .cloned()
            .unwrap_or_else(|| TypeSummary::empty(kind))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
