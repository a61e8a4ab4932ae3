use std::sync::Arc;

use chrono::NaiveDate;
use tally_domain::{RawTransaction, ReportPeriod};

use crate::{
    AggregateReport, AggregationEngine, AggregationOptions, Clock, CoreResult, PeriodReport,
    ReportService, SystemClock,
};

/// Binds the engine to a clock and a fixed set of options.
///
/// Holds no snapshot state; callers fetch records and ask for fresh views
/// after every change to the store.
#[derive(Clone)]
pub struct AnalyticsService {
    clock: Arc<dyn Clock>,
    options: AggregationOptions,
}

impl AnalyticsService {
    pub fn new(options: AggregationOptions) -> Self {
        Self::with_clock(Arc::new(SystemClock), options)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, options: AggregationOptions) -> Self {
        Self { clock, options }
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn snapshot(&self, records: &[RawTransaction]) -> AggregateReport {
        AggregationEngine::aggregate(records, self.today(), &self.options)
    }

    pub fn period_report(
        &self,
        records: &[RawTransaction],
        period: ReportPeriod,
    ) -> CoreResult<PeriodReport> {
        ReportService::summarize_period(records, period, self.today())
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new(AggregationOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;

    #[test]
    fn snapshot_uses_injected_clock() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let service =
            AnalyticsService::with_clock(Arc::new(FixedClock::on(today)), Default::default());
        let records = vec![RawTransaction::new("2025-05-19", "Expense", "Food", "12")];

        let report = service.snapshot(&records);
        assert_eq!(report.now(), today);
        assert_eq!(report.daily_trend().len(), 1);
        assert_eq!(report.daily_trend()[0].day, "05-19");
    }

    #[test]
    fn period_report_resolves_window_from_clock() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let service =
            AnalyticsService::with_clock(Arc::new(FixedClock::on(today)), Default::default());
        let report = service
            .period_report(&[], ReportPeriod::Monthly)
            .expect("monthly window");
        assert_eq!(report.window.start, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(report.record_count, 0);
    }
}
