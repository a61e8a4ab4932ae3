use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_domain::{DateWindow, Diagnostics, MonthlyPoint, RawTransaction, ReportPeriod, Totals};

use crate::{accumulator::Accumulators, CoreResult};

/// Totals and monthly series restricted to a date range, as consumed by the
/// weekly and monthly report exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub window: DateWindow,
    pub record_count: usize,
    pub totals: Totals,
    pub monthly_series: Vec<MonthlyPoint>,
    pub diagnostics: Diagnostics,
}

pub struct ReportService;

impl ReportService {
    pub fn summarize_window(records: &[RawTransaction], window: DateWindow) -> PeriodReport {
        let mut acc = Accumulators::new();
        let diagnostics = acc.ingest(records, |txn| window.contains(txn.date));
        tracing::debug!(
            %window,
            accepted = acc.accepted(),
            rejected = diagnostics.count(),
            "summarized report window"
        );
        PeriodReport {
            window,
            record_count: acc.accepted(),
            totals: acc.totals(),
            monthly_series: acc.monthly_series(),
            diagnostics,
        }
    }

    pub fn summarize_period(
        records: &[RawTransaction],
        period: ReportPeriod,
        today: NaiveDate,
    ) -> CoreResult<PeriodReport> {
        let window = period.window_ending(today)?;
        Ok(Self::summarize_window(records, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<RawTransaction> {
        vec![
            RawTransaction::new("2025-02-27", "Income", "Salary", "500"),
            RawTransaction::new("2025-03-01", "Expense", "Food", "20"),
            RawTransaction::new("2025-03-04", "Expense", "Rent", "300"),
            RawTransaction::new("2025-03-05", "Expense", "Food", "99"),
            RawTransaction::new("2025-03-02", "Expense", "Food", "oops"),
        ]
    }

    #[test]
    fn weekly_report_covers_last_seven_days() {
        let report =
            ReportService::summarize_period(&records(), ReportPeriod::Weekly, date(2025, 3, 4))
                .expect("weekly report");

        assert_eq!(report.record_count, 3);
        assert_eq!(report.totals.total_income, dec!(500));
        assert_eq!(report.totals.total_expense, dec!(320));
        assert_eq!(report.monthly_series.len(), 2);
        assert_eq!(report.diagnostics.count(), 1);
    }

    #[test]
    fn monthly_report_is_month_to_date() {
        let report =
            ReportService::summarize_period(&records(), ReportPeriod::Monthly, date(2025, 3, 31))
                .expect("monthly report");

        assert_eq!(report.window.start, date(2025, 3, 1));
        assert_eq!(report.totals.total_income, dec!(0));
        assert_eq!(report.totals.total_expense, dec!(419));
        assert_eq!(report.totals.net_balance, dec!(-419));
        assert_eq!(report.monthly_series.len(), 1);
        assert_eq!(report.monthly_series[0].month, "2025-03");
    }
}
