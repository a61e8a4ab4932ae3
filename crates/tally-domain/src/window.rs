use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Half-open calendar range `[start, end)`.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end <= start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Window covering `first` through `last`, both days included.
    pub fn inclusive(first: NaiveDate, last: NaiveDate) -> Result<Self, DateWindowError> {
        let end = last.succ_opt().ok_or(DateWindowError::OutOfRange)?;
        Self::new(first, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of calendar days covered.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Last calendar day inside the window.
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.last_day())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
    OutOfRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must be after start"),
            DateWindowError::OutOfRange => {
                f.write_str("date window falls outside the supported calendar")
            }
        }
    }
}

impl std::error::Error for DateWindowError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Canned report ranges offered to the report generator.
pub enum ReportPeriod {
    /// The last seven calendar days, today included.
    Weekly,
    /// From the first of the current month through today.
    Monthly,
}

impl ReportPeriod {
    pub fn window_ending(self, today: NaiveDate) -> Result<DateWindow, DateWindowError> {
        let first = match self {
            ReportPeriod::Weekly => today
                .checked_sub_days(Days::new(6))
                .ok_or(DateWindowError::OutOfRange)?,
            ReportPeriod::Monthly => today.with_day(1).ok_or(DateWindowError::OutOfRange)?,
        };
        DateWindow::inclusive(first, today)
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
