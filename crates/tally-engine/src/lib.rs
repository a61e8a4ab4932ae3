//! tally-engine
//!
//! Aggregation logic for transaction snapshots.
//! Depends on tally-domain. No storage, no terminal I/O, no wall-clock reads
//! outside of [`time::SystemClock`].

pub mod accumulator;
pub mod analytics_service;
pub mod engine;
pub mod error;
pub mod options;
pub mod report_service;
pub mod time;
pub mod validation;


pub use analytics_service::AnalyticsService;
pub use engine::{AggregateReport, AggregationEngine};
pub use error::{CoreError, CoreResult};
pub use options::AggregationOptions;
pub use report_service::{PeriodReport, ReportService};
pub use time::{Clock, FixedClock, SystemClock};
