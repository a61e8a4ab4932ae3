#![doc(test(attr(deny(warnings))))]

//! Tally Core turns a snapshot of recorded transactions into the summary
//! views a personal-finance dashboard draws: totals, monthly series,
//! category breakdowns, source flow, daily trend, weekday pattern and radar
//! profiles.
//!
//! The aggregation itself lives in [`tally_engine`]; this crate wires it to
//! persisted settings, JSON snapshots and tracing.

pub mod errors;
pub mod settings;
pub mod snapshot;
pub mod utils;

pub use errors::{TallyError, TallyResult};
pub use tally_config::{Config, ConfigManager};
pub use tally_domain as domain;
pub use tally_engine as engine;
pub use tally_engine::{
    AggregateReport, AggregationEngine, AggregationOptions, AnalyticsService, PeriodReport,
    ReportService,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the embedded build metadata.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git_hash = build.git_hash,
            profile = build.profile,
            "Tally Core tracing initialized."
        );
    });
}

/// Loads the persisted options and aggregates `records` against today's date.
pub fn analyze(records: &[domain::RawTransaction]) -> TallyResult<AggregateReport> {
    let options = settings::load_options()?;
    Ok(AnalyticsService::new(options).snapshot(records))
}
