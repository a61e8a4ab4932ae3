use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_MAX_TREND_BUCKETS: usize = 15;
pub const DEFAULT_RADAR_TOP_N: usize = 6;

/// Knobs for the windowed and top-N views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationOptions {
    /// Length in days of the daily trend window, `now` included.
    pub window_days: u32,
    /// Most recent non-empty days kept in the daily trend.
    pub max_trend_buckets: usize,
    /// Categories kept in each radar view.
    pub radar_top_n: usize,
}

impl AggregationOptions {
    pub fn new(window_days: u32, max_trend_buckets: usize, radar_top_n: usize) -> CoreResult<Self> {
        if window_days == 0 {
            return Err(CoreError::InvalidOptions(
                "trend window must span at least one day".into(),
            ));
        }
        Ok(Self {
            window_days,
            max_trend_buckets,
            radar_top_n,
        })
    }
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            max_trend_buckets: DEFAULT_MAX_TREND_BUCKETS,
            radar_top_n: DEFAULT_RADAR_TOP_N,
        }
    }
}
