use serde::{Deserialize, Serialize};

/// Stores user-configurable aggregation preferences.
///
/// Every field has a serde default so partially written files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Days shown in the daily trend, today included.
    #[serde(default = "Config::default_trend_window_days")]
    pub trend_window_days: u32,
    /// Most recent non-empty days kept in the daily trend.
    #[serde(default = "Config::default_max_trend_buckets")]
    pub max_trend_buckets: usize,
    /// Categories kept in each radar chart.
    #[serde(default = "Config::default_radar_top_n")]
    pub radar_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trend_window_days: Self::default_trend_window_days(),
            max_trend_buckets: Self::default_max_trend_buckets(),
            radar_top_n: Self::default_radar_top_n(),
        }
    }
}

impl Config {
    fn default_trend_window_days() -> u32 {
        30
    }

    fn default_max_trend_buckets() -> usize {
        15
    }

    fn default_radar_top_n() -> usize {
        6
    }
}
