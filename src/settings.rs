use tally_config::{Config, ConfigManager};
use tally_engine::{AggregationOptions, CoreResult};

use crate::{utils::paths, TallyResult};

/// Converts persisted preferences into validated engine options.
pub fn options_from_config(config: &Config) -> CoreResult<AggregationOptions> {
    AggregationOptions::new(
        config.trend_window_days,
        config.max_trend_buckets,
        config.radar_top_n,
    )
}

/// Config manager rooted at the application data directory.
pub fn config_manager() -> TallyResult<ConfigManager> {
    Ok(ConfigManager::with_base_dir(paths::app_data_dir())?)
}

pub fn load_options() -> TallyResult<AggregationOptions> {
    let manager = config_manager()?;
    let config = manager.load()?;
    tracing::debug!(path = %manager.config_path().display(), "loaded aggregation settings");
    Ok(options_from_config(&config)?)
}
