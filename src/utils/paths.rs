use dirs::home_dir;
use std::{env, path::PathBuf};

const HOME_ENV: &str = "TALLY_HOME";
const DEFAULT_DIR_NAME: &str = ".tally";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.tally`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Where [`crate::settings::config_manager`] persists its config.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_DIR).join(CONFIG_FILE)
}
