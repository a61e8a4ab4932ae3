use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Error type covering every failure surfaced by the integration layer.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Config error: {0}")]
    Config(#[from] tally_config::ConfigError),
    #[error("Engine error: {0}")]
    Core(#[from] tally_engine::CoreError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

pub type TallyResult<T> = Result<T, TallyError>;
