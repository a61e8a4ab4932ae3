use tally_domain::DateWindowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid date window: {0}")]
    Window(#[from] DateWindowError),
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
