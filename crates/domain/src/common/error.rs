use thiserror::Error;

use crate::alert::error::AlertError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid batch: {0}")]
    InvalidBatch(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("engine error: {0}")]
    EngineError(String),
}

impl From<AlertError> for DomainError {
    fn from(err: AlertError) -> Self {
        Self::InvalidBatch(err.to_string())
    }
}
