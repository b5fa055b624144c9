use thiserror::Error as ThisError;

use crate::constants::MIN_CYCLE_POINTS;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("need at least {min} points to build a tour, found {found}", min = MIN_CYCLE_POINTS)]
    InsufficientPoints { found: usize },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub(crate) fn ensure_cycle_points(found: usize) -> Result<()> {
        if found < MIN_CYCLE_POINTS {
            return Err(Self::InsufficientPoints { found });
        }
        Ok(())
    }
}
