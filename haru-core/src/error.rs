//! Error types for haru operations.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum HaruError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid repeat type '{0}'. Expected none, daily, weekly, monthly or yearly")]
    InvalidRepeatType(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for haru operations.
pub type HaruResult<T> = Result<T, HaruError>;
