//! Error types for white-days operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhiteDayError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid day offset: {0} (expected -1, 0 or 1)")]
    InvalidOffset(String),

    #[error(
        "Invalid count: {0} (at most {max} white days per call)",
        max = crate::enumerator::MAX_COUNT
    )]
    InvalidCount(usize),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, WhiteDayError>;
