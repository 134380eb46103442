//! Error type shared by the calendar library.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalError {
    #[error("month {0} is out of range (expected 0-11)")]
    MonthOutOfRange(i64),

    #[error("year {0} is out of range (must be 1 or later)")]
    YearOutOfRange(i32),

    #[error("batch must hold 1 to 3 months, got {0}")]
    BatchSize(usize),
}

pub type Result<T> = std::result::Result<T, CalError>;
