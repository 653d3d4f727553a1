//! Error types shared by the shift domain model.

use thiserror::Error;

use crate::models::TimeField;

/// Errors raised while building or mutating the time-card model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Cards cannot be generated from an empty date selection.
    #[error("cannot generate time cards from an empty date selection")]
    EmptySelection,

    /// A point edit referred to an index outside the current generation.
    #[error("no time card with index {index}")]
    UnknownCard { index: usize },

    /// A time value was not a well-formed 24-hour `HH:MM` string.
    #[error("invalid time '{input}', expected HH:MM")]
    InvalidTime { input: String },

    /// A date value was not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

/// Errors raised when a card set is not ready for confirmation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A non-removed card is missing its start or end time.
    #[error("time card {index} has no {field} time")]
    IncompleteCard { index: usize, field: TimeField },
}
