use shift_core::{ModelError, ShiftTime};
use thiserror::Error;

/// Error returned when a card edit argument cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEditError {
    #[error("invalid card edit '{input}', expected INDEX=HH:MM-HH:MM")]
    Shape { input: String },

    #[error("invalid card index in '{input}'")]
    Index { input: String },

    #[error(transparent)]
    Time(#[from] ModelError),
}

/// A whole-shift edit for one card, e.g. `2=22:00-06:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTimeEdit {
    pub index: usize,
    pub start: ShiftTime,
    pub end: ShiftTime,
}

/// Parses `INDEX=HH:MM-HH:MM`. Surrounding whitespace is ignored.
pub fn parse_card_edit(s: &str) -> Result<CardTimeEdit, ParseEditError> {
    let shape = || ParseEditError::Shape {
        input: s.to_string(),
    };
    let (index, range) = s.trim().split_once('=').ok_or_else(shape)?;
    let (start, end) = range.split_once('-').ok_or_else(shape)?;
    let index = index.trim().parse().map_err(|_| {
        tracing::warn!(input = %s, "invalid card index");
        ParseEditError::Index {
            input: s.to_string(),
        }
    })?;

    Ok(CardTimeEdit {
        index,
        start: ShiftTime::parse(start.trim())?,
        end: ShiftTime::parse(end.trim())?,
    })
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}
