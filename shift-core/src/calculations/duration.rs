//! Shift duration arithmetic.
//!
//! A shift is a start and an end wall-clock time with no date attached.
//! When the end is earlier than the start the shift is taken to run past
//! midnight, so `22:00`-`06:00` is eight hours rather than a negative span.
//!
//! # Example
//!
//! ```
//! use shift_core::{DurationCalculator, ShiftTime};
//!
//! let start = ShiftTime::parse("22:00").unwrap();
//! let end = ShiftTime::parse("06:00").unwrap();
//!
//! assert_eq!(DurationCalculator::minutes_between(start, end), 480);
//! ```

use super::summary::AggregateSummary;
use crate::models::{MINUTES_PER_DAY, ShiftTime, TimeCard};

/// Computes worked minutes per card and across a card set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationCalculator;

impl DurationCalculator {
    /// Minutes from `start` to `end`, wrapping past midnight when `end`
    /// is earlier than `start`. Equal times give zero.
    pub fn minutes_between(
        start: ShiftTime,
        end: ShiftTime,
    ) -> u32 {
        let start = start.minutes_of_day();
        let end = end.minutes_of_day();
        if end >= start {
            end - start
        } else {
            end + MINUTES_PER_DAY - start
        }
    }

    /// Worked minutes for one card, `None` while either time is unset.
    pub fn duration(card: &TimeCard) -> Option<u32> {
        match (card.start_time, card.end_time) {
            (Some(start), Some(end)) => Some(Self::minutes_between(start, end)),
            _ => None,
        }
    }

    /// Totals over the non-removed cards.
    ///
    /// Removed cards add nothing to either the day count or the minutes.
    /// A card with an unset time still counts as a day but adds no minutes.
    pub fn summarize<'a, I>(cards: I) -> AggregateSummary
    where
        I: IntoIterator<Item = &'a TimeCard>,
    {
        cards
            .into_iter()
            .filter(|card| card.is_active())
            .fold(AggregateSummary::default(), |acc, card| AggregateSummary {
                total_days: acc.total_days + 1,
                total_minutes: acc.total_minutes + Self::duration(card).unwrap_or(0),
            })
    }
}
