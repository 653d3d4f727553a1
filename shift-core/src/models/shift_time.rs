use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("static pattern compiles"));

/// A wall-clock time of day in 24-hour `HH:MM` form.
///
/// Shift times carry no date; a shift whose end is earlier than its start
/// is read as running past midnight (see
/// [`DurationCalculator`](crate::DurationCalculator)).
///
/// # Example
///
/// ```
/// use shift_core::ShiftTime;
///
/// let t = ShiftTime::parse("22:30").unwrap();
/// assert_eq!(t.minutes_of_day(), 1350);
/// assert_eq!(t.to_string(), "22:30");
/// assert!(ShiftTime::parse("9:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftTime(NaiveTime);

impl ShiftTime {
    /// Parses a strict `HH:MM` string (two-digit hour 00-23, two-digit minute).
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidTime {
            input: input.to_string(),
        };
        if !HH_MM.is_match(input) {
            return Err(invalid());
        }
        NaiveTime::parse_from_str(input, "%H:%M")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Parses an optional time where an empty (or blank) string means "unset".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, ModelError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Self::parse(trimmed).map(Some)
        }
    }

    /// Builds a time from an hour and minute, `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl fmt::Display for ShiftTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for ShiftTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShiftTime {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShiftTime> for String {
    fn from(value: ShiftTime) -> Self {
        value.to_string()
    }
}

/// Formats an optional time for display, using an empty string when unset.
pub fn opt_time_display(time: &Option<ShiftTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_two_digit_times() {
        let t = ShiftTime::parse("09:05").unwrap();

        assert_eq!(t.minutes_of_day(), 545);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn parse_accepts_day_boundaries() {
        assert_eq!(ShiftTime::parse("00:00").unwrap().minutes_of_day(), 0);
        assert_eq!(ShiftTime::parse("23:59").unwrap().minutes_of_day(), 1439);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["9:00", "24:00", "12:60", "12-30", "", " 12:30", "12:30:00"] {
            assert_eq!(
                ShiftTime::parse(input),
                Err(ModelError::InvalidTime {
                    input: input.to_string()
                }),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn parse_optional_treats_blank_as_unset() {
        assert_eq!(ShiftTime::parse_optional("").unwrap(), None);
        assert_eq!(ShiftTime::parse_optional("   ").unwrap(), None);
        assert_eq!(
            ShiftTime::parse_optional(" 18:00 ").unwrap(),
            ShiftTime::from_hm(18, 0)
        );
    }

    #[test]
    fn from_hm_rejects_out_of_range() {
        assert!(ShiftTime::from_hm(24, 0).is_none());
        assert!(ShiftTime::from_hm(23, 60).is_none());
    }

    #[test]
    fn opt_time_display_is_empty_when_unset() {
        assert_eq!(opt_time_display(&None), "");
        assert_eq!(opt_time_display(&ShiftTime::from_hm(6, 0)), "06:00");
    }
}
