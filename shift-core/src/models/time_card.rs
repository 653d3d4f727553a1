use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::shift_time::ShiftTime;

/// Single-character weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Which end of a shift a point edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Start,
    End,
}

impl TimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bulk start/end applied to every freshly generated card.
///
/// Either side may be unset, in which case new cards start without that
/// time and must be filled in before confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDefaults {
    pub start: Option<ShiftTime>,
    pub end: Option<ShiftTime>,
}

impl BulkDefaults {
    pub fn new(
        start: Option<ShiftTime>,
        end: Option<ShiftTime>,
    ) -> Self {
        Self { start, end }
    }
}

/// One selected date's shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCard {
    /// Position in ascending date order within the current generation.
    pub index: usize,
    pub date: NaiveDate,
    /// `M/D(曜)` label, e.g. `6/15(土)`.
    pub display_date: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub start_time: Option<ShiftTime>,
    pub end_time: Option<ShiftTime>,
    /// Set once the user edits this card's time.
    pub modified: bool,
    /// Removed cards keep their slot but drop out of totals and submission.
    pub removed: bool,
}

impl TimeCard {
    pub fn new(
        index: usize,
        date: NaiveDate,
        defaults: BulkDefaults,
    ) -> Self {
        Self {
            index,
            date,
            display_date: display_label(date),
            day_of_week: day_of_week(date),
            start_time: defaults.start,
            end_time: defaults.end,
            modified: false,
            removed: false,
        }
    }

    /// The card's date as an ISO `YYYY-MM-DD` string.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time(
        &self,
        field: TimeField,
    ) -> Option<ShiftTime> {
        match field {
            TimeField::Start => self.start_time,
            TimeField::End => self.end_time,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

/// Weekday number with Sunday as 0.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Short Japanese label for a date: month/day and the weekday kanji.
///
/// ```
/// use chrono::NaiveDate;
/// use shift_core::display_label;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(display_label(date), "6/15(土)");
/// ```
pub fn display_label(date: NaiveDate) -> String {
    format!(
        "{}/{}({})",
        date.month(),
        date.day(),
        WEEKDAY_LABELS[usize::from(day_of_week(date))]
    )
}
