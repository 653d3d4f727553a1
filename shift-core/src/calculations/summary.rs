use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{format_hours_minutes, split_hours_minutes};

/// Totals over the non-removed cards of a generation.
///
/// Always recomputed from the cards; never cached across mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_days: usize,
    pub total_minutes: u32,
}

impl AggregateSummary {
    /// Whole hours, `floor(total_minutes / 60)`.
    pub fn total_hours(&self) -> u32 {
        split_hours_minutes(self.total_minutes).0
    }

    /// Leftover minutes, `total_minutes mod 60`.
    pub fn remainder_minutes(&self) -> u32 {
        split_hours_minutes(self.total_minutes).1
    }

    /// `{H}時間` or `{H}時間{M}分`.
    pub fn formatted_hours(&self) -> String {
        format_hours_minutes(self.total_minutes)
    }
}

impl fmt::Display for AggregateSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}日 / {}", self.total_days, self.formatted_hours())
    }
}
