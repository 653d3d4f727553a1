use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE).map_err(|_| ModelError::InvalidDate {
        input: input.to_string(),
    })
}

/// The set of calendar dates picked on the calendar step.
///
/// Dates are unique and iterate in ascending order, which is the same order
/// a lexicographic sort of their ISO strings would give.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    dates: BTreeSet<NaiveDate>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from ISO date strings. Duplicates collapse.
    pub fn from_iso_dates<I, S>(dates: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for date in dates {
            selection.insert_iso(date.as_ref())?;
        }
        Ok(selection)
    }

    /// Restores a selection carried over from a previous page load.
    ///
    /// `dates` are the previously selected dates; `removed_dates` is a
    /// comma-separated list of dates the user dropped from the shift and
    /// which must not come back. Entries are trimmed and empty entries are
    /// ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_core::DateSelection;
    ///
    /// let selection = DateSelection::restore(
    ///     ["2024-06-15", "2024-06-16", "2024-06-17"],
    ///     Some(" 2024-06-16 ,,"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(selection.to_iso_strings(), vec!["2024-06-15", "2024-06-17"]);
    /// ```
    pub fn restore<I, S>(
        dates: I,
        removed_dates: Option<&str>,
    ) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::from_iso_dates(dates)?;
        if let Some(removed) = removed_dates {
            for entry in removed.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                selection.remove(parse_iso_date(entry)?);
            }
        }
        Ok(selection)
    }

    /// Adds a date. Returns `false` if it was already selected.
    pub fn insert(
        &mut self,
        date: NaiveDate,
    ) -> bool {
        self.dates.insert(date)
    }

    pub fn insert_iso(
        &mut self,
        date: &str,
    ) -> Result<bool, ModelError> {
        Ok(self.insert(parse_iso_date(date)?))
    }

    /// Removes a date. Returns `false` if it was not selected.
    pub fn remove(
        &mut self,
        date: NaiveDate,
    ) -> bool {
        self.dates.remove(&date)
    }

    /// Toggles a date the way a calendar cell click does.
    pub fn toggle(
        &mut self,
        date: NaiveDate,
    ) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date)
        }
    }

    pub fn contains(
        &self,
        date: NaiveDate,
    ) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn to_iso_strings(&self) -> Vec<String> {
        self.iter().map(|d| d.format(ISO_DATE).to_string()).collect()
    }
}

impl FromIterator<NaiveDate> for DateSelection {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_iso_dates_sorts_and_deduplicates() {
        let selection =
            DateSelection::from_iso_dates(["2024-07-01", "2024-06-30", "2024-07-01"]).unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.to_iso_strings(), vec!["2024-06-30", "2024-07-01"]);
    }

    #[test]
    fn from_iso_dates_rejects_invalid_dates() {
        let result = DateSelection::from_iso_dates(["2024-02-30"]);

        assert_eq!(
            result,
            Err(ModelError::InvalidDate {
                input: "2024-02-30".to_string()
            })
        );
    }

    #[test]
    fn restore_excludes_removed_dates() {
        let selection =
            DateSelection::restore(["2024-06-01", "2024-06-02"], Some("2024-06-02")).unwrap();

        assert_eq!(selection.to_iso_strings(), vec!["2024-06-01"]);
    }

    #[test]
    fn restore_without_removed_param_keeps_everything() {
        let selection = DateSelection::restore(["2024-06-01", "2024-06-02"], None).unwrap();

        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn restore_ignores_removed_dates_not_selected() {
        let selection = DateSelection::restore(["2024-06-01"], Some("2024-05-31, ")).unwrap();

        assert_eq!(selection.to_iso_strings(), vec!["2024-06-01"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = DateSelection::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        assert!(selection.toggle(date));
        assert!(selection.contains(date));
        assert!(!selection.toggle(date));
        assert!(selection.is_empty());
    }
}
