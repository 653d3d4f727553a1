//! CSV loader for calendar date selections.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column    | Required | Type    | Notes                                     |
//! |-----------|----------|---------|-------------------------------------------|
//! | `date`    | yes      | string  | ISO `YYYY-MM-DD`                          |
//! | `removed` | no       | boolean | `true` drops the date; empty means `false` |
//!
//! ### Example
//!
//! ```csv
//! date,removed
//! 2024-06-15,
//! 2024-06-16,true
//! 2024-06-17,false
//! ```
use serde::Deserialize;
use shift_core::{DateSelection, parse_iso_date};

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    removed: Option<bool>,
}

/// Errors that can occur while loading a selection from CSV.
#[derive(Debug, thiserror::Error)]
pub enum SelectionLoadError {
    /// Structurally invalid CSV, a missing `date` column, or a `removed`
    /// cell that is not a boolean.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `date` cell was not a valid ISO date. `row` is 1-based (header
    /// excluded).
    #[error("invalid date '{date}' on row {row}")]
    InvalidDate { date: String, row: usize },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses CSV text into a selection. Rows marked removed are dropped even
/// if the same date also appears unmarked.
pub fn load_from_str(input: &str) -> Result<DateSelection, SelectionLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut selected = DateSelection::new();
    let mut removed = Vec::new();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1;
        let date = parse_iso_date(&row.date).map_err(|_| SelectionLoadError::InvalidDate {
            date: row.date.clone(),
            row: row_number,
        })?;
        if row.removed.unwrap_or(false) {
            removed.push(date);
        } else {
            selected.insert(date);
        }
    }
    for date in removed {
        selected.remove(date);
    }
    Ok(selected)
}

/// Reads a file from disk and delegates to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<DateSelection, SelectionLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SelectionLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
