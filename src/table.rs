//! Per-year month lengths of the Bikram Sambat calendar.
//!
//! BS month lengths are fixed by almanac each year and cannot be derived
//! from a formula, so the table is data. It ships with a built-in range and
//! can be extended at runtime or from a JSON resource.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    BUILTIN_CALENDAR, MAX_MONTH_LENGTH, MAX_YEAR_LENGTH, MIN_MONTH_LENGTH, MIN_YEAR_LENGTH,
    MONTHS_PER_YEAR,
};
use crate::types::BsMonth;

/// Month lengths of one year, Baishakh first
pub type YearRow = [u8; MONTHS_PER_YEAR];

/// Error type for calendar table construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row did not contain exactly twelve month lengths.
    #[error("Year {year} has {count} months (expected {})", MONTHS_PER_YEAR)]
    MonthCount { year: u16, count: usize },

    /// A month length outside 29..=32.
    #[error(
        "Year {year} month {month} has {length} days (must be {}-{})",
        MIN_MONTH_LENGTH,
        MAX_MONTH_LENGTH
    )]
    MonthLength { year: u16, month: u8, length: u8 },

    /// A year whose months do not add up to a real year.
    #[error(
        "Year {year} totals {total} days (must be {} or {})",
        MIN_YEAR_LENGTH,
        MAX_YEAR_LENGTH
    )]
    YearLength { year: u16, total: u16 },

    /// Malformed JSON resource.
    #[error("Invalid calendar table: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource could not be read.
    #[error("Could not read calendar table: {0}")]
    Io(#[from] std::io::Error),
}

/// Mapping from BS year to its twelve month lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u16, Vec<u8>>", into = "BTreeMap<u16, Vec<u8>>")]
pub struct CalendarTable {
    years: BTreeMap<u16, YearRow>,
}

impl CalendarTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the years this crate ships with
    pub fn builtin() -> Self {
        Self {
            years: BUILTIN_CALENDAR.into_iter().collect(),
        }
    }

    /// Parses a JSON object of `"year": [lengths..]` rows
    ///
    /// # Errors
    /// Returns `TableError` if the JSON is malformed or any row is invalid.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON table from disk
    ///
    /// # Errors
    /// Returns `TableError::Io` if the file can't be read, otherwise as [`Self::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Adds or replaces one year after validating it
    ///
    /// # Errors
    /// Returns `TableError` if the row has the wrong shape or totals.
    pub fn insert(&mut self, year: u16, months: &[u8]) -> Result<(), TableError> {
        let row = validate_row(year, months)?;
        if self.years.insert(year, row).is_some() {
            debug!(year, "replaced calendar row");
        }
        Ok(())
    }

    /// Merges every row of `other` over this table
    pub fn extend(&mut self, other: Self) {
        self.years.extend(other.years);
    }

    /// Month lengths for `year`, if covered
    pub fn year(&self, year: u16) -> Option<&YearRow> {
        self.years.get(&year)
    }

    /// Length of one month, if the year is covered
    pub fn month_length(&self, year: u16, month: BsMonth) -> Option<u8> {
        self.year(year).map(|row| row[month.index() as usize])
    }

    /// Total days in `year`, if covered
    pub fn year_length(&self, year: u16) -> Option<u16> {
        self.year(year)
            .map(|row| row.iter().map(|&d| u16::from(d)).sum())
    }

    /// Whether `year` has a row
    pub fn contains(&self, year: u16) -> bool {
        self.years.contains_key(&year)
    }

    /// First and last covered years
    pub fn coverage(&self) -> Option<(u16, u16)> {
        let first = self.years.keys().next()?;
        let last = self.years.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

fn validate_row(year: u16, months: &[u8]) -> Result<YearRow, TableError> {
    let row: YearRow = months.try_into().map_err(|_| TableError::MonthCount {
        year,
        count: months.len(),
    })?;

    for (i, &length) in row.iter().enumerate() {
        if !(MIN_MONTH_LENGTH..=MAX_MONTH_LENGTH).contains(&length) {
            return Err(TableError::MonthLength {
                year,
                // i < 12
                month: i as u8,
                length,
            });
        }
    }

    let total: u16 = row.iter().map(|&d| u16::from(d)).sum();
    if !(MIN_YEAR_LENGTH..=MAX_YEAR_LENGTH).contains(&total) {
        return Err(TableError::YearLength { year, total });
    }

    Ok(row)
}

impl TryFrom<BTreeMap<u16, Vec<u8>>> for CalendarTable {
    type Error = TableError;

    fn try_from(value: BTreeMap<u16, Vec<u8>>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (year, months) in value {
            table.insert(year, &months)?;
        }
        Ok(table)
    }
}

impl From<CalendarTable> for BTreeMap<u16, Vec<u8>> {
    fn from(table: CalendarTable) -> Self {
        table
            .years
            .into_iter()
            .map(|(year, row)| (year, row.to_vec()))
            .collect()
    }
}
