//! Gregorian to Bikram Sambat (BS) conversion, rendered the way Nepali news
//! sites print their masthead date: Devanagari numerals, Nepali month and
//! weekday names, 12-hour time.
//!
//! ```
//! use bs_date::{BsConverter, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! // 2025-01-14 00:00 in Kathmandu
//! let instant = Utc.with_ymd_and_hms(2025, 1, 13, 18, 15, 0).unwrap();
//! let converter = BsConverter::new().with_clock(FixedClock::new(instant));
//! assert_eq!(
//!     converter.current_bs_date_time().unwrap(),
//!     "२०८१ साल माघ १ गते, मंगलबार (समय: १२:०० पूर्वाह्न)"
//! );
//! ```

mod clock;
mod config;
mod consts;
mod converter;
mod datetime;
mod digits;
mod prelude;
mod table;
mod types;

pub use clock::{Clock, ClockError, FixedClock, SystemClock};
pub use config::{AnchorConfig, ConfigError, ConverterConfig};
pub use consts::*;
pub use converter::{AnchorPoint, BsConverter, ConversionError};
pub use datetime::BsDateTime;
pub use digits::{to_ascii_digits, to_devanagari_digits};
pub use table::{CalendarTable, TableError, YearRow};
pub use types::{BsDay, BsMonth, BsYear, weekday_name};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date in Bikram Sambat. Ordering is lexicographic over
/// (year, month, day), which matches chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.number()", "day.get()")]
pub struct BsDate {
    year:  BsYear,
    month: BsMonth,
    day:   BsDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be non-zero)", "_0")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {}", "_0")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BsDate {
    /// Creates a date from already validated parts
    pub const fn new(year: BsYear, month: BsMonth, day: BsDay) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw parts; `month_index` is 0-based
    ///
    /// # Errors
    /// Returns `ParseError` if any part is out of its table-independent range.
    pub fn from_parts(year: u16, month_index: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  BsYear::new(year)?,
            month: BsMonth::new(month_index)?,
            day:   BsDay::new(day)?,
        })
    }

    pub(crate) const fn from_const(year: u16, month_index: u8, day: u8) -> Self {
        Self {
            year:  BsYear::new_const(year),
            month: BsMonth::new_const(month_index),
            day:   BsDay::new_const(day),
        }
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the 0-based month index
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> BsYear {
        self.year
    }

    pub const fn month_typed(&self) -> BsMonth {
        self.month
    }

    pub const fn day_typed(&self) -> BsDay {
        self.day
    }

    /// Short form in Devanagari numerals, e.g. `२०८१/११/२३`
    pub fn to_nepali_string(&self) -> String {
        to_devanagari_digits(self)
    }

    /// Long form without weekday or time, e.g. `२०८१ साल माघ १ गते`
    pub fn to_long_string(&self) -> String {
        format!(
            "{} {YEAR_WORD} {} {} {DAY_WORD}",
            to_devanagari_digits(self.year()),
            self.month.name(),
            to_devanagari_digits(self.day()),
        )
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    /// Accepts `YYYY/MM/DD` or `YYYY-MM-DD` in ASCII or Devanagari digits.
    /// The month is 1-based here, as printed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ascii = to_ascii_digits(s.trim());
        if ascii.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_slash = ascii.contains(DATE_SEPARATOR);
        let has_hyphen = ascii.contains(ISO_DATE_SEPARATOR);
        let separator = match (has_slash, has_hyphen) {
            (true, false) => DATE_SEPARATOR,
            (false, true) => ISO_DATE_SEPARATOR,
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {ISO_DATE_SEPARATOR})"
                )));
            },
            (false, false) => return Err(ParseError::InvalidFormat(s.to_owned())),
        };

        let parts: Vec<&str> = ascii.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 components separated by '{separator}', found {}",
                parts.len()
            )));
        };

        Ok(Self {
            year:  BsYear::new(Self::parse_u16(year)?)?,
            month: BsMonth::from_number(Self::parse_u8(month)?)?,
            day:   BsDay::new(Self::parse_u8(day)?)?,
        })
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
