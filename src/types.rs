use crate::consts::{MAX_DAY, MAX_MONTH_INDEX, MIN_DAY, MONTH_NAMES, WEEKDAY_NAMES};
use crate::ParseError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Bikram Sambat year. Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct BsYear(NonZeroU16);

impl BsYear {
    /// Creates a new year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// For compile-time constants; panics during const evaluation on 0
    pub(crate) const fn new_const(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(v) => Self(v),
            None => panic!("BS year must be non-zero"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for BsYear {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BsYear> for u16 {
    fn from(year: BsYear) -> Self {
        year.0.get()
    }
}

impl fmt::Display for BsYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month index in `0..=MAX_MONTH_INDEX`, Baishakh (0) through Chaitra (11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BsMonth(u8);

impl BsMonth {
    /// Baishakh, the first month of the year
    pub const BAISHAKH: Self = Self(0);
    /// Chaitra, the last month of the year
    pub const CHAITRA: Self = Self(MAX_MONTH_INDEX);

    /// Creates a month from its 0-based index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > `MAX_MONTH_INDEX`.
    pub const fn new(index: u8) -> Result<Self, ParseError> {
        if index > MAX_MONTH_INDEX {
            return Err(ParseError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// For compile-time constants; panics during const evaluation if > 11
    pub(crate) const fn new_const(index: u8) -> Self {
        assert!(index <= MAX_MONTH_INDEX, "BS month index out of range");
        Self(index)
    }

    /// Creates a month from its 1-based number, as written in short dates
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the number is outside 1..=12.
    pub const fn from_number(number: u8) -> Result<Self, ParseError> {
        if number == 0 || number > MAX_MONTH_INDEX + 1 {
            return Err(ParseError::InvalidMonth(number));
        }
        Ok(Self(number - 1))
    }

    /// 0-based index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Nepali month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// Following month, with a flag set when the year wrapped
    pub const fn succ(self) -> (Self, bool) {
        if self.0 == MAX_MONTH_INDEX {
            (Self::BAISHAKH, true)
        } else {
            (Self(self.0 + 1), false)
        }
    }

    /// Preceding month, with a flag set when the year wrapped
    pub const fn pred(self) -> (Self, bool) {
        if self.0 == 0 {
            (Self::CHAITRA, true)
        } else {
            (Self(self.0 - 1), false)
        }
    }
}

impl TryFrom<u8> for BsMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BsMonth> for u8 {
    fn from(month: BsMonth) -> Self {
        month.0
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day of month in `MIN_DAY..=MAX_DAY`. Whether it fits a particular
/// month depends on the calendar table, so that check lives there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BsDay(NonZeroU8);

impl BsDay {
    /// Creates a new day, validating the table-independent range 1..=32
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value < MIN_DAY || value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidDay(value))
    }

    /// For compile-time constants; panics during const evaluation when out of range
    pub(crate) const fn new_const(value: u8) -> Self {
        assert!(value <= MAX_DAY, "BS day out of range");
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => panic!("BS day must be non-zero"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for BsDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BsDay> for u8 {
    fn from(day: BsDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for BsDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nepali name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}
