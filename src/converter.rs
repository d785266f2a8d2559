//! Gregorian <-> Bikram Sambat conversion anchored on one known
//! correspondence and walked month by month through the calendar table.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace, warn};

use crate::clock::{Clock, ClockError, SystemClock};
use crate::consts::{ANCHOR_BS, ANCHOR_GREGORIAN};
use crate::datetime::BsDateTime;
use crate::table::{CalendarTable, TableError};
use crate::types::{BsDay, BsMonth, BsYear};
use crate::{BsDate, ParseError};

/// Error type for conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The walk reached a BS year the calendar table has no row for.
    #[error("BS year {year} is not covered by the calendar table")]
    OutOfRangeYear { year: u16 },

    /// The anchor itself is not covered by the table.
    #[error("Anchor {anchor} lies outside the calendar table")]
    AnchorOutOfRange { anchor: BsDate },

    /// A BS date whose day exceeds its month's length in the table.
    #[error(
        "Invalid day {} for {}-{:02} (month has {max} days)",
        .date.day(),
        .date.year(),
        .date.month_typed().number()
    )]
    InvalidDay { date: BsDate, max: u8 },

    /// The instant's wall-clock time in the target zone is beyond chrono's range.
    #[error("Local time of {instant} is out of range")]
    LocalTimeOverflow { instant: DateTime<Utc> },

    /// The Gregorian result would not fit chrono's date range.
    #[error("Gregorian date out of range for offset of {days} days")]
    GregorianOverflow { days: i64 },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// One Gregorian date known to be a given BS date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPoint {
    gregorian: NaiveDate,
    bs:        BsDate,
}

const BUILTIN_ANCHOR: AnchorPoint = AnchorPoint {
    gregorian: match NaiveDate::from_ymd_opt(
        ANCHOR_GREGORIAN.0,
        ANCHOR_GREGORIAN.1,
        ANCHOR_GREGORIAN.2,
    ) {
        Some(date) => date,
        None => panic!("built-in anchor is not a valid Gregorian date"),
    },
    bs:        BsDate::from_const(ANCHOR_BS.0, ANCHOR_BS.1, ANCHOR_BS.2),
};

impl AnchorPoint {
    pub const fn new(gregorian: NaiveDate, bs: BsDate) -> Self {
        Self { gregorian, bs }
    }

    /// 2025-01-14 == 2081 Magh 1
    pub const fn builtin() -> Self {
        BUILTIN_ANCHOR
    }

    pub const fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub const fn bs(&self) -> BsDate {
        self.bs
    }
}

impl Default for AnchorPoint {
    fn default() -> Self {
        BUILTIN_ANCHOR
    }
}

/// Converts instants and dates to Bikram Sambat.
///
/// The calendar table, anchor, target timezone and clock are all injected;
/// [`BsConverter::new`] wires the built-in table and anchor with the
/// `Asia/Kathmandu` zone and the system clock.
pub struct BsConverter {
    table:    CalendarTable,
    anchor:   AnchorPoint,
    timezone: Tz,
    clock:    Box<dyn Clock + Send + Sync>,
}

impl fmt::Debug for BsConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BsConverter")
            .field("coverage", &self.table.coverage())
            .field("anchor", &self.anchor)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl Default for BsConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl BsConverter {
    pub fn new() -> Self {
        Self {
            table:    CalendarTable::builtin(),
            anchor:   AnchorPoint::builtin(),
            timezone: chrono_tz::Asia::Kathmandu,
            clock:    Box::new(SystemClock),
        }
    }

    /// Builds a converter from explicit parts, checking that the anchor is
    /// covered by the table.
    ///
    /// # Errors
    /// Returns `ConversionError::AnchorOutOfRange` or `InvalidDay` for an
    /// anchor the table cannot place.
    pub fn try_new(
        table: CalendarTable,
        anchor: AnchorPoint,
        timezone: Tz,
        clock: impl Clock + Send + Sync + 'static,
    ) -> Result<Self, ConversionError> {
        validate_anchor(&table, &anchor)?;
        Ok(Self {
            table,
            anchor,
            timezone,
            clock: Box::new(clock),
        })
    }

    /// Replaces the calendar table
    ///
    /// # Errors
    /// Fails if the new table does not cover the current anchor.
    pub fn with_table(mut self, table: CalendarTable) -> Result<Self, ConversionError> {
        validate_anchor(&table, &self.anchor)?;
        self.table = table;
        Ok(self)
    }

    /// Replaces the anchor
    ///
    /// # Errors
    /// Fails if the table does not cover the new anchor.
    pub fn with_anchor(mut self, anchor: AnchorPoint) -> Result<Self, ConversionError> {
        validate_anchor(&self.table, &anchor)?;
        self.anchor = anchor;
        Ok(self)
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Replaces the timezone by IANA name
    ///
    /// # Errors
    /// Returns `ConversionError::UnknownTimezone` for names chrono-tz doesn't know.
    pub fn with_timezone_name(self, name: &str) -> Result<Self, ConversionError> {
        let timezone = name
            .parse::<Tz>()
            .map_err(|_| ConversionError::UnknownTimezone(name.to_owned()))?;
        Ok(self.with_timezone(timezone))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub const fn table(&self) -> &CalendarTable {
        &self.table
    }

    pub const fn anchor(&self) -> &AnchorPoint {
        &self.anchor
    }

    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// BS date and wall-clock time of `instant` as observed in the target zone
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRangeYear` when the date falls in a year
    /// the table does not cover, and `ConversionError::LocalTimeOverflow` when
    /// the local wall-clock time can't be represented.
    pub fn convert(&self, instant: DateTime<Utc>) -> Result<BsDateTime, ConversionError> {
        let utc = instant.naive_utc();
        let offset = self.timezone.offset_from_utc_datetime(&utc).fix();
        let local = TimeDelta::try_seconds(i64::from(offset.local_minus_utc()))
            .and_then(|delta| utc.checked_add_signed(delta))
            .ok_or(ConversionError::LocalTimeOverflow { instant })?;
        let date = self.gregorian_to_bs(local.date())?;
        // chrono guarantees hour < 24 and minute < 60
        let (hour, minute) = (local.hour() as u8, local.minute() as u8);
        debug!(%instant, %local, bs = %date, "converted instant");
        Ok(BsDateTime::new(date, local.weekday(), hour, minute))
    }

    /// BS date of a calendar date in the target zone
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRangeYear` when the date falls in a year
    /// the table does not cover.
    pub fn gregorian_to_bs(&self, date: NaiveDate) -> Result<BsDate, ConversionError> {
        // Whole calendar days; NaiveDate has no DST or sub-day drift.
        let offset = date.signed_duration_since(self.anchor.gregorian).num_days();
        self.walk(offset)
    }

    /// Gregorian calendar date of a BS date
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRangeYear` for uncovered years and
    /// `ConversionError::InvalidDay` when the day exceeds the month's length.
    pub fn bs_to_gregorian(&self, date: BsDate) -> Result<NaiveDate, ConversionError> {
        let max = self.month_length(date.year(), date.month_typed())?;
        if date.day() > max {
            return Err(ConversionError::InvalidDay { date, max });
        }

        let days = self.ordinal(date)? - self.ordinal(self.anchor.bs)?;
        TimeDelta::try_days(days)
            .and_then(|delta| self.anchor.gregorian.checked_add_signed(delta))
            .ok_or(ConversionError::GregorianOverflow { days })
    }

    /// Reads the clock and converts
    ///
    /// # Errors
    /// Propagates clock failures and conversion failures.
    pub fn now(&self) -> Result<BsDateTime, ConversionError> {
        let instant = self.clock.now()?;
        self.convert(instant)
    }

    /// Current BS date and time, e.g.
    /// `२०८१ साल माघ १ गते, मंगलबार (समय: १२:०० पूर्वाह्न)`
    ///
    /// # Errors
    /// Propagates clock failures and conversion failures.
    pub fn current_bs_date_time(&self) -> Result<String, ConversionError> {
        Ok(self.now()?.to_string())
    }

    fn month_length(&self, year: u16, month: BsMonth) -> Result<u8, ConversionError> {
        self.table.month_length(year, month).ok_or_else(|| {
            warn!(year, "year not covered by calendar table");
            ConversionError::OutOfRangeYear { year }
        })
    }

    /// Moves `offset` days from the anchor, one month at a time, using the
    /// month lengths of whichever year the walk is in.
    fn walk(&self, offset: i64) -> Result<BsDate, ConversionError> {
        let mut year = self.anchor.bs.year();
        let mut month = self.anchor.bs.month_typed();
        let mut day = i64::from(self.anchor.bs.day()) + offset;

        loop {
            let length = i64::from(self.month_length(year, month)?);
            if day <= length {
                break;
            }
            day -= length;
            let (next, wrapped) = month.succ();
            if wrapped {
                year = year
                    .checked_add(1)
                    .ok_or(ConversionError::OutOfRangeYear { year })?;
            }
            month = next;
            trace!(year, month = month.index(), day, "stepped forward");
        }

        while day < 1 {
            let (prev, wrapped) = month.pred();
            if wrapped {
                year = year
                    .checked_sub(1)
                    .ok_or(ConversionError::OutOfRangeYear { year: 0 })?;
            }
            month = prev;
            day += i64::from(self.month_length(year, month)?);
            trace!(year, month = month.index(), day, "stepped back");
        }

        // 1 <= day <= month length <= 32 after both loops
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidDay(0))?;
        Ok(BsDate::new(BsYear::new(year)?, month, BsDay::new(day)?))
    }

    /// Days from the start of the anchor's year to `date`, negative before it
    fn ordinal(&self, date: BsDate) -> Result<i64, ConversionError> {
        let origin = self.anchor.bs.year();
        let mut days: i64 = 0;

        if date.year() >= origin {
            for year in origin..date.year() {
                days += self.year_length(year)?;
            }
        } else {
            for year in date.year()..origin {
                days -= self.year_length(year)?;
            }
        }

        let row = self
            .table
            .year(date.year())
            .ok_or_else(|| {
                warn!(year = date.year(), "year not covered by calendar table");
                ConversionError::OutOfRangeYear { year: date.year() }
            })?;
        days += row[..date.month_index() as usize]
            .iter()
            .map(|&d| i64::from(d))
            .sum::<i64>();

        Ok(days + i64::from(date.day()))
    }

    fn year_length(&self, year: u16) -> Result<i64, ConversionError> {
        self.table
            .year_length(year)
            .map(i64::from)
            .ok_or_else(|| {
                warn!(year, "year not covered by calendar table");
                ConversionError::OutOfRangeYear { year }
            })
    }
}

fn validate_anchor(table: &CalendarTable, anchor: &AnchorPoint) -> Result<(), ConversionError> {
    let bs = anchor.bs;
    let max = table
        .month_length(bs.year(), bs.month_typed())
        .ok_or(ConversionError::AnchorOutOfRange { anchor: bs })?;
    if bs.day() > max {
        return Err(ConversionError::InvalidDay { date: bs, max });
    }
    Ok(())
}
