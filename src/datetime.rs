use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use crate::consts::{ANTE_MERIDIEM, DAY_WORD, POST_MERIDIEM, TIME_LABEL, YEAR_WORD};
use crate::digits::to_devanagari_digits;
use crate::types::weekday_name;
use crate::BsDate;

/// A BS date together with the Kathmandu wall-clock weekday and time it was
/// derived from. Never stored; recompute it for every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BsDateTime {
    date:    BsDate,
    #[serde(serialize_with = "serialize_weekday")]
    weekday: Weekday,
    hour:    u8,
    minute:  u8,
}

fn serialize_weekday<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u32(weekday.num_days_from_sunday())
}

impl BsDateTime {
    /// `hour` and `minute` are local wall-clock values, already in range.
    pub(crate) const fn new(date: BsDate, weekday: Weekday, hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self {
            date,
            weekday,
            hour,
            minute,
        }
    }

    pub const fn date(&self) -> BsDate {
        self.date
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// 0..=23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial, midnight and noon both read 12
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Nepali AM/PM marker
    pub const fn meridiem(&self) -> &'static str {
        if self.hour < 12 {
            ANTE_MERIDIEM
        } else {
            POST_MERIDIEM
        }
    }

    /// Time part, e.g. `०१:०५ अपराह्न`
    pub fn time_string(&self) -> String {
        let clock = format!("{:02}:{:02}", self.hour12(), self.minute);
        format!("{} {}", to_devanagari_digits(clock), self.meridiem())
    }
}

impl fmt::Display for BsDateTime {
    /// `२०८१ साल माघ १ गते, मंगलबार (समय: १२:०० पूर्वाह्न)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {YEAR_WORD} {} {} {DAY_WORD}, {} ({TIME_LABEL}: {})",
            to_devanagari_digits(self.date.year()),
            self.date.month_typed().name(),
            to_devanagari_digits(self.date.day()),
            weekday_name(self.weekday),
            self.time_string(),
        )
    }
}
