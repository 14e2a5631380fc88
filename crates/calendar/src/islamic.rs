//! Tabular Islamic (civil) calendar.
//!
//! Twelve months alternating 30 and 29 days; the last month gains a 30th day
//! in the eleven leap years of each 30-year cycle. Ordinal day 1 is
//! 1 Muharram AH 1 (Julian 622-07-16).

use crate::date::CalendarDate;
use crate::fields::{DateFields, DateInput, DateTags};
use crate::kind::CalendarKind;
use crate::ordinal::RataDie;
use crate::system::{self, CalendarSystem, CumulativeDays};

const CUMULATIVE: CumulativeDays =
    [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 354, 354];

const CUMULATIVE_LEAP: CumulativeDays =
    [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 355, 355];

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub(crate) fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Descriptor for the tabular Islamic calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IslamicCalendar;

impl CalendarSystem for IslamicCalendar {
    const KIND: CalendarKind = CalendarKind::Islamic;
    const JD_EPOCH: f64 = 1_948_438.5;
    const WEEKDAY_PHASE: i64 = 4;
    const MEAN_YEAR_DAYS: f64 = 10_631.0 / 30.0;

    fn months_in_year(_year: i32) -> u8 {
        12
    }

    fn month_length(month: u8, year: i32) -> u8 {
        match month {
            12 if Self::is_leap_year(year) => 30,
            1..=12 if month % 2 == 1 => 30,
            1..=12 => 29,
            _ => 0,
        }
    }

    fn is_leap_year(year: i32) -> bool {
        (14 + 11 * year as i64).rem_euclid(30) < 11
    }

    fn year_start(year: i32) -> i64 {
        let year = year as i64;
        (year - 1) * 354 + (3 + 11 * year).div_euclid(30) + 1
    }

    fn cumulative_days(year: i32) -> CumulativeDays {
        if Self::is_leap_year(year) {
            CUMULATIVE_LEAP
        } else {
            CUMULATIVE
        }
    }
}

/// A date and time in the tabular Islamic calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct IslamicDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    rd: RataDie,
    tags: DateTags,
}

impl IslamicDate {
    /// Builds a date from any construction input.
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::from_rata_die(system::resolve_input::<IslamicCalendar>(input.into()))
    }

    /// Midnight at the start of the given day.
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(DateFields::ymd(year, month, day))
    }

    /// Builds a date from an ordinal in Islamic numbering.
    pub fn from_rata_die(rd: RataDie) -> Self {
        let rd = rd.clamped();
        let f = system::from_rata_die::<IslamicCalendar>(rd);
        Self {
            year: f.year,
            month: f.month as u8,
            day: f.day as u8,
            hour: f.hour as u8,
            minute: f.minute as u8,
            second: f.second as u8,
            millisecond: f.millisecond as u16,
            rd,
            tags: DateTags::default(),
        }
    }

    /// Attaches time zone and locale tags.
    pub fn with_tags(mut self, tags: DateTags) -> Self {
        self.tags = tags;
        self
    }
}

impl CalendarDate for IslamicDate {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Islamic
    }

    fn rata_die(&self) -> RataDie {
        self.rd
    }

    fn fields(&self) -> DateFields {
        DateFields {
            year: self.year,
            month: self.month as i32,
            day: self.day as i32,
            hour: self.hour as i32,
            minute: self.minute as i32,
            second: self.second as i32,
            millisecond: self.millisecond as i32,
        }
    }

    fn tags(&self) -> &DateTags {
        &self.tags
    }

    fn with_rata_die(&self, rd: RataDie) -> Self {
        Self::from_rata_die(rd).with_tags(self.tags.clone())
    }
}

impl PartialOrd for IslamicDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rd.partial_cmp(&other.rd)
    }
}
