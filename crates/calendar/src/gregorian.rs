//! Proleptic Gregorian calendar.
//!
//! Year zero exists (it is 1 BC) and negative years continue backwards.
//! Ordinal day 1 is 0001-01-01.

use crate::date::CalendarDate;
use crate::fields::{DateFields, DateInput, DateTags};
use crate::kind::CalendarKind;
use crate::ordinal::RataDie;
use crate::system::{self, CalendarSystem, CumulativeDays};

/// Days before each month, common year.
pub(crate) const CUMULATIVE: CumulativeDays =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365, 365];

/// Days before each month, leap year.
pub(crate) const CUMULATIVE_LEAP: CumulativeDays =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366, 366];

/// Number of days in each month (index 0 unused), common year.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name shared by the Gregorian and Julian calendars.
pub(crate) fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Descriptor for the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

impl CalendarSystem for GregorianCalendar {
    const KIND: CalendarKind = CalendarKind::Gregorian;
    const JD_EPOCH: f64 = 1_721_424.5;
    const WEEKDAY_PHASE: i64 = 0;
    const MEAN_YEAR_DAYS: f64 = 365.2425;

    fn months_in_year(_year: i32) -> u8 {
        12
    }

    fn month_length(month: u8, year: i32) -> u8 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            1..=12 => DAYS_PER_MONTH[month as usize],
            _ => 0,
        }
    }

    /// Divisible by 4, except centuries not divisible by 400.
    fn is_leap_year(year: i32) -> bool {
        year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
    }

    fn year_start(year: i32) -> i64 {
        let prior = year as i64 - 1;
        365 * prior + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400) + 1
    }

    fn cumulative_days(year: i32) -> CumulativeDays {
        if Self::is_leap_year(year) {
            CUMULATIVE_LEAP
        } else {
            CUMULATIVE
        }
    }
}

/// A date and time in the proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct GregorianDate {
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

impl GregorianDate {
    /// Builds a date from any construction input. Out-of-range fields roll
    /// over.
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::from_rata_die(system::resolve_input::<GregorianCalendar>(input.into()))
    }

    /// Midnight at the start of the given day.
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(DateFields::ymd(year, month, day))
    }

    /// Builds a date from an ordinal in Gregorian numbering, clamped to
    /// `±MAX_ORDINAL_DAYS`.
    pub fn from_rata_die(rd: RataDie) -> Self {
        let rd = rd.clamped();
        let f = system::from_rata_die::<GregorianCalendar>(rd);
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

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        GregorianCalendar::month_length(self.month, self.year)
    }
}

impl CalendarDate for GregorianDate {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
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

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rd.partial_cmp(&other.rd)
    }
}
