//! Proleptic Julian calendar.
//!
//! Every fourth year is a leap year with no century exception. There is no
//! year zero: 1 BC is year -1 and is followed directly by AD 1. Ordinal day 1
//! is Julian 0001-01-01, two days before Gregorian 0001-01-01.

use crate::date::CalendarDate;
use crate::fields::{DateFields, DateInput, DateTags};
use crate::gregorian::{CUMULATIVE, CUMULATIVE_LEAP, DAYS_PER_MONTH};
use crate::kind::CalendarKind;
use crate::ordinal::RataDie;
use crate::system::{self, CalendarSystem, CumulativeDays};

/// Astronomical year number: 1 BC becomes 0, 2 BC becomes -1. An input year
/// of 0 is read as 1 BC.
fn astronomical(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// Historical year number for an astronomical year.
fn historical(year: i32) -> i32 {
    if year <= 0 { year - 1 } else { year }
}

/// Descriptor for the proleptic Julian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JulianCalendar;

impl CalendarSystem for JulianCalendar {
    const KIND: CalendarKind = CalendarKind::Julian;
    const JD_EPOCH: f64 = 1_721_422.5;
    const WEEKDAY_PHASE: i64 = -2;
    const MEAN_YEAR_DAYS: f64 = 365.25;

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

    fn is_leap_year(year: i32) -> bool {
        astronomical(year).rem_euclid(4) == 0
    }

    fn year_start(year: i32) -> i64 {
        let prior = astronomical(year) as i64 - 1;
        365 * prior + prior.div_euclid(4) + 1
    }

    fn cumulative_days(year: i32) -> CumulativeDays {
        if Self::is_leap_year(year) {
            CUMULATIVE_LEAP
        } else {
            CUMULATIVE
        }
    }

    fn next_year(year: i32) -> i32 {
        if year == -1 { 1 } else { year + 1 }
    }

    fn prev_year(year: i32) -> i32 {
        if year == 1 { -1 } else { year - 1 }
    }

    fn normalize_month(year: i32, month: i32) -> (i32, u8) {
        let zero = month - 1;
        let year = historical(astronomical(year) + zero.div_euclid(12));
        (year, (zero.rem_euclid(12) + 1) as u8)
    }

    fn approx_year(day: i64) -> i32 {
        historical(((day - 1) as f64 / Self::MEAN_YEAR_DAYS).floor() as i32 + 1)
    }
}

/// A date and time in the proleptic Julian calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct JulianDate {
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

impl JulianDate {
    /// Builds a date from any construction input.
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::from_rata_die(system::resolve_input::<JulianCalendar>(input.into()))
    }

    /// Midnight at the start of the given day.
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(DateFields::ymd(year, month, day))
    }

    /// Builds a date from an ordinal in Julian numbering.
    pub fn from_rata_die(rd: RataDie) -> Self {
        let rd = rd.clamped();
        let f = system::from_rata_die::<JulianCalendar>(rd);
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

impl CalendarDate for JulianDate {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Julian
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

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rd.partial_cmp(&other.rd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Era;
    use crate::weekday::Weekday;

    #[test]
    fn leap_years_have_no_century_exception() {
        assert!(JulianCalendar::is_leap_year(1900));
        assert!(JulianCalendar::is_leap_year(2000));
        assert!(JulianCalendar::is_leap_year(1700));
        assert!(!JulianCalendar::is_leap_year(1901));
    }

    #[test]
    fn bc_leap_years_are_shifted() {
        // 1 BC, 5 BC, 9 BC are leap years.
        assert!(JulianCalendar::is_leap_year(-1));
        assert!(JulianCalendar::is_leap_year(-5));
        assert!(!JulianCalendar::is_leap_year(-4));
    }

    #[test]
    fn no_year_zero() {
        assert_eq!(JulianCalendar::next_year(-1), 1);
        assert_eq!(JulianCalendar::prev_year(1), -1);
        let last_bc = JulianDate::ymd(-1, 12, 31);
        let next = last_bc.add_days(1);
        assert_eq!((next.year(), next.month(), next.day()), (1, 1, 1));
        assert_eq!(last_bc.era(), Era::Before);
        assert_eq!(next.era(), Era::Current);
    }

    #[test]
    fn month_rollover_skips_year_zero() {
        let date = JulianDate::ymd(-1, 13, 1);
        assert_eq!((date.year(), date.month()), (1, 1));
        let date = JulianDate::ymd(1, 0, 1);
        assert_eq!((date.year(), date.month()), (-1, 12));
    }

    #[test]
    fn epoch_alignment() {
        assert_eq!(JulianDate::ymd(1, 1, 1).rata_die().get(), 1.0);
        // Julian 1582-10-04 was followed by Gregorian 1582-10-15.
        let julian = JulianDate::ymd(1582, 10, 4);
        assert_eq!(julian.julian_day().get(), 2_299_159.5);
        assert_eq!(julian.day_of_week(), Weekday::Thursday);
    }

    #[test]
    fn gregorian_2000_is_julian_dec_19() {
        let date = JulianDate::new(DateInput::JulianDay(2_451_544.5));
        assert_eq!((date.year(), date.month(), date.day()), (1999, 12, 19));
    }

    #[test]
    fn year_start_continuity() {
        for year in [-10, -2, -1, 1, 2, 1900, 2000] {
            let start = JulianCalendar::year_start(year);
            let next = JulianCalendar::year_start(JulianCalendar::next_year(year));
            let expected = if JulianCalendar::is_leap_year(year) { 366 } else { 365 };
            assert_eq!(next - start, expected, "year {year}");
        }
    }
}
