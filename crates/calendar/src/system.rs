//! Calendar descriptors and the conversion engine they share.
//!
//! A [`CalendarSystem`] is a stateless strategy: leap rule, month count,
//! month lengths, and the day number on which each year starts. Everything
//! else (fields to ordinal, ordinal to fields, weekday, week numbering) is
//! written once here, generically over the descriptor.

use chrono::Utc;

use crate::fields::{DateFields, DateInput};
use crate::kind::CalendarKind;
use crate::ordinal::{
    JulianDay, MAX_YEAR, MIN_YEAR, MS_PER_DAY, RataDie, UNIX_EPOCH_JD, millis_to_time,
};
use crate::weekday::Weekday;

/// Days before each month position, padded with the year length.
///
/// Index `i` is the number of days in the year that precede the month at
/// year position `i`; entries past the last month hold the year length.
pub type CumulativeDays = [u16; 14];

/// Arithmetic rules of one calendar.
pub trait CalendarSystem {
    /// The calendar this descriptor belongs to.
    const KIND: CalendarKind;

    /// Julian Day at ordinal `0.0`.
    const JD_EPOCH: f64;

    /// Added to the day number before reducing modulo 7 to get the weekday.
    const WEEKDAY_PHASE: i64;

    /// Mean year length in days, used to guess the year of an ordinal.
    const MEAN_YEAR_DAYS: f64;

    /// Number of months in `year`.
    fn months_in_year(year: i32) -> u8;

    /// Number of days in `month` of `year`; zero for a month that does not
    /// exist in that year.
    fn month_length(month: u8, year: i32) -> u8;

    /// Whether `year` is a leap year in this calendar.
    fn is_leap_year(year: i32) -> bool;

    /// Day number of the first day of `year`.
    fn year_start(year: i32) -> i64;

    /// Cumulative month lengths of `year`, in year order.
    fn cumulative_days(year: i32) -> CumulativeDays;

    /// The year following `year`.
    fn next_year(year: i32) -> i32 {
        year + 1
    }

    /// The year preceding `year`.
    fn prev_year(year: i32) -> i32 {
        year - 1
    }

    /// Month number at the given zero-based position in the year.
    fn month_at(position: usize, _year: i32) -> u8 {
        position as u8 + 1
    }

    /// Zero-based position of `month` in the year.
    fn position_of(month: u8, _year: i32) -> usize {
        month as usize - 1
    }

    /// Brings an out-of-range month back into `1..=months_in_year`,
    /// carrying whole years.
    fn normalize_month(year: i32, month: i32) -> (i32, u8) {
        let zero = month - 1;
        let mut year = year;
        let shift = zero.div_euclid(12);
        for _ in 0..shift {
            year = Self::next_year(year);
        }
        for _ in shift..0 {
            year = Self::prev_year(year);
        }
        (year, (zero.rem_euclid(12) + 1) as u8)
    }

    /// First guess at the year containing `day`; may be off by one.
    fn approx_year(day: i64) -> i32 {
        ((day - 1) as f64 / Self::MEAN_YEAR_DAYS).floor() as i32 + 1
    }

    /// Number of days in `year`.
    fn days_in_year(year: i32) -> u16 {
        (Self::year_start(Self::next_year(year)) - Self::year_start(year)) as u16
    }
}

/// Builds a cumulative table from month lengths given in year order.
pub(crate) fn accumulate(lengths: &[u8]) -> CumulativeDays {
    let mut table = [0u16; 14];
    let mut total = 0u16;
    for (i, slot) in table.iter_mut().enumerate().skip(1) {
        if let Some(&len) = lengths.get(i - 1) {
            total += len as u16;
        }
        *slot = total;
    }
    table
}

/// Converts calendar fields to an ordinal.
///
/// The year is first clamped to `MIN_YEAR..=MAX_YEAR`.
pub fn to_rata_die<C: CalendarSystem>(fields: &DateFields) -> RataDie {
    let year = fields.year.clamp(MIN_YEAR, MAX_YEAR);
    let (year, month) = C::normalize_month(year, fields.month);
    let table = C::cumulative_days(year);
    let position = C::position_of(month, year);
    let day = C::year_start(year) + table[position] as i64 + (fields.day as i64 - 1);
    RataDie::from_parts(day, fields.time_millis())
}

/// Converts an ordinal back to calendar fields.
///
/// The year is estimated from the mean year length and corrected by
/// stepping until the day lies in `[year_start, next_year_start)`; the month
/// is found by binary search over the cumulative table.
pub fn from_rata_die<C: CalendarSystem>(rd: RataDie) -> DateFields {
    let (day, millis) = rd.split();
    let mut year = C::approx_year(day);
    while day < C::year_start(year) {
        year = C::prev_year(year);
    }
    loop {
        let next = C::next_year(year);
        if day < C::year_start(next) {
            break;
        }
        year = next;
    }

    let day_in_year = (day - C::year_start(year)) as u16;
    let table = C::cumulative_days(year);
    let count = C::months_in_year(year) as usize;
    let position = table[..count].partition_point(|&before| before <= day_in_year) - 1;
    let (hour, minute, second, millisecond) = millis_to_time(millis);

    DateFields {
        year,
        month: C::month_at(position, year) as i32,
        day: (day_in_year - table[position]) as i32 + 1,
        hour: hour as i32,
        minute: minute as i32,
        second: second as i32,
        millisecond: millisecond as i32,
    }
}

/// Resolves any construction input to an ordinal in calendar `C`.
pub fn resolve_input<C: CalendarSystem>(input: DateInput) -> RataDie {
    match input {
        DateInput::Fields(fields) => to_rata_die::<C>(&fields),
        DateInput::UnixTime(millis) => from_unix_millis::<C>(millis),
        DateInput::JulianDay(jd) => RataDie::new(jd - C::JD_EPOCH),
        DateInput::RataDie(rd) => RataDie::new(rd),
        DateInput::Now => from_unix_millis::<C>(Utc::now().timestamp_millis()),
    }
}

/// Offset in days between this calendar's ordinal and the Unix epoch.
fn unix_epoch_offset<C: CalendarSystem>() -> f64 {
    C::JD_EPOCH - UNIX_EPOCH_JD
}

/// Ordinal for a Unix millisecond timestamp.
pub fn from_unix_millis<C: CalendarSystem>(millis: i64) -> RataDie {
    let days = millis.div_euclid(MS_PER_DAY);
    let rest = millis.rem_euclid(MS_PER_DAY);
    let base = days as f64 - unix_epoch_offset::<C>();
    RataDie::new(base + rest as f64 / MS_PER_DAY as f64)
}

/// Unix milliseconds for an ordinal, without range limits.
pub fn unix_millis<C: CalendarSystem>(rd: RataDie) -> i64 {
    ((rd.get() + unix_epoch_offset::<C>()) * MS_PER_DAY as f64).round() as i64
}

/// Julian Day of an ordinal.
pub fn julian_day<C: CalendarSystem>(rd: RataDie) -> JulianDay {
    JulianDay::new(rd.get() + C::JD_EPOCH)
}

/// Weekday of an ordinal.
pub fn day_of_week<C: CalendarSystem>(rd: RataDie) -> Weekday {
    rd.day_of_week(C::WEEKDAY_PHASE)
}

/// One-based day of the year.
pub fn day_of_year<C: CalendarSystem>(rd: RataDie, year: i32) -> u16 {
    (rd.day() - C::year_start(year) + 1) as u16
}

/// Sunday starting the first week of `year`: the week that holds the
/// year's first Thursday.
fn first_week_start<C: CalendarSystem>(year: i32) -> i64 {
    let first = RataDie::new(C::year_start(year) as f64);
    first
        .on_or_after(Weekday::Thursday, C::WEEKDAY_PHASE)
        .before(Weekday::Sunday, C::WEEKDAY_PHASE)
        .day()
}

/// Week of the year, with Sunday-based weeks anchored on the year's first
/// Thursday. Days before the first week belong to the last week of the
/// previous year; days on or after the next year's first week belong to
/// week 1 of that year.
pub fn week_of_year<C: CalendarSystem>(rd: RataDie, year: i32) -> u8 {
    let day = rd.day();
    let mut start = first_week_start::<C>(year);
    if day < start {
        start = first_week_start::<C>(C::prev_year(year));
    } else {
        let next = first_week_start::<C>(C::next_year(year));
        if day >= next {
            start = next;
        }
    }
    ((day - start).div_euclid(7) + 1) as u8
}

/// Week of the month for the given first day of week.
///
/// Week 1 starts at the first `first_day_of_week` of the month, unless four
/// or more days of the month precede it, in which case those days form
/// week 1 themselves. Fewer than four leading days make up week 0.
pub fn week_of_month<C: CalendarSystem>(
    rd: RataDie,
    day_of_month: u8,
    first_day_of_week: Weekday,
) -> u8 {
    let day = rd.day();
    let first = day - (day_of_month as i64 - 1);
    let mut start = RataDie::new(first as f64)
        .on_or_after(first_day_of_week, C::WEEKDAY_PHASE)
        .day();
    if start - first > 3 {
        start -= 7;
    }
    ((day - start).div_euclid(7) + 1) as u8
}

/// Era of a date: before or within the calendar's epoch era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Years before 1 (BCE, or before the calendar's epoch).
    Before,
    /// Years from 1 onward.
    Current,
}

impl Era {
    /// Classifies a year by sign.
    pub fn of_year(year: i32) -> Self {
        if year < 1 { Era::Before } else { Era::Current }
    }

    /// `-1` before the epoch, `1` after.
    pub fn sign(self) -> i8 {
        match self {
            Era::Before => -1,
            Era::Current => 1,
        }
    }
}
