//! Arithmetic Hebrew calendar.
//!
//! Months are numbered from Nisan (1) to Adar (12), with Adar II (13) in leap
//! years, but the year begins at Tishri (7). Field order inside a year is
//! therefore `7, 8, .., 12, [13], 1, .., 6`; ordinals are monotonic in that
//! civil order.
//!
//! The day begins at sunset, modelled as 18:00. Ordinal day 1 starts at
//! 18:00 on the eve of Tishri 1, AM 1, and the hour field counts from that
//! moment: hour 0 is 18:00 of the previous civil evening.

use crate::date::CalendarDate;
use crate::fields::{DateFields, DateInput, DateTags};
use crate::kind::CalendarKind;
use crate::ordinal::RataDie;
use crate::system::{self, CalendarSystem, CumulativeDays, accumulate};

/// Parts (1/1080 hour) in a day.
const PARTS_PER_DAY: i64 = 25_920;

/// Parts beyond 29 days in a mean lunar month.
const MONTH_EXTRA_PARTS: i64 = 13_753;

/// Parts of the molad of Tishri, AM 1, counted from the start of the epoch
/// day.
const MOLAD_TISHRI_PARTS: i64 = 12_084;

const MONTH_NAMES: [&str; 13] = [
    "Nisan", "Iyyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Heshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// Month name, with Adar reported as "Adar I" in leap years.
pub(crate) fn month_name(month: u8, year: i32) -> Option<&'static str> {
    match month {
        12 if HebrewCalendar::is_leap_year(year) => Some("Adar I"),
        13 if !HebrewCalendar::is_leap_year(year) => None,
        _ => MONTH_NAMES.get((month as usize).checked_sub(1)?).copied(),
    }
}

/// Days from the epoch to the molad of Tishri of `year`, after the
/// weekday postponement that keeps Rosh Hashanah off Sunday, Wednesday and
/// Friday.
fn elapsed_days(year: i32) -> i64 {
    let months = (235 * year as i64 - 234).div_euclid(19);
    let parts = MOLAD_TISHRI_PARTS + MONTH_EXTRA_PARTS * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra postponement keeping every year length in the legal set.
fn year_length_correction(year: i32) -> i64 {
    let this = elapsed_days(year);
    if elapsed_days(year + 1) - this == 356 {
        2
    } else if this - elapsed_days(year - 1) == 382 {
        1
    } else {
        0
    }
}

/// Descriptor for the arithmetic Hebrew calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HebrewCalendar;

impl HebrewCalendar {
    /// Days (0, 1 or 2) by which Rosh Hashanah of `year` is pushed past the
    /// dehiyyah-adjusted molad to keep year lengths legal.
    pub fn new_year_delay(year: i32) -> u8 {
        year_length_correction(year) as u8
    }

    /// Whether Heshvan has 30 days in `year` (a "complete" year).
    pub fn is_long_heshvan(year: i32) -> bool {
        Self::days_in_year(year) % 10 == 5
    }

    /// Whether Kislev has 29 days in `year` (a "deficient" year).
    pub fn is_short_kislev(year: i32) -> bool {
        Self::days_in_year(year) % 10 == 3
    }
}

impl CalendarSystem for HebrewCalendar {
    const KIND: CalendarKind = CalendarKind::Hebrew;
    const JD_EPOCH: f64 = 347_996.25;
    const WEEKDAY_PHASE: i64 = 0;
    const MEAN_YEAR_DAYS: f64 = 365.2468;

    fn months_in_year(year: i32) -> u8 {
        if Self::is_leap_year(year) { 13 } else { 12 }
    }

    fn month_length(month: u8, year: i32) -> u8 {
        match month {
            2 | 4 | 6 | 10 => 29,
            13 if Self::is_leap_year(year) => 29,
            13 => 0,
            12 if !Self::is_leap_year(year) => 29,
            8 if !Self::is_long_heshvan(year) => 29,
            9 if Self::is_short_kislev(year) => 29,
            1..=12 => 30,
            _ => 0,
        }
    }

    /// Seven leap years in every 19-year cycle.
    fn is_leap_year(year: i32) -> bool {
        (7 * year as i64 + 1).rem_euclid(19) < 7
    }

    fn year_start(year: i32) -> i64 {
        elapsed_days(year) + year_length_correction(year) + 1
    }

    fn cumulative_days(year: i32) -> CumulativeDays {
        let count = Self::months_in_year(year) as usize;
        let mut lengths = [0u8; 13];
        for (position, len) in lengths.iter_mut().enumerate().take(count) {
            *len = Self::month_length(Self::month_at(position, year), year);
        }
        accumulate(&lengths[..count])
    }

    fn month_at(position: usize, year: i32) -> u8 {
        let count = Self::months_in_year(year) as usize;
        let tail = count - 6;
        if position < tail {
            position as u8 + 7
        } else {
            (position - tail) as u8 + 1
        }
    }

    fn position_of(month: u8, year: i32) -> usize {
        if month >= 7 {
            month as usize - 7
        } else {
            (Self::months_in_year(year) as usize - 6) + (month as usize - 1)
        }
    }

    /// Unlike the other calendars, month numbers do not carry into
    /// neighbouring years: out-of-range values are clamped to `1..=13`, and
    /// Adar II in a common year becomes Adar.
    fn normalize_month(year: i32, month: i32) -> (i32, u8) {
        let month = month.clamp(1, 13) as u8;
        if month == 13 && !Self::is_leap_year(year) {
            (year, 12)
        } else {
            (year, month)
        }
    }
}

/// A date and time in the Hebrew calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct HebrewDate {
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

impl HebrewDate {
    /// Builds a date from any construction input.
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::from_rata_die(system::resolve_input::<HebrewCalendar>(input.into()))
    }

    /// Start of the given day (18:00 on the previous civil evening).
    pub fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self::new(DateFields::ymd(year, month, day))
    }

    /// Builds a date from an ordinal in Hebrew numbering.
    pub fn from_rata_die(rd: RataDie) -> Self {
        let rd = rd.clamped();
        let f = system::from_rata_die::<HebrewCalendar>(rd);
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

    /// Name of this date's month.
    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month, self.year)
    }
}

impl CalendarDate for HebrewDate {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Hebrew
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

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.rd.partial_cmp(&other.rd)
    }
}
