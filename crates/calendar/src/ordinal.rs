//! The ordinal day axis shared by every calendar.
//!
//! Each calendar numbers its days with a floating-point [`RataDie`]: the
//! integer part counts days from that calendar's own fixed point (day 1 is
//! the first day of year 1), the fractional part is the elapsed fraction of
//! the day. A calendar relates its count to the astronomical [`JulianDay`]
//! by an additive epoch, so adding `n` to any ordinal always advances the
//! date by exactly `n` civil days.
//!
//! The weekday search primitives live here too. They only need the ordinal
//! and a per-calendar phase constant, the offset that makes
//! `(floor(rd) + phase) mod 7` the weekday index with Sunday = 0.

use crate::weekday::Weekday;

/// Milliseconds in one civil day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Julian Day of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest millisecond count whose whole seconds fit a signed 32-bit value
/// (2038-01-19T03:14:07 UTC).
pub const UNIX_TIME_MAX_MS: i64 = 2_147_483_647_000;

/// Field years are clamped to `MIN_YEAR..=MAX_YEAR` before conversion.
pub const MIN_YEAR: i32 = -1_000_000;
/// See [`MIN_YEAR`].
pub const MAX_YEAR: i32 = 1_000_000;

/// Largest ordinal magnitude, in days, a date holds. It covers every year in
/// `MIN_YEAR..=MAX_YEAR` in all four calendars and keeps millisecond
/// arithmetic well inside `i64`.
pub const MAX_ORDINAL_DAYS: f64 = 400_000_000.0;

/// A day count with time of day, in the numbering of one calendar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RataDie(f64);

impl RataDie {
    /// Wraps a raw ordinal value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Builds an ordinal from a whole day number and a millisecond offset
    /// into that day. Offsets outside `0..MS_PER_DAY` carry into
    /// neighbouring days.
    pub fn from_parts(day: i64, millis: i64) -> Self {
        let carry = millis.div_euclid(MS_PER_DAY);
        let rest = millis.rem_euclid(MS_PER_DAY);
        Self((day + carry) as f64 + rest as f64 / MS_PER_DAY as f64)
    }

    /// Returns the raw ordinal value.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Limits the ordinal to `-MAX_ORDINAL_DAYS..=MAX_ORDINAL_DAYS`; `NaN`
    /// becomes `0.0`.
    pub fn clamped(self) -> Self {
        if self.0.is_nan() {
            Self(0.0)
        } else {
            Self(self.0.clamp(-MAX_ORDINAL_DAYS, MAX_ORDINAL_DAYS))
        }
    }

    /// Returns the whole day number (the floor of the ordinal).
    pub fn day(self) -> i64 {
        self.0.floor() as i64
    }

    /// Splits the ordinal into a day number and the milliseconds elapsed in
    /// that day, rounded to the nearest millisecond.
    pub fn split(self) -> (i64, i64) {
        let total = (self.0 * MS_PER_DAY as f64).round() as i64;
        (total.div_euclid(MS_PER_DAY), total.rem_euclid(MS_PER_DAY))
    }

    /// Returns this ordinal advanced by `days` (which may be negative).
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Returns the weekday of this ordinal for a calendar with the given phase.
    pub fn day_of_week(self, phase: i64) -> Weekday {
        Weekday::from_index(self.day() + phase)
    }

    /// The latest instant on or before this one that falls on `weekday`,
    /// keeping the time of day.
    pub fn on_or_before(self, weekday: Weekday, phase: i64) -> Self {
        let back = (self.day() + phase - weekday.index() as i64).rem_euclid(7);
        Self(self.0 - back as f64)
    }

    /// The earliest instant on or after this one that falls on `weekday`.
    pub fn on_or_after(self, weekday: Weekday, phase: i64) -> Self {
        self.add_days(6.0).on_or_before(weekday, phase)
    }

    /// The latest instant strictly before this day that falls on `weekday`.
    pub fn before(self, weekday: Weekday, phase: i64) -> Self {
        self.add_days(-1.0).on_or_before(weekday, phase)
    }

    /// The earliest instant strictly after this day that falls on `weekday`.
    pub fn after(self, weekday: Weekday, phase: i64) -> Self {
        self.add_days(7.0).on_or_before(weekday, phase)
    }
}

/// An astronomical Julian Day number; day boundaries fall at noon UTC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw Julian Day value.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Converts milliseconds since the Unix epoch to a Julian Day.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(UNIX_EPOCH_JD + millis as f64 / MS_PER_DAY as f64)
    }
}

/// Applies the legacy 32-bit window to a millisecond timestamp: values
/// before 1970-01-01 or after 2038-01-19T03:14:07 UTC become `-1`.
pub fn clamp_unix_millis(millis: i64) -> i64 {
    if (0..=UNIX_TIME_MAX_MS).contains(&millis) {
        millis
    } else {
        -1
    }
}

/// Total milliseconds for a time of day; components are not range checked.
pub fn time_to_millis(hour: i32, minute: i32, second: i32, millisecond: i32) -> i64 {
    hour as i64 * 3_600_000 + minute as i64 * 60_000 + second as i64 * 1_000 + millisecond as i64
}

/// Splits milliseconds within a day into hour, minute, second and millisecond.
pub fn millis_to_time(millis: i64) -> (u8, u8, u8, u16) {
    let hour = millis / 3_600_000;
    let rest = millis % 3_600_000;
    let minute = rest / 60_000;
    let rest = rest % 60_000;
    let second = rest / 1_000;
    (hour as u8, minute as u8, second as u8, (rest % 1_000) as u16)
}
