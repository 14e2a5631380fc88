//! Construction inputs shared by all calendar dates.

use crate::ordinal::time_to_millis;

/// Raw calendar fields, as supplied by a caller.
///
/// Values are deliberately wide and unchecked: a day of 35 or an hour of 30
/// is accepted and rolls over into the following month or day when the
/// fields are converted to an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub millisecond: i32,
}

impl Default for DateFields {
    fn default() -> Self {
        Self::ymd(1, 1, 1)
    }
}

impl DateFields {
    /// Fields for midnight at the start of the given day.
    pub const fn ymd(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Sets hour, minute and second.
    pub const fn with_time(mut self, hour: i32, minute: i32, second: i32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Sets the millisecond.
    pub const fn with_millisecond(mut self, millisecond: i32) -> Self {
        self.millisecond = millisecond;
        self
    }

    /// Time of day in milliseconds; may exceed one day for rolled-over input.
    pub fn time_millis(&self) -> i64 {
        time_to_millis(self.hour, self.minute, self.second, self.millisecond)
    }

    /// The field tuple in lexicographic order.
    pub fn as_tuple(&self) -> (i32, i32, i32, i32, i32, i32, i32) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
    }
}

/// Everything a calendar date can be constructed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput {
    /// Explicit calendar fields in the target calendar.
    Fields(DateFields),
    /// Milliseconds since 1970-01-01T00:00:00 UTC.
    UnixTime(i64),
    /// Astronomical Julian Day.
    JulianDay(f64),
    /// Ordinal day number in the target calendar's own numbering.
    RataDie(f64),
    /// The host's current time.
    Now,
}

impl From<DateFields> for DateInput {
    fn from(fields: DateFields) -> Self {
        DateInput::Fields(fields)
    }
}

/// Time zone and locale tags carried on a date for later formatting.
///
/// The calendar arithmetic never looks at these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateTags {
    pub time_zone: Option<String>,
    pub locale: Option<String>,
}

impl DateTags {
    /// Sets the time zone tag.
    pub fn with_time_zone(mut self, id: impl Into<String>) -> Self {
        self.time_zone = Some(id.into());
        self
    }

    /// Sets the locale tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
