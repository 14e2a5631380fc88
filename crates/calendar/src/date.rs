//! The interface every calendar date implements.

use crate::fields::{DateFields, DateTags};
use crate::kind::CalendarKind;
use crate::ordinal::{JulianDay, RataDie, clamp_unix_millis};
use crate::system::Era;
use crate::weekday::Weekday;

/// A point in time expressed in one calendar.
///
/// Implementors store normalised fields together with the ordinal they were
/// derived from; the derived queries below are computed from those through
/// the calendar's [`CalendarKind`].
pub trait CalendarDate {
    /// The calendar of this date.
    fn kind(&self) -> CalendarKind;

    /// The ordinal in this calendar's own day numbering.
    fn rata_die(&self) -> RataDie;

    /// The normalised calendar fields.
    fn fields(&self) -> DateFields;

    /// Time zone and locale tags.
    fn tags(&self) -> &DateTags;

    /// A date of the same calendar at another ordinal, keeping the tags.
    fn with_rata_die(&self, rd: RataDie) -> Self
    where
        Self: Sized;

    /// A date of the same calendar built from (possibly out-of-range)
    /// fields, keeping the tags.
    fn with_fields(&self, fields: DateFields) -> Self
    where
        Self: Sized,
    {
        self.with_rata_die(self.kind().to_rata_die(&fields))
    }

    /// Year, in the calendar's own numbering.
    fn year(&self) -> i32 {
        self.fields().year
    }

    /// Month number; Hebrew months count from Nisan.
    fn month(&self) -> u8 {
        self.fields().month as u8
    }

    /// Day of the month, from 1.
    fn day(&self) -> u8 {
        self.fields().day as u8
    }

    /// Hour of the day; the Hebrew day starts at 18:00.
    fn hour(&self) -> u8 {
        self.fields().hour as u8
    }

    /// Minute of the hour.
    fn minute(&self) -> u8 {
        self.fields().minute as u8
    }

    /// Second of the minute.
    fn second(&self) -> u8 {
        self.fields().second as u8
    }

    /// Millisecond of the second.
    fn millisecond(&self) -> u16 {
        self.fields().millisecond as u16
    }

    /// The astronomical Julian Day of this date.
    fn julian_day(&self) -> JulianDay {
        self.kind().julian_day(self.rata_die())
    }

    /// Milliseconds since the Unix epoch, or `-1` outside
    /// 1970-01-01 ..= 2038-01-19T03:14:07 UTC.
    fn unix_time(&self) -> i64 {
        clamp_unix_millis(self.unix_time_extended())
    }

    /// Milliseconds since the Unix epoch with no range limit.
    fn unix_time_extended(&self) -> i64 {
        self.kind().unix_millis(self.rata_die())
    }

    /// Weekday of this date's day.
    fn day_of_week(&self) -> Weekday {
        self.kind().day_of_week(self.rata_die())
    }

    /// One-based day of the year, counted from the calendar's first month.
    fn day_of_year(&self) -> u16 {
        self.kind().day_of_year(self.rata_die(), self.year())
    }

    /// Week of the year, Sunday-based and anchored on the first Thursday.
    fn week_of_year(&self) -> u8 {
        self.kind().week_of_year(self.rata_die(), self.year())
    }

    /// Week of the month for a locale's first day of week.
    fn week_of_month(&self, first_day_of_week: Weekday) -> u8 {
        self.kind()
            .week_of_month(self.rata_die(), self.day(), first_day_of_week)
    }

    /// Before or within the calendar's epoch era, by the sign of the year.
    fn era(&self) -> Era {
        Era::of_year(self.year())
    }

    /// Whether this date's year is a leap year.
    fn is_leap_year(&self) -> bool {
        self.kind().is_leap_year(self.year())
    }

    /// This date moved by `days` whole days.
    fn add_days(&self, days: i64) -> Self
    where
        Self: Sized,
    {
        self.with_rata_die(self.rata_die().add_days(days as f64))
    }

    /// The latest date on or before this one falling on `weekday`.
    fn on_or_before(&self, weekday: Weekday) -> Self
    where
        Self: Sized,
    {
        let phase = self.kind().weekday_phase();
        self.with_rata_die(self.rata_die().on_or_before(weekday, phase))
    }

    /// The earliest date on or after this one falling on `weekday`.
    fn on_or_after(&self, weekday: Weekday) -> Self
    where
        Self: Sized,
    {
        let phase = self.kind().weekday_phase();
        self.with_rata_die(self.rata_die().on_or_after(weekday, phase))
    }

    /// The latest date strictly before this one falling on `weekday`.
    fn before(&self, weekday: Weekday) -> Self
    where
        Self: Sized,
    {
        let phase = self.kind().weekday_phase();
        self.with_rata_die(self.rata_die().before(weekday, phase))
    }

    /// The earliest date strictly after this one falling on `weekday`.
    fn after(&self, weekday: Weekday) -> Self
    where
        Self: Sized,
    {
        let phase = self.kind().weekday_phase();
        self.with_rata_die(self.rata_die().after(weekday, phase))
    }

    /// Sets the year, keeping the other fields.
    fn set_year(&mut self, year: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.year = year;
        *self = self.with_fields(fields);
    }

    /// Sets the month; out-of-range values go through
    /// [`CalendarSystem::normalize_month`](crate::CalendarSystem::normalize_month).
    fn set_month(&mut self, month: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.month = month;
        *self = self.with_fields(fields);
    }

    /// Sets the day of the month; overflow rolls into later months.
    fn set_day(&mut self, day: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.day = day;
        *self = self.with_fields(fields);
    }

    /// Sets the hour; overflow rolls into later days.
    fn set_hour(&mut self, hour: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.hour = hour;
        *self = self.with_fields(fields);
    }

    /// Sets the minute.
    fn set_minute(&mut self, minute: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.minute = minute;
        *self = self.with_fields(fields);
    }

    /// Sets the second.
    fn set_second(&mut self, second: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.second = second;
        *self = self.with_fields(fields);
    }

    /// Sets the millisecond.
    fn set_millisecond(&mut self, millisecond: i32)
    where
        Self: Sized,
    {
        let mut fields = self.fields();
        fields.millisecond = millisecond;
        *self = self.with_fields(fields);
    }
}
