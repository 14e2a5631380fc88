//! Closed set of supported calendars and the date factory.

use std::fmt;
use std::str::FromStr;

use crate::any::AnyDate;
use crate::error::CalendarError;
use crate::fields::{DateFields, DateInput};
use crate::gregorian::{GregorianCalendar, GregorianDate};
use crate::hebrew::{HebrewCalendar, HebrewDate};
use crate::islamic::{IslamicCalendar, IslamicDate};
use crate::julian::{JulianCalendar, JulianDate};
use crate::ordinal::{JulianDay, RataDie};
use crate::system::{self, CalendarSystem};
use crate::weekday::Weekday;

/// One of the four supported calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Gregorian,
    Julian,
    Hebrew,
    Islamic,
}

/// Runs `$body` with `$sys` bound to the descriptor type of `$kind`.
macro_rules! with_system {
    ($kind:expr, $sys:ident => $body:expr) => {
        match $kind {
            CalendarKind::Gregorian => {
                type $sys = GregorianCalendar;
                $body
            }
            CalendarKind::Julian => {
                type $sys = JulianCalendar;
                $body
            }
            CalendarKind::Hebrew => {
                type $sys = HebrewCalendar;
                $body
            }
            CalendarKind::Islamic => {
                type $sys = IslamicCalendar;
                $body
            }
        }
    };
}

impl CalendarKind {
    /// Every supported calendar.
    pub const ALL: [CalendarKind; 4] = [
        CalendarKind::Gregorian,
        CalendarKind::Julian,
        CalendarKind::Hebrew,
        CalendarKind::Islamic,
    ];

    /// The string id of this calendar.
    pub fn id(self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Julian => "julian",
            CalendarKind::Hebrew => "hebrew",
            CalendarKind::Islamic => "islamic",
        }
    }

    /// Builds a date of this calendar from any construction input.
    pub fn new_date(self, input: impl Into<DateInput>) -> AnyDate {
        let input = input.into();
        match self {
            CalendarKind::Gregorian => AnyDate::Gregorian(GregorianDate::new(input)),
            CalendarKind::Julian => AnyDate::Julian(JulianDate::new(input)),
            CalendarKind::Hebrew => AnyDate::Hebrew(HebrewDate::new(input)),
            CalendarKind::Islamic => AnyDate::Islamic(IslamicDate::new(input)),
        }
    }

    /// Number of months in `year`.
    pub fn months_in_year(self, year: i32) -> u8 {
        with_system!(self, C => C::months_in_year(year))
    }

    /// Days in `month` of `year`; zero if the month does not exist.
    pub fn month_length(self, month: u8, year: i32) -> u8 {
        with_system!(self, C => C::month_length(month, year))
    }

    /// Whether `year` is a leap year in this calendar.
    pub fn is_leap_year(self, year: i32) -> bool {
        with_system!(self, C => C::is_leap_year(year))
    }

    /// Number of days in `year`.
    pub fn days_in_year(self, year: i32) -> u16 {
        with_system!(self, C => C::days_in_year(year))
    }

    /// Months of `year` in the order they occur.
    pub fn months_in_order(self, year: i32) -> Vec<u8> {
        with_system!(self, C => (0..C::months_in_year(year) as usize)
            .map(|position| C::month_at(position, year))
            .collect())
    }

    /// English name of `month` in `year`, if the month exists.
    pub fn month_name(self, month: u8, year: i32) -> Option<&'static str> {
        match self {
            CalendarKind::Gregorian | CalendarKind::Julian => {
                crate::gregorian::month_name(month)
            }
            CalendarKind::Hebrew => crate::hebrew::month_name(month, year),
            CalendarKind::Islamic => crate::islamic::month_name(month),
        }
    }

    /// Julian Day at ordinal zero.
    pub fn jd_epoch(self) -> f64 {
        with_system!(self, C => C::JD_EPOCH)
    }

    /// Weekday phase constant of this calendar's ordinal.
    pub fn weekday_phase(self) -> i64 {
        with_system!(self, C => C::WEEKDAY_PHASE)
    }

    /// Day number of the first day of `year`.
    pub fn year_start(self, year: i32) -> i64 {
        with_system!(self, C => C::year_start(year))
    }

    /// Ordinal of `fields` in this calendar's numbering.
    pub fn to_rata_die(self, fields: &DateFields) -> RataDie {
        with_system!(self, C => system::to_rata_die::<C>(fields))
    }

    /// Fields of an ordinal in this calendar's numbering.
    pub fn from_rata_die(self, rd: RataDie) -> DateFields {
        with_system!(self, C => system::from_rata_die::<C>(rd))
    }

    /// Julian Day of an ordinal.
    pub fn julian_day(self, rd: RataDie) -> JulianDay {
        with_system!(self, C => system::julian_day::<C>(rd))
    }

    /// Unix milliseconds of an ordinal, unclamped.
    pub fn unix_millis(self, rd: RataDie) -> i64 {
        with_system!(self, C => system::unix_millis::<C>(rd))
    }

    /// Weekday of an ordinal.
    pub fn day_of_week(self, rd: RataDie) -> Weekday {
        with_system!(self, C => system::day_of_week::<C>(rd))
    }

    /// One-based day of `year` for an ordinal inside it.
    pub fn day_of_year(self, rd: RataDie, year: i32) -> u16 {
        with_system!(self, C => system::day_of_year::<C>(rd, year))
    }

    /// Week of the year, anchored on the first Thursday.
    pub fn week_of_year(self, rd: RataDie, year: i32) -> u8 {
        with_system!(self, C => system::week_of_year::<C>(rd, year))
    }

    /// Week of the month for the given first day of week.
    pub fn week_of_month(
        self,
        rd: RataDie,
        day_of_month: u8,
        first_day_of_week: Weekday,
    ) -> u8 {
        with_system!(self, C => {
            system::week_of_month::<C>(rd, day_of_month, first_day_of_week)
        })
    }

    /// Re-expresses an ordinal of this calendar in `target`'s numbering.
    pub fn rebase(self, rd: RataDie, target: CalendarKind) -> RataDie {
        rd.add_days(self.jd_epoch() - target.jd_epoch())
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" | "gregory" => Ok(CalendarKind::Gregorian),
            "julian" => Ok(CalendarKind::Julian),
            "hebrew" => Ok(CalendarKind::Hebrew),
            "islamic" | "islamic-civil" => Ok(CalendarKind::Islamic),
            _ => Err(CalendarError::UnknownCalendar { name: s.into() }),
        }
    }
}
