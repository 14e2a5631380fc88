//! Info command: the shape of one calendar year.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use almanac_calendar::{CalendarDate, CalendarKind, DateInput};

use crate::cli::InfoArgs;
use crate::config::AlmanacConfig;
use crate::convert;

#[derive(Debug, Serialize)]
pub struct YearReport {
    pub calendar: &'static str,
    pub year: i32,
    pub leap_year: bool,
    pub months_in_year: u8,
    pub days_in_year: u16,
    /// Weekday of the first day of the year.
    pub starts_on: &'static str,
    /// Gregorian date of the first day of the year.
    pub gregorian_start: String,
    /// Months in the order they occur.
    pub months: Vec<MonthReport>,
}

#[derive(Debug, Serialize)]
pub struct MonthReport {
    pub month: u8,
    pub name: Option<&'static str>,
    pub days: u8,
}

/// Month layout and weekday of the first day of `year`.
pub fn year_report(kind: CalendarKind, year: i32) -> YearReport {
    let months: Vec<MonthReport> = kind
        .months_in_order(year)
        .into_iter()
        .map(|month| MonthReport {
            month,
            name: kind.month_name(month, year),
            days: kind.month_length(month, year),
        })
        .collect();
    let first_day = kind.new_date(DateInput::RataDie(kind.year_start(year) as f64));

    YearReport {
        calendar: kind.id(),
        year,
        leap_year: kind.is_leap_year(year),
        months_in_year: kind.months_in_year(year),
        days_in_year: kind.days_in_year(year),
        starts_on: first_day.day_of_week().name(),
        gregorian_start: convert::format_date(&first_day.convert(CalendarKind::Gregorian)),
        months,
    }
}

/// Run the info command and return the JSON report.
pub fn run(args: InfoArgs, config: &AlmanacConfig) -> Result<String> {
    let _cmd = info_span!("info").entered();
    let kind = convert::parse_calendar(args.calendar.as_deref(), &config.calendar.default)?;
    let report = year_report(kind, args.year);
    serde_json::to_string_pretty(&report).context("failed to serialize report")
}
