//! Convert command: one date rendered in several calendars.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use almanac_calendar::{AnyDate, CalendarDate, CalendarKind, Era, Weekday};

use crate::cli::ConvertArgs;
use crate::config::AlmanacConfig;
use crate::convert;

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub from: DateReport,
    pub to: Vec<DateReport>,
}

/// Everything the calendar crate can say about one date.
#[derive(Debug, Serialize)]
pub struct DateReport {
    pub calendar: &'static str,
    pub date: String,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: Option<&'static str>,
    pub era: &'static str,
    pub leap_year: bool,
    pub weekday: &'static str,
    pub day_of_year: u16,
    pub week_of_year: u8,
    pub week_of_month: u8,
    pub julian_day: f64,
    /// `-1` outside the 32-bit unix window.
    pub unix_time: i64,
}

impl DateReport {
    /// Weeks of the month start on `first_day_of_week`.
    pub fn new(date: &AnyDate, first_day_of_week: Weekday) -> Self {
        Self {
            calendar: date.kind().id(),
            date: convert::format_date(date),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            month_name: date.month_name(),
            era: match date.era() {
                Era::Before => "before",
                Era::Current => "current",
            },
            leap_year: date.is_leap_year(),
            weekday: date.day_of_week().name(),
            day_of_year: date.day_of_year(),
            week_of_year: date.week_of_year(),
            week_of_month: date.week_of_month(first_day_of_week),
            julian_day: date.julian_day().get(),
            unix_time: date.unix_time(),
        }
    }
}

/// Run the conversion and return the JSON report.
pub fn run(args: ConvertArgs, config: &AlmanacConfig) -> Result<String> {
    let _cmd = info_span!("convert").entered();

    let from = convert::parse_calendar(args.from.as_deref(), &config.calendar.default)?;
    let first_day = convert::parse_weekday(
        args.first_day_of_week
            .as_deref()
            .unwrap_or(&config.calendar.first_day_of_week),
    )?;
    let targets = if args.to.is_empty() {
        CalendarKind::ALL.to_vec()
    } else {
        args.to
            .iter()
            .map(|name| convert::parse_calendar(Some(name), &config.calendar.default))
            .collect::<Result<Vec<_>>>()?
    };

    let fields = convert::parse_date_literal(&args.date)?;
    let source = from.new_date(fields);
    info!(
        calendar = %from,
        rd = source.rata_die().get(),
        "parsed source date"
    );

    let to = targets
        .into_iter()
        .map(|kind| {
            let converted = source.convert(kind);
            debug!(calendar = %kind, date = %convert::format_date(&converted), "converted");
            DateReport::new(&converted, first_day)
        })
        .collect();

    let report = ConversionReport {
        from: DateReport::new(&source, first_day),
        to,
    };
    serde_json::to_string_pretty(&report).context("failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn convert(date: &str, from: &str, to: &[&str]) -> Value {
        let args = ConvertArgs {
            date: date.to_string(),
            from: Some(from.to_string()),
            to: to.iter().map(|s| s.to_string()).collect(),
            first_day_of_week: None,
        };
        let json = run(args, &AlmanacConfig::default()).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn gregorian_to_hebrew() {
        let report = convert("2015-09-14", "gregorian", &["hebrew"]);
        assert_eq!(report["from"]["weekday"], "Monday");
        assert_eq!(report["from"]["unix_time"], 1_442_188_800_000_i64);
        let hebrew = &report["to"][0];
        assert_eq!(hebrew["calendar"], "hebrew");
        assert_eq!(hebrew["year"], 5776);
        assert_eq!(hebrew["month"], 7);
        assert_eq!(hebrew["day"], 1);
        assert_eq!(hebrew["month_name"], "Tishri");
        assert_eq!(hebrew["leap_year"], true);
        assert_eq!(hebrew["julian_day"], report["from"]["julian_day"]);
    }

    #[test]
    fn all_calendars_by_default() {
        let report = convert("1437-01-01", "islamic", &[]);
        let calendars: Vec<&str> = report["to"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["calendar"].as_str().unwrap())
            .collect();
        assert_eq!(calendars, ["gregorian", "julian", "hebrew", "islamic"]);
        assert_eq!(report["to"][0]["date"], "2015-10-15T00:00:00.000");
        assert_eq!(report["from"]["month_name"], "Muharram");
    }

    #[test]
    fn unknown_target_is_an_error() {
        let args = ConvertArgs {
            date: "2024-01-01".to_string(),
            from: None,
            to: vec!["aztec".to_string()],
            first_day_of_week: None,
        };
        assert!(run(args, &AlmanacConfig::default()).is_err());
    }
}
