//! Pure conversion functions: TOML config and CLI text -> crate API types.

use anyhow::{Context, Result, bail};

use almanac_calendar::{CalendarDate, CalendarKind, DateFields, Weekday};
use almanac_tz::{JsonFileLoader, ZoneRegistry};

use crate::config::ZonesToml;

/// Parses a calendar id, falling back to `default` when absent.
pub fn parse_calendar(name: Option<&str>, default: &str) -> Result<CalendarKind> {
    let name = name.unwrap_or(default);
    name.parse::<CalendarKind>()
        .with_context(|| format!("invalid calendar: {name:?}"))
}

/// Parses a first-day-of-week name or index.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.parse::<Weekday>()
        .with_context(|| format!("invalid first day of week: {name:?}"))
}

/// Builds the zone registry, reading the configured table if one is set.
pub fn build_registry(zones: &ZonesToml) -> Result<ZoneRegistry> {
    match &zones.table {
        Some(path) => {
            let loader = JsonFileLoader::new(path).with_overlay_embedded(zones.overlay);
            ZoneRegistry::load(&loader)
                .with_context(|| format!("failed to load zone table: {}", path.display()))
        }
        None => ZoneRegistry::embedded().context("failed to decode built-in zone table"),
    }
}

/// Parses `[-]YYYY-MM-DD[THH:MM[:SS[.mmm]]]` into raw fields.
///
/// Only the shape is checked; out-of-range values roll over like any other
/// field input.
pub fn parse_date_literal(text: &str) -> Result<DateFields> {
    let text = text.trim();
    let (date, time) = match text.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time)),
        None => (text, None),
    };

    let (negative, date) = match date.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date),
    };
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("invalid date {text:?}: expected YYYY-MM-DD");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {text:?}"))?;
    let mut fields = DateFields::ymd(
        if negative { -year } else { year },
        unsigned(month, "month", text)?,
        unsigned(day, "day", text)?,
    );

    if let Some(time) = time {
        let time = time.strip_suffix('Z').unwrap_or(time);
        let (hms, millis) = match time.split_once('.') {
            Some((hms, millis)) => (hms, Some(millis)),
            None => (time, None),
        };
        let parts: Vec<&str> = hms.split(':').collect();
        let (hour, minute, second) = match parts.as_slice() {
            [h, m] => (*h, *m, "0"),
            [h, m, s] => (*h, *m, *s),
            _ => bail!("invalid time in {text:?}: expected HH:MM[:SS[.mmm]]"),
        };
        fields = fields.with_time(
            unsigned(hour, "hour", text)?,
            unsigned(minute, "minute", text)?,
            unsigned(second, "second", text)?,
        );
        if let Some(millis) = millis {
            if millis.is_empty() || millis.len() > 3 {
                bail!("invalid milliseconds in {text:?}");
            }
            let scale = 10_i32.pow(3 - millis.len() as u32);
            fields = fields.with_millisecond(unsigned(millis, "millisecond", text)? * scale);
        }
    }
    Ok(fields)
}

fn unsigned(part: &str, what: &str, text: &str) -> Result<i32> {
    let value: u16 = part
        .parse()
        .with_context(|| format!("invalid {what} {part:?} in {text:?}"))?;
    Ok(i32::from(value))
}

/// Renders a date's fields as `YYYY-MM-DDTHH:MM:SS.mmm`.
pub fn format_date(date: &impl CalendarDate) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
        date.year(),
        date.month(),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.millisecond()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::GregorianDate;

    #[test]
    fn calendar_names() {
        assert_eq!(
            parse_calendar(Some("Hebrew"), "gregorian").unwrap(),
            CalendarKind::Hebrew
        );
        assert_eq!(
            parse_calendar(None, "islamic").unwrap(),
            CalendarKind::Islamic
        );
        let err = parse_calendar(Some("mayan"), "gregorian").unwrap_err();
        assert!(format!("{err:#}").contains("mayan"));
    }

    #[test]
    fn weekday_names() {
        assert_eq!(parse_weekday("monday").unwrap(), Weekday::Monday);
        assert_eq!(parse_weekday("0").unwrap(), Weekday::Sunday);
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn date_only() {
        assert_eq!(
            parse_date_literal("2024-03-10").unwrap(),
            DateFields::ymd(2024, 3, 10)
        );
        assert_eq!(
            parse_date_literal("-0044-03-15").unwrap(),
            DateFields::ymd(-44, 3, 15)
        );
    }

    #[test]
    fn date_and_time() {
        assert_eq!(
            parse_date_literal("2024-03-10T07:30").unwrap(),
            DateFields::ymd(2024, 3, 10).with_time(7, 30, 0)
        );
        assert_eq!(
            parse_date_literal("2024-03-10 07:30:15.5Z").unwrap(),
            DateFields::ymd(2024, 3, 10)
                .with_time(7, 30, 15)
                .with_millisecond(500)
        );
    }

    #[test]
    fn malformed_literals() {
        for text in [
            "",
            "2024-03",
            "2024/03/10",
            "2024-03-10T7",
            "2024-3-x",
            "2024-03-10T07:30:00.1234",
            "2024--03-10",
        ] {
            assert!(parse_date_literal(text).is_err(), "{text:?}");
        }
    }

    #[test]
    fn formatting() {
        let date = GregorianDate::new(
            DateFields::ymd(2024, 7, 4)
                .with_time(9, 5, 3)
                .with_millisecond(7),
        );
        assert_eq!(format_date(&date), "2024-07-04T09:05:03.007");
    }

    #[test]
    fn builtin_registry_without_table() {
        let registry = build_registry(&ZonesToml::default()).unwrap();
        assert!(registry.contains("Europe/London"));
    }
}
