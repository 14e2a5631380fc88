//! Zone commands: query one zone, list the table.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use almanac_calendar::{CalendarDate, DateInput, GregorianDate};
use almanac_tz::{DstWindow, TimeZone, TimeZoneOptions, ZoneRegistry};

use crate::cli::{ZoneArgs, ZonesArgs};
use crate::config::AlmanacConfig;
use crate::convert;

#[derive(Debug, Serialize)]
pub struct ZoneReport {
    pub id: String,
    pub locale: Option<String>,
    /// Queried instant, Gregorian UTC.
    pub at: String,
    pub raw_offset_minutes: i32,
    pub dst_savings_minutes: i32,
    pub uses_daylight_time: bool,
    pub in_daylight_time: bool,
    pub offset: String,
    pub offset_millis: i64,
    pub abbreviation: String,
    /// Daylight saving window of the queried year, in UTC.
    pub dst_window: Option<WindowReport>,
}

#[derive(Debug, Serialize)]
pub struct WindowReport {
    pub start: String,
    pub end: String,
    pub wraps_year: bool,
}

impl WindowReport {
    fn new(window: &DstWindow) -> Self {
        Self {
            start: convert::format_date(&GregorianDate::from_rata_die(window.start)),
            end: convert::format_date(&GregorianDate::from_rata_die(window.end)),
            wraps_year: window.wraps_year(),
        }
    }
}

/// Offsets and the daylight window of `zone` at `at`.
pub fn zone_report(zone: &TimeZone, at: &GregorianDate) -> ZoneReport {
    ZoneReport {
        id: zone.id().to_string(),
        locale: zone.locale().map(str::to_string),
        at: convert::format_date(at),
        raw_offset_minutes: zone.raw_offset_minutes(),
        dst_savings_minutes: zone.dst_savings_minutes(),
        uses_daylight_time: zone.uses_daylight_time(),
        in_daylight_time: zone.in_daylight_time(at),
        offset: zone.offset_string(at),
        offset_millis: zone.offset_millis(at),
        abbreviation: zone.abbreviation(at),
        dst_window: zone.dst_window(at.year()).as_ref().map(WindowReport::new),
    }
}

/// Options for `args`, with the configured default zone when neither an id
/// nor an offset is given.
fn zone_options(args: &ZoneArgs, config: &AlmanacConfig) -> TimeZoneOptions {
    let mut options = TimeZoneOptions::default();
    match (&args.id, args.offset) {
        (_, Some(minutes)) => options = options.with_offset(minutes),
        (Some(id), None) => options = options.with_id(id),
        (None, None) => options = options.with_id(&config.zones.default),
    }
    if let Some(locale) = &args.locale {
        options = options.with_locale(locale);
    }
    options
}

/// Run the zone command and return the JSON report.
pub fn run(args: ZoneArgs, config: &AlmanacConfig) -> Result<String> {
    let _cmd = info_span!("zone").entered();
    let registry = convert::build_registry(&config.zones)?;
    let zone = registry
        .time_zone(&zone_options(&args, config))
        .context("invalid zone options")?;

    let at = match &args.at {
        Some(text) => GregorianDate::new(convert::parse_date_literal(text)?),
        None => GregorianDate::new(DateInput::Now),
    };
    info!(zone = zone.id(), at = %convert::format_date(&at), "querying zone");

    serde_json::to_string_pretty(&zone_report(&zone, &at)).context("failed to serialize report")
}

/// Registered ids, optionally restricted to those starting with `prefix`.
pub fn zone_ids<'a>(registry: &'a ZoneRegistry, prefix: Option<&str>) -> Vec<&'a str> {
    registry
        .ids()
        .into_iter()
        .filter(|id| prefix.is_none_or(|p| id.starts_with(p)))
        .collect()
}

/// Run the zones command and return the ids as a JSON array.
pub fn list(args: ZonesArgs, config: &AlmanacConfig) -> Result<String> {
    let _cmd = info_span!("zones").entered();
    let registry = convert::build_registry(&config.zones)?;
    let ids = zone_ids(&registry, args.prefix.as_deref());
    info!(listed = ids.len(), known = registry.len(), "listing zones");
    serde_json::to_string_pretty(&ids).context("failed to serialize zone list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_calendar::DateFields;

    fn args(id: Option<&str>, offset: Option<i32>, at: &str) -> ZoneArgs {
        ZoneArgs {
            id: id.map(str::to_string),
            offset,
            at: Some(at.to_string()),
            locale: None,
        }
    }

    #[test]
    fn new_york_summer() {
        let registry = ZoneRegistry::embedded().unwrap();
        let zone = registry
            .time_zone(&TimeZoneOptions::default().with_id("America/New_York"))
            .unwrap();
        let at = GregorianDate::new(DateFields::ymd(2024, 7, 4).with_time(16, 0, 0));
        let report = zone_report(&zone, &at);
        assert!(report.in_daylight_time);
        assert_eq!(report.abbreviation, "EDT");
        assert_eq!(report.offset, "-04:00");
        assert_eq!(report.offset_millis, -14_400_000);
        let window = report.dst_window.unwrap();
        assert_eq!(window.start, "2024-03-10T07:00:00.000");
        assert_eq!(window.end, "2024-11-03T06:00:00.000");
        assert!(!window.wraps_year);
    }

    #[test]
    fn run_reports_json() {
        let json = run(
            args(Some("Europe/London"), None, "2024-12-01T12:00"),
            &AlmanacConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["abbreviation"], "GMT");
        assert_eq!(value["in_daylight_time"], false);
        assert_eq!(value["at"], "2024-12-01T12:00:00.000");
    }

    #[test]
    fn fixed_offset() {
        let json = run(args(None, Some(330), "2024-01-01"), &AlmanacConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "UTC+05:30");
        assert_eq!(value["offset"], "+05:30");
        assert!(value["dst_window"].is_null());
    }

    #[test]
    fn configured_default_zone() {
        let mut config = AlmanacConfig::default();
        config.zones.default = "Asia/Tokyo".to_string();
        let options = zone_options(&args(None, None, "2024-01-01"), &config);
        assert_eq!(options.id(), Some("Asia/Tokyo"));
    }

    #[test]
    fn prefix_filter() {
        let registry = ZoneRegistry::embedded().unwrap();
        let ids = zone_ids(&registry, Some("Australia/"));
        assert!(ids.contains(&"Australia/Sydney"));
        assert!(ids.iter().all(|id| id.starts_with("Australia/")));
        assert_eq!(zone_ids(&registry, None).len(), registry.len());
    }
}
