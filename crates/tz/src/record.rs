//! Zone records: one parsed table row with memoised offsets.

use std::sync::OnceLock;

use almanac_calendar::RataDie;
use tracing::warn;

use crate::error::TzError;
use crate::offset::parse_offset_minutes;
use crate::rule::TransitionRule;
use crate::table::ZoneRow;

/// Savings assumed when a start rule gives none.
const DEFAULT_SAVINGS_MINUTES: i32 = 60;

/// An interval of UTC (or wall) Gregorian ordinals during which daylight
/// saving is in effect within one year.
///
/// When `start` is after `end` the window wraps the year boundary, as in the
/// southern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DstWindow {
    pub start: RataDie,
    pub end: RataDie,
}

impl DstWindow {
    /// Whether `rd` lies in the window.
    pub fn contains(&self, rd: RataDie) -> bool {
        if self.start <= self.end {
            self.start <= rd && rd < self.end
        } else {
            rd >= self.start || rd < self.end
        }
    }

    /// Whether this window wraps the year boundary.
    pub fn wraps_year(&self) -> bool {
        self.start > self.end
    }
}

/// One zone of the rule table.
///
/// Immutable apart from the lazily parsed offset and savings, which are
/// computed once on first use.
#[derive(Debug)]
pub struct ZoneRecord {
    id: String,
    offset_text: String,
    format: String,
    start: Option<TransitionRule>,
    end: Option<TransitionRule>,
    savings_text: Option<String>,
    offset: OnceLock<i32>,
    savings: OnceLock<i32>,
}

impl ZoneRecord {
    /// Builds a record from a table row.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::InvalidRule`] if a transition rule is malformed or
    /// only one of the start and end rules is present.
    pub fn from_row(id: &str, row: &ZoneRow) -> Result<Self, TzError> {
        let (start, end) = match (&row.start, &row.end) {
            (Some(s), Some(e)) => (
                Some(TransitionRule::from_row(id, s)?),
                Some(TransitionRule::from_row(id, e)?),
            ),
            (None, None) => (None, None),
            _ => {
                return Err(TzError::InvalidRule {
                    zone: id.into(),
                    reason: "start and end rules must be given together".into(),
                });
            }
        };
        Ok(Self {
            id: id.into(),
            offset_text: row.offset.clone(),
            format: row.format.clone().unwrap_or_else(|| id.into()),
            start,
            end,
            savings_text: row.start.as_ref().and_then(|s| s.savings.clone()),
            offset: OnceLock::new(),
            savings: OnceLock::new(),
        })
    }

    /// The record substituted for unknown zone ids.
    pub fn utc() -> Self {
        Self {
            id: "Etc/UTC".into(),
            offset_text: "0:0".into(),
            format: "UTC".into(),
            start: None,
            end: None,
            savings_text: None,
            offset: OnceLock::new(),
            savings: OnceLock::new(),
        }
    }

    /// Zone id the record was loaded under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Abbreviation format: `STD/DST`, a `{c}` template or a plain name.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Rule starting daylight saving, if the zone observes it.
    pub fn start_rule(&self) -> Option<&TransitionRule> {
        self.start.as_ref()
    }

    /// Rule ending daylight saving, if the zone observes it.
    pub fn end_rule(&self) -> Option<&TransitionRule> {
        self.end.as_ref()
    }

    /// Standard offset in minutes east of UTC. Unparseable offsets count as
    /// zero.
    pub fn raw_offset_minutes(&self) -> i32 {
        *self.offset.get_or_init(|| {
            parse_offset_minutes(&self.offset_text).unwrap_or_else(|e| {
                warn!(zone = %self.id, error = %e, "unparseable raw offset, using 0");
                0
            })
        })
    }

    /// Daylight saving amount in minutes; zero for zones without rules.
    pub fn dst_savings_minutes(&self) -> i32 {
        *self.savings.get_or_init(|| {
            if self.start.is_none() {
                return 0;
            }
            match &self.savings_text {
                None => DEFAULT_SAVINGS_MINUTES,
                Some(text) => parse_offset_minutes(text).unwrap_or_else(|e| {
                    warn!(zone = %self.id, error = %e, "unparseable savings, using 0");
                    0
                }),
            }
        })
    }

    /// True when the zone has rules and a non-zero saving.
    pub fn uses_daylight_time(&self) -> bool {
        self.start.is_some() && self.dst_savings_minutes() != 0
    }

    /// The daylight-saving window of Gregorian `year` in UTC ordinals.
    pub fn dst_window(&self, year: i32) -> Option<DstWindow> {
        let (start, end) = (self.start.as_ref()?, self.end.as_ref()?);
        let standard = self.raw_offset_minutes();
        let savings = self.dst_savings_minutes();
        Some(DstWindow {
            start: start.resolve_utc(year, standard, 0),
            end: end.resolve_utc(year, standard, savings),
        })
    }

    /// The daylight-saving window of Gregorian `year` in local wall-clock
    /// ordinals.
    pub fn dst_window_wall(&self, year: i32) -> Option<DstWindow> {
        let (start, end) = (self.start.as_ref()?, self.end.as_ref()?);
        let standard = self.raw_offset_minutes();
        let savings = self.dst_savings_minutes();
        Some(DstWindow {
            start: start.resolve_wall(year, standard, 0),
            end: end.resolve_wall(year, standard, savings),
        })
    }

    /// Display abbreviation for standard (`false`) or daylight (`true`)
    /// time.
    ///
    /// A format of the form `STD/DST` picks one side; otherwise `{c}` is
    /// replaced by the letter of the transition that is in force.
    pub fn abbreviation(&self, daylight: bool) -> String {
        if let Some((standard, dst)) = self.format.split_once('/') {
            return if daylight { dst } else { standard }.to_string();
        }
        let rule = if daylight { &self.start } else { &self.end };
        let letter = rule.as_ref().map(TransitionRule::letter).unwrap_or("S");
        self.format.replace("{c}", letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ZoneTable;
    use almanac_calendar::{CalendarDate, DateFields, GregorianDate};
    use approx::assert_abs_diff_eq;

    fn record(json: &str, id: &str) -> ZoneRecord {
        let table = ZoneTable::from_json(json).unwrap();
        ZoneRecord::from_row(id, table.get(id).unwrap()).unwrap()
    }

    fn utc(y: i32, m: i32, d: i32, h: i32, min: i32) -> RataDie {
        GregorianDate::new(DateFields::ymd(y, m, d).with_time(h, min, 0)).rata_die()
    }

    const NY: &str = r#"{"America/New_York": {
        "o": "-5:0", "f": "E{c}T",
        "s": {"m": 3, "r": "0>8", "t": "2:0", "v": "1:0", "c": "D"},
        "e": {"m": 11, "r": "0>1", "t": "2:0", "c": "S"}
    }}"#;

    #[test]
    fn offsets_are_parsed_once() {
        let ny = record(NY, "America/New_York");
        assert_eq!(ny.raw_offset_minutes(), -300);
        assert_eq!(ny.dst_savings_minutes(), 60);
        assert_eq!(ny.offset.get(), Some(&-300));
        assert!(ny.uses_daylight_time());
    }

    #[test]
    fn new_york_window_2024() {
        let ny = record(NY, "America/New_York");
        let window = ny.dst_window(2024).unwrap();
        assert_eq!(window.start, utc(2024, 3, 10, 7, 0));
        assert_eq!(window.end, utc(2024, 11, 3, 6, 0));
        assert!(!window.wraps_year());
        assert!(!window.contains(utc(2024, 1, 15, 12, 0)));
        assert!(window.contains(utc(2024, 7, 15, 12, 0)));
        assert!(!window.contains(utc(2024, 3, 10, 6, 59)));
        assert!(window.contains(utc(2024, 3, 10, 7, 0)));
        assert!(!window.contains(utc(2024, 11, 3, 6, 0)));

        let wall = ny.dst_window_wall(2024).unwrap();
        assert_eq!(wall.start, utc(2024, 3, 10, 2, 0));
        assert_eq!(wall.end, utc(2024, 11, 3, 2, 0));
    }

    #[test]
    fn window_length_in_days() {
        let window = record(NY, "America/New_York").dst_window(2024).unwrap();
        // Mar 10 07:00 to Nov 3 06:00 UTC: 238 days less an hour.
        assert_abs_diff_eq!(
            window.end.get() - window.start.get(),
            238.0 - 1.0 / 24.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn southern_window_wraps() {
        let sydney = record(
            r#"{"Australia/Sydney": {
                "o": "10:0", "f": "AE{c}T",
                "s": {"m": 10, "r": "0>1", "t": "2:0", "z": "s", "v": "1:0", "c": "D"},
                "e": {"m": 4, "r": "0>1", "t": "2:0", "z": "s", "c": "S"}
            }}"#,
            "Australia/Sydney",
        );
        let window = sydney.dst_window(2024).unwrap();
        assert!(window.wraps_year());
        assert!(window.contains(utc(2024, 1, 15, 0, 0)));
        assert!(!window.contains(utc(2024, 7, 15, 0, 0)));
        assert!(window.contains(utc(2024, 12, 25, 0, 0)));
        // First Sunday of October 2024 at 02:00 AEST is Oct 5 16:00 UTC.
        assert_eq!(window.start, utc(2024, 10, 5, 16, 0));
    }

    #[test]
    fn missing_savings_defaults_to_an_hour() {
        let r = record(
            r#"{"X": {"o": "1:0", "s": {"m": 3, "r": "l0", "t": "1:0"},
                       "e": {"m": 10, "r": "l0", "t": "1:0"}}}"#,
            "X",
        );
        assert_eq!(r.dst_savings_minutes(), 60);
        assert_eq!(r.format(), "X");
    }

    #[test]
    fn bad_offset_falls_back_to_zero() {
        let r = record(r#"{"X": {"o": "abc", "f": "X"}}"#, "X");
        assert_eq!(r.raw_offset_minutes(), 0);
        assert_eq!(r.dst_savings_minutes(), 0);
        assert!(!r.uses_daylight_time());
        assert!(r.dst_window(2024).is_none());
    }

    #[test]
    fn one_sided_rules_are_rejected() {
        let table = ZoneTable::from_json(
            r#"{"X": {"o": "1:0", "s": {"m": 3, "r": "l0", "t": "1:0"}}}"#,
        )
        .unwrap();
        let err = ZoneRecord::from_row("X", table.get("X").unwrap()).unwrap_err();
        assert!(matches!(err, TzError::InvalidRule { .. }));
    }

    #[test]
    fn abbreviations() {
        let ny = record(NY, "America/New_York");
        assert_eq!(ny.abbreviation(true), "EDT");
        assert_eq!(ny.abbreviation(false), "EST");
        let london = record(
            r#"{"Europe/London": {"o": "0:0", "f": "GMT/BST",
                "s": {"m": 3, "r": "l0", "t": "1:0", "z": "u", "v": "1:0", "c": "S"},
                "e": {"m": 10, "r": "l0", "t": "1:0", "z": "u"}}}"#,
            "Europe/London",
        );
        assert_eq!(london.abbreviation(true), "BST");
        assert_eq!(london.abbreviation(false), "GMT");
        assert_eq!(ZoneRecord::utc().abbreviation(false), "UTC");
    }
}
