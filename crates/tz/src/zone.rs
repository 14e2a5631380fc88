//! The time zone handle and its construction options.

use std::sync::Arc;

use almanac_calendar::{CalendarDate, CalendarKind, GregorianDate, RataDie};

use crate::error::TzError;
use crate::local::LocalOffsets;
use crate::offset::{MS_PER_MINUTE, format_offset};
use crate::record::{DstWindow, ZoneRecord};

/// Zone id selecting the host-inferred zone.
pub const LOCAL_ZONE_ID: &str = "local";

/// Largest accepted fixed offset, in minutes either side of UTC.
const MAX_FIXED_OFFSET_MINUTES: i32 = 18 * 60;

// ---------------------------------------------------------------------------
// TimeZoneOptions
// ---------------------------------------------------------------------------

/// How to construct a [`TimeZone`].
///
/// With neither `id` nor `offset` set the host's local zone is used. An
/// `offset` builds a fixed zone with no daylight saving; any `id` other than
/// `"local"` is looked up in the zone table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeZoneOptions {
    id: Option<String>,
    offset: Option<i32>,
    locale: Option<String>,
}

impl TimeZoneOptions {
    /// Set the zone id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a fixed offset in minutes east of UTC.
    pub fn with_offset(mut self, minutes: i32) -> Self {
        self.offset = Some(minutes);
        self
    }

    /// Set the locale carried on the zone.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Requested zone id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Requested fixed offset in minutes, if any.
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// Locale tag carried for formatters.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Validate that the options describe exactly one zone.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::Validation`] if both `id` and `offset` are set or
    /// the offset is more than 18 hours from UTC.
    pub fn validate(&self) -> Result<(), TzError> {
        if self.id.is_some() && self.offset.is_some() {
            return Err(TzError::Validation {
                details: "give either an id or an offset, not both".into(),
            });
        }
        if let Some(minutes) = self.offset.filter(|m| m.abs() > MAX_FIXED_OFFSET_MINUTES) {
            return Err(TzError::Validation {
                details: format!("offset {minutes} minutes is beyond 18 hours"),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TimeZone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum ZoneKind {
    Rules(Arc<ZoneRecord>),
    Fixed(i32),
    Local(LocalOffsets),
}

/// A time zone: raw offset plus optional daylight-saving rules.
///
/// Instants passed as dates are read as UTC and may be in any calendar.
#[derive(Debug, Clone)]
pub struct TimeZone {
    id: String,
    locale: Option<String>,
    kind: ZoneKind,
}

/// Gregorian ordinal of any date.
fn gregorian_rd(date: &impl CalendarDate) -> RataDie {
    date.kind().rebase(date.rata_die(), CalendarKind::Gregorian)
}

/// Unix milliseconds of a Gregorian ordinal, unclamped.
fn unix_millis(rd: RataDie) -> i64 {
    CalendarKind::Gregorian.unix_millis(rd)
}

impl TimeZone {
    /// A zone backed by a table record.
    pub fn from_record(record: Arc<ZoneRecord>) -> Self {
        Self {
            id: record.id().to_string(),
            locale: None,
            kind: ZoneKind::Rules(record),
        }
    }

    /// A fixed zone `minutes` east of UTC with no daylight saving.
    pub fn fixed(minutes: i32) -> Self {
        Self {
            id: format!("UTC{}", format_offset(minutes)),
            locale: None,
            kind: ZoneKind::Fixed(minutes),
        }
    }

    /// The host-inferred zone.
    pub fn local(offsets: LocalOffsets) -> Self {
        Self {
            id: LOCAL_ZONE_ID.into(),
            locale: None,
            kind: ZoneKind::Local(offsets),
        }
    }

    /// Replace the locale carried on the zone.
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    /// Table id, `local`, or `UTC±HH:MM` for fixed zones.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Standard offset in minutes east of UTC.
    pub fn raw_offset_minutes(&self) -> i32 {
        match &self.kind {
            ZoneKind::Rules(record) => record.raw_offset_minutes(),
            ZoneKind::Fixed(minutes) => *minutes,
            ZoneKind::Local(local) => local.standard_minutes(),
        }
    }

    /// Daylight-saving amount in minutes; zero when not observed.
    pub fn dst_savings_minutes(&self) -> i32 {
        match &self.kind {
            ZoneKind::Rules(record) => record.dst_savings_minutes(),
            ZoneKind::Fixed(_) => 0,
            ZoneKind::Local(local) => local.savings_minutes(),
        }
    }

    /// [`raw_offset_minutes`](Self::raw_offset_minutes) in milliseconds.
    pub fn raw_offset_millis(&self) -> i64 {
        self.raw_offset_minutes() as i64 * MS_PER_MINUTE
    }

    /// [`dst_savings_minutes`](Self::dst_savings_minutes) in milliseconds.
    pub fn dst_savings_millis(&self) -> i64 {
        self.dst_savings_minutes() as i64 * MS_PER_MINUTE
    }

    /// Whether the zone ever observes daylight saving.
    pub fn uses_daylight_time(&self) -> bool {
        match &self.kind {
            ZoneKind::Rules(record) => record.uses_daylight_time(),
            ZoneKind::Fixed(_) => false,
            ZoneKind::Local(local) => local.uses_daylight_time(),
        }
    }

    /// Whether daylight saving is in effect at `date`, read as UTC.
    pub fn in_daylight_time(&self, date: &impl CalendarDate) -> bool {
        self.in_daylight_time_utc(gregorian_rd(date))
    }

    /// Whether daylight saving is in effect at a UTC Gregorian ordinal.
    pub fn in_daylight_time_utc(&self, rd: RataDie) -> bool {
        match &self.kind {
            ZoneKind::Rules(record) => {
                let year = GregorianDate::from_rata_die(rd).year();
                record.dst_window(year).is_some_and(|w| w.contains(rd))
            }
            ZoneKind::Fixed(_) => false,
            ZoneKind::Local(local) => local.in_daylight_time(unix_millis(rd)),
        }
    }

    /// Whether daylight saving is in effect at a Gregorian ordinal read on
    /// this zone's wall clock.
    pub fn in_daylight_time_wall(&self, rd: RataDie) -> bool {
        match &self.kind {
            ZoneKind::Rules(record) => {
                let year = GregorianDate::from_rata_die(rd).year();
                record.dst_window_wall(year).is_some_and(|w| w.contains(rd))
            }
            ZoneKind::Fixed(_) => false,
            ZoneKind::Local(local) => {
                let shift = local.standard_minutes() as i64 * MS_PER_MINUTE;
                local.in_daylight_time(unix_millis(rd) - shift)
            }
        }
    }

    /// Total offset from UTC at `date` in milliseconds, savings included.
    pub fn offset_millis(&self, date: &impl CalendarDate) -> i64 {
        self.offset_minutes_at(gregorian_rd(date)) as i64 * MS_PER_MINUTE
    }

    fn offset_minutes_at(&self, rd: RataDie) -> i32 {
        let mut minutes = self.raw_offset_minutes();
        if self.in_daylight_time_utc(rd) {
            minutes += self.dst_savings_minutes();
        }
        minutes
    }

    /// The UTC daylight-saving window of Gregorian `year`, if the zone has
    /// transition rules.
    pub fn dst_window(&self, year: i32) -> Option<DstWindow> {
        match &self.kind {
            ZoneKind::Rules(record) => record.dst_window(year),
            ZoneKind::Fixed(_) | ZoneKind::Local(_) => None,
        }
    }

    /// Display abbreviation at `date`. Fixed and local zones have no names
    /// and report their offset instead.
    pub fn abbreviation(&self, date: &impl CalendarDate) -> String {
        match &self.kind {
            ZoneKind::Rules(record) => record.abbreviation(self.in_daylight_time(date)),
            ZoneKind::Fixed(_) | ZoneKind::Local(_) => self.offset_string(date),
        }
    }

    /// Total offset at `date` rendered as `+HH:MM`.
    pub fn offset_string(&self, date: &impl CalendarDate) -> String {
        format_offset(self.offset_minutes_at(gregorian_rd(date)))
    }
}
