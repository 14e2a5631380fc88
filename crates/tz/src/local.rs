//! The host's own zone, inferred from its UTC offset function.

use std::fmt;
use std::sync::Arc;

use almanac_calendar::{CalendarDate, DateFields, DateInput, GregorianDate};
use chrono::{Local, Offset, TimeZone as _, Utc};

/// The host's UTC offset function.
pub trait OffsetSource: fmt::Debug + Send + Sync {
    /// Offset in minutes east of UTC at the given Unix millisecond instant.
    fn offset_minutes(&self, unix_millis: i64) -> i32;

    /// The current Unix time in milliseconds.
    fn now_millis(&self) -> i64;
}

/// [`OffsetSource`] backed by the operating system through `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoLocal;

impl OffsetSource for ChronoLocal {
    fn offset_minutes(&self, unix_millis: i64) -> i32 {
        Local
            .timestamp_millis_opt(unix_millis)
            .earliest()
            .map(|dt| dt.offset().fix().local_minus_utc() / 60)
            .unwrap_or(0)
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Standard and daylight offsets of the host, sampled on January 1 and
/// June 1 of the current year.
///
/// The larger (further east) sample is daylight time and the smaller is
/// standard time, which holds in both hemispheres. Only accurate for the
/// rules in force this year.
#[derive(Debug, Clone)]
pub struct LocalOffsets {
    source: Arc<dyn OffsetSource>,
    standard: i32,
    daylight: i32,
}

impl LocalOffsets {
    /// Samples `source`.
    pub fn sample(source: Arc<dyn OffsetSource>) -> Self {
        let now = GregorianDate::new(DateInput::UnixTime(source.now_millis()));
        let at = |month| {
            let date = GregorianDate::new(DateFields::ymd(now.year(), month, 1));
            source.offset_minutes(date.unix_time_extended())
        };
        let (january, june) = (at(1), at(6));
        Self {
            standard: january.min(june),
            daylight: january.max(june),
            source,
        }
    }

    /// Samples the operating system's zone.
    pub fn system() -> Self {
        Self::sample(Arc::new(ChronoLocal))
    }

    /// Standard offset from UTC, in minutes.
    pub fn standard_minutes(&self) -> i32 {
        self.standard
    }

    /// Summer offset minus standard offset; zero without daylight saving.
    pub fn savings_minutes(&self) -> i32 {
        self.daylight - self.standard
    }

    /// Whether the host observes daylight saving at all.
    pub fn uses_daylight_time(&self) -> bool {
        self.daylight != self.standard
    }

    /// Whether the host's offset at `unix_millis` is its daylight offset.
    pub fn in_daylight_time(&self, unix_millis: i64) -> bool {
        self.uses_daylight_time() && self.source.offset_minutes(unix_millis) == self.daylight
    }
}
