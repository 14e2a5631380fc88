//! Annually recurring daylight-saving transition rules.

use almanac_calendar::{
    CalendarDate, CalendarSystem, GregorianCalendar, GregorianDate, RataDie, Weekday,
};

use crate::error::TzError;
use crate::offset::{MS_PER_MINUTE, parse_hms_seconds};
use crate::table::RuleRow;

/// Which day of the month a rule falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCode {
    /// Last `weekday` of the month (`l0` = last Sunday).
    Last(Weekday),
    /// First `weekday` of the month (`f0` = first Sunday).
    First(Weekday),
    /// First `weekday` on or after `day` (`0>8`, also `0>=8`).
    OnOrAfter { weekday: Weekday, day: u8 },
    /// Last `weekday` on or before `day` (`0<15`, also `0<=15`).
    OnOrBefore { weekday: Weekday, day: u8 },
    /// A fixed day of the month (`15`).
    Day(u8),
}

fn weekday_digit(text: &str) -> Option<Weekday> {
    match text.trim().parse::<i64>().ok()? {
        index @ 0..=6 => Some(Weekday::from_index(index)),
        _ => None,
    }
}

fn day_number(text: &str) -> Option<u8> {
    match text.trim().parse::<u8>().ok()? {
        day @ 1..=31 => Some(day),
        _ => None,
    }
}

impl RuleCode {
    /// Parses a compact rule code; `None` if it is not recognised.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if let Some(rest) = code.strip_prefix('l') {
            return weekday_digit(rest).map(RuleCode::Last);
        }
        if let Some(rest) = code.strip_prefix('f') {
            return weekday_digit(rest).map(RuleCode::First);
        }
        if let Some((weekday, day)) = code.split_once('>') {
            let day = day.strip_prefix('=').unwrap_or(day);
            return Some(RuleCode::OnOrAfter {
                weekday: weekday_digit(weekday)?,
                day: day_number(day)?,
            });
        }
        if let Some((weekday, day)) = code.split_once('<') {
            let day = day.strip_prefix('=').unwrap_or(day);
            return Some(RuleCode::OnOrBefore {
                weekday: weekday_digit(weekday)?,
                day: day_number(day)?,
            });
        }
        day_number(code).map(RuleCode::Day)
    }
}

/// The clock a rule's time of day is read on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeReference {
    /// Local wall clock, including any savings in effect.
    #[default]
    Wall,
    /// Local standard time.
    Standard,
    /// UTC.
    Utc,
}

impl TimeReference {
    fn parse(text: Option<&str>) -> Option<Self> {
        match text.map(str::trim) {
            None | Some("") | Some("w") => Some(TimeReference::Wall),
            Some("s") => Some(TimeReference::Standard),
            Some("u") | Some("g") | Some("z") => Some(TimeReference::Utc),
            Some(_) => None,
        }
    }
}

/// A resolved-per-year transition: month, day rule, time and clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRule {
    month: u8,
    code: RuleCode,
    time_seconds: i32,
    reference: TimeReference,
    letter: String,
}

impl TransitionRule {
    /// A wall-clock rule for `month` at `time_seconds` past midnight.
    pub fn new(month: u8, code: RuleCode, time_seconds: i32) -> Self {
        Self {
            month,
            code,
            time_seconds,
            reference: TimeReference::Wall,
            letter: String::new(),
        }
    }

    /// Set the clock the rule's time is read on.
    pub fn with_reference(mut self, reference: TimeReference) -> Self {
        self.reference = reference;
        self
    }

    /// Set the letter substituted into the zone's format.
    pub fn with_letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = letter.into();
        self
    }

    /// Builds a rule from a table row of zone `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::InvalidRule`] for a month outside 1..=12, an
    /// unknown rule code or zone type, or an unparseable time.
    pub fn from_row(zone: &str, row: &RuleRow) -> Result<Self, TzError> {
        let fail = |reason: String| TzError::InvalidRule {
            zone: zone.into(),
            reason,
        };
        if !(1..=12).contains(&row.month) {
            return Err(fail(format!("month {} out of range", row.month)));
        }
        let code = RuleCode::parse(&row.rule)
            .ok_or_else(|| fail(format!("unknown rule code {:?}", row.rule)))?;
        let reference = TimeReference::parse(row.zone_type.as_deref())
            .ok_or_else(|| fail(format!("unknown zone type {:?}", row.zone_type)))?;
        let time_seconds = parse_hms_seconds(&row.time).map_err(|e| fail(e.to_string()))?;
        Ok(Self {
            month: row.month,
            code,
            time_seconds,
            reference,
            letter: row.letter.clone().unwrap_or_default(),
        })
    }

    /// Month of the transition, 1..=12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Which day of the month the transition falls on.
    pub fn code(&self) -> RuleCode {
        self.code
    }

    /// Clock the transition time is read on.
    pub fn reference(&self) -> TimeReference {
        self.reference
    }

    /// Letter substituted for `{c}` while this transition is the latest.
    pub fn letter(&self) -> &str {
        &self.letter
    }

    /// Day number (Gregorian ordinal) and milliseconds into that day of the
    /// transition in `year`, on the rule's own clock.
    ///
    /// The day is picked by the weekday search alone; the time is added
    /// afterwards, so `24:00` on the last Thursday lands on the following
    /// midnight rather than moving the search into the next day.
    fn resolve_parts(&self, year: i32) -> (i64, i64) {
        let month = self.month as i32;
        let date = match self.code {
            RuleCode::Last(weekday) => {
                let last = GregorianCalendar::month_length(self.month, year) as i32;
                GregorianDate::ymd(year, month, last).on_or_before(weekday)
            }
            RuleCode::First(weekday) => GregorianDate::ymd(year, month, 1).on_or_after(weekday),
            RuleCode::OnOrAfter { weekday, day } => {
                GregorianDate::ymd(year, month, day as i32).on_or_after(weekday)
            }
            RuleCode::OnOrBefore { weekday, day } => {
                GregorianDate::ymd(year, month, day as i32).on_or_before(weekday)
            }
            RuleCode::Day(day) => GregorianDate::ymd(year, month, day as i32),
        };
        (date.rata_die().day(), self.time_seconds as i64 * 1_000)
    }

    /// The transition in `year` as a Gregorian ordinal on the rule's own
    /// clock.
    pub fn resolve(&self, year: i32) -> RataDie {
        let (day, millis) = self.resolve_parts(year);
        RataDie::from_parts(day, millis)
    }

    /// The transition in `year` as a UTC Gregorian ordinal, for a zone with
    /// standard offset `standard` and `savings` minutes in effect just before
    /// the transition.
    pub fn resolve_utc(&self, year: i32, standard: i32, savings: i32) -> RataDie {
        let shift = match self.reference {
            TimeReference::Utc => 0,
            TimeReference::Standard => standard,
            TimeReference::Wall => standard + savings,
        };
        let (day, millis) = self.resolve_parts(year);
        RataDie::from_parts(day, millis - shift as i64 * MS_PER_MINUTE)
    }

    /// The transition in `year` on the local wall clock that was in effect
    /// just before it.
    pub fn resolve_wall(&self, year: i32, standard: i32, savings: i32) -> RataDie {
        let shift = match self.reference {
            TimeReference::Utc => -(standard + savings),
            TimeReference::Standard => -savings,
            TimeReference::Wall => 0,
        };
        let (day, millis) = self.resolve_parts(year);
        RataDie::from_parts(day, millis - shift as i64 * MS_PER_MINUTE)
    }
}
