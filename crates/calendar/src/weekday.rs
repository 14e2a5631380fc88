//! Day-of-week enum shared by every calendar.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// Returns the weekday for an arbitrary integer, reduced modulo 7.
    pub fn from_index(index: i64) -> Self {
        ALL[index.rem_euclid(7) as usize]
    }

    /// Returns the index of this weekday (Sunday = 0 .. Saturday = 6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Accepts an index `0..=6`, a full English name or its three-letter
    /// abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            if index < 7 {
                return Ok(ALL[index as usize]);
            }
        }
        let lower = trimmed.to_lowercase();
        NAMES
            .iter()
            .position(|name| {
                let name = name.to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .map(|i| ALL[i])
            .ok_or_else(|| CalendarError::UnknownWeekday { name: s.into() })
    }
}
