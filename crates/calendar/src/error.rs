//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// Date arithmetic itself never fails: out-of-range fields roll over into
/// neighbouring months and years. Errors only arise when textual input
/// (calendar ids, weekday names) has to be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a calendar id does not name one of the supported calendars.
    #[error("unknown calendar: {name:?} (expected gregorian, julian, hebrew or islamic)")]
    UnknownCalendar {
        /// The calendar id that was provided.
        name: String,
    },

    /// Returned when a weekday name or index cannot be interpreted.
    #[error("unknown weekday: {name:?}")]
    UnknownWeekday {
        /// The weekday text that was provided.
        name: String,
    },
}
