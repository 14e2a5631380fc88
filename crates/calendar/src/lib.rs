//! # almanac-calendar
//!
//! Date arithmetic for four calendars over a shared ordinal day axis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateFields"] -->|"to_rata_die()"| B["RataDie"]
//!     B -->|"from_rata_die()"| A
//!     B -->|"+ JD_EPOCH"| C["JulianDay"]
//!     C -->|"- UNIX_EPOCH_JD"| D["unix millis"]
//!     B -->|"rebase()"| E["RataDie (other calendar)"]
//!     F["CalendarKind"] -->|"new_date()"| G["AnyDate"]
//! ```
//!
//! Each calendar is a stateless [`CalendarSystem`] descriptor. Field to
//! ordinal conversion, the inverse, weekday and week numbering are written
//! once in [`system`] and shared by all four.
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{CalendarDate, CalendarKind, DateFields, GregorianDate, Weekday};
//!
//! let date = GregorianDate::ymd(2015, 9, 14);
//! assert_eq!(date.day_of_week(), Weekday::Monday);
//!
//! let hebrew = CalendarKind::Gregorian
//!     .new_date(DateFields::ymd(2015, 9, 14))
//!     .convert(CalendarKind::Hebrew);
//! assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5776, 7, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ordinal` | `RataDie` and `JulianDay` axis values, Unix conversion |
//! | `weekday` | Weekday enum |
//! | `fields` | Construction inputs and tags |
//! | `system` | Calendar descriptor trait and shared conversion engine |
//! | `date` | `CalendarDate` trait |
//! | `gregorian` | Proleptic Gregorian calendar |
//! | `julian` | Proleptic Julian calendar |
//! | `hebrew` | Arithmetic Hebrew calendar |
//! | `islamic` | Tabular Islamic calendar |
//! | `kind` | Calendar ids and the date factory |
//! | `any` | Runtime-selected date |
//! | `error` | Error types |

mod any;
mod date;
mod error;
mod fields;
mod gregorian;
mod hebrew;
mod islamic;
mod julian;
mod kind;
mod ordinal;
pub mod system;
mod weekday;

pub use any::AnyDate;
pub use date::CalendarDate;
pub use error::CalendarError;
pub use fields::{DateFields, DateInput, DateTags};
pub use gregorian::{GregorianCalendar, GregorianDate};
pub use hebrew::{HebrewCalendar, HebrewDate};
pub use islamic::{IslamicCalendar, IslamicDate};
pub use julian::{JulianCalendar, JulianDate};
pub use kind::CalendarKind;
pub use ordinal::{
    JulianDay, MAX_ORDINAL_DAYS, MAX_YEAR, MIN_YEAR, MS_PER_DAY, RataDie, UNIX_EPOCH_JD,
    UNIX_TIME_MAX_MS, clamp_unix_millis,
};
pub use system::{CalendarSystem, CumulativeDays, Era};
pub use weekday::Weekday;
