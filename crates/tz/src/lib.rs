//! # almanac-tz
//!
//! Time zones with annually recurring daylight-saving rules.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ZoneTableLoader"] -->|".load()"| B["ZoneTable (rows)"]
//!     B -->|"ZoneRegistry::from_table()"| C["ZoneRegistry"]
//!     C -->|".time_zone(options)"| D["TimeZone"]
//!     D -->|".dst_window(year)"| E["DstWindow"]
//!     F["TransitionRule"] -->|".resolve_utc(year)"| E
//! ```
//!
//! A transition rule is resolved against a year with the Gregorian calendar
//! of `almanac-calendar`; the resulting window is then compared with the
//! queried instant, wrapping the year boundary for southern-hemisphere
//! zones.
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{DateFields, GregorianDate};
//! use almanac_tz::{TimeZoneOptions, ZoneRegistry};
//!
//! let registry = ZoneRegistry::embedded().unwrap();
//! let zone = registry
//!     .time_zone(&TimeZoneOptions::default().with_id("America/New_York"))
//!     .unwrap();
//! let july = GregorianDate::new(DateFields::ymd(2024, 7, 15).with_time(12, 0, 0));
//! assert!(zone.in_daylight_time(&july));
//! assert_eq!(zone.abbreviation(&july), "EDT");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Compact on-disk zone rows and table merging |
//! | `loader` | Embedded and file-backed table sources |
//! | `offset` | `H:M[:S]` parsing and `+HH:MM` rendering |
//! | `rule` | Transition rule codes and per-year resolution |
//! | `record` | Zone records with memoised offsets, DST windows |
//! | `local` | Host-inferred zone via an offset source |
//! | `zone` | `TimeZone` and its construction options |
//! | `registry` | Shared read-only record registry |
//! | `error` | Error types |

mod error;
mod loader;
mod local;
mod offset;
mod record;
mod registry;
mod rule;
mod table;
mod zone;

pub use error::TzError;
pub use loader::{EmbeddedTable, JsonFileLoader, ZoneTableLoader};
pub use local::{ChronoLocal, LocalOffsets, OffsetSource};
pub use offset::{MS_PER_MINUTE, format_offset, parse_hms_seconds, parse_offset_minutes};
pub use record::{DstWindow, ZoneRecord};
pub use registry::{FALLBACK_ZONE_ID, ZoneRegistry};
pub use rule::{RuleCode, TimeReference, TransitionRule};
pub use table::{RuleRow, ZoneRow, ZoneTable};
pub use zone::{LOCAL_ZONE_ID, TimeZone, TimeZoneOptions};
