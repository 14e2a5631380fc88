//! Compact zone-rule table rows, as stored on disk.
//!
//! ```json
//! {
//!   "America/New_York": {
//!     "o": "-5:0",
//!     "f": "E{c}T",
//!     "s": { "m": 3, "r": "0>8", "t": "2:0", "z": "w", "v": "1:0", "c": "D" },
//!     "e": { "m": 11, "r": "0>1", "t": "2:0", "z": "w", "c": "S" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TzError;

/// One annually recurring transition, as written in a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    /// Month, 1 = January.
    #[serde(rename = "m")]
    pub month: u8,
    /// Rule code: `l0`, `f0`, `0>8`, `0<15`, or a plain day number.
    #[serde(rename = "r")]
    pub rule: String,
    /// Time of day of the transition, `H:M[:S]`.
    #[serde(rename = "t")]
    pub time: String,
    /// Clock the time refers to: `u` (UTC), `s` (standard) or `w` (wall).
    #[serde(rename = "z", default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    /// Savings in effect after this transition, `H:M`.
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    /// Letter substituted for `{c}` in the display format.
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
}

/// One zone, as written in a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRow {
    /// Raw offset from UTC, `H:M[:S]`, east positive.
    #[serde(rename = "o")]
    pub offset: String,
    /// Display format, e.g. `"E{c}T"` or `"GMT/BST"`.
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Start of daylight saving.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<RuleRow>,
    /// End of daylight saving.
    #[serde(rename = "e", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<RuleRow>,
}

impl ZoneRow {
    /// A row for a fixed zone with no daylight saving.
    pub fn fixed(offset: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            offset: offset.into(),
            format: Some(format.into()),
            start: None,
            end: None,
        }
    }
}

/// Map of zone id to row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneTable {
    zones: BTreeMap<String, ZoneRow>,
}

impl ZoneTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a table from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::Json`] if the text is not a valid table.
    pub fn from_json(text: &str) -> Result<Self, TzError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Overlays `other` on this table; rows in `other` replace rows with
    /// the same id.
    pub fn merge(mut self, other: ZoneTable) -> Self {
        self.zones.extend(other.zones);
        self
    }

    /// Adds or replaces the row for `id`.
    pub fn insert(&mut self, id: impl Into<String>, row: ZoneRow) {
        self.zones.insert(id.into(), row);
    }

    /// The row for `id`, if present.
    pub fn get(&self, id: &str) -> Option<&ZoneRow> {
        self.zones.get(id)
    }

    /// Zone ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// Rows with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZoneRow)> {
        self.zones.iter().map(|(id, row)| (id.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
