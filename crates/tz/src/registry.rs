//! Read-only registry of zone records.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::TzError;
use crate::loader::{EmbeddedTable, ZoneTableLoader};
use crate::local::{LocalOffsets, OffsetSource};
use crate::record::ZoneRecord;
use crate::table::ZoneTable;
use crate::zone::{LOCAL_ZONE_ID, TimeZone, TimeZoneOptions};

/// Id of the record substituted for unknown zone ids.
pub const FALLBACK_ZONE_ID: &str = "Etc/UTC";

/// All zones of one table, parsed once and shared between time zones.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    records: HashMap<String, Arc<ZoneRecord>>,
    fallback: Arc<ZoneRecord>,
}

impl ZoneRegistry {
    /// Builds a registry from a table.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::InvalidRule`] if any row has a malformed rule.
    #[instrument(skip(table), fields(zones = table.len()))]
    pub fn from_table(table: &ZoneTable) -> Result<Self, TzError> {
        let mut records = HashMap::with_capacity(table.len());
        for (id, row) in table.iter() {
            records.insert(id.to_string(), Arc::new(ZoneRecord::from_row(id, row)?));
        }
        let fallback = match records.get(FALLBACK_ZONE_ID) {
            Some(record) => Arc::clone(record),
            None => Arc::new(ZoneRecord::utc()),
        };
        debug!(zones = records.len(), "zone registry ready");
        Ok(Self { records, fallback })
    }

    /// Builds a registry from whatever `loader` produces.
    ///
    /// # Errors
    ///
    /// Returns [`TzError`] if loading fails or a row is malformed.
    pub fn load(loader: &dyn ZoneTableLoader) -> Result<Self, TzError> {
        Self::from_table(&loader.load()?)
    }

    /// Registry over the built-in table.
    ///
    /// # Errors
    ///
    /// Returns [`TzError`] if the embedded table fails to decode.
    pub fn embedded() -> Result<Self, TzError> {
        Self::load(&EmbeddedTable)
    }

    /// Whether `id` is known, without falling back.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// The record for `id`, or the `Etc/UTC` record if `id` is unknown.
    pub fn record(&self, id: &str) -> Arc<ZoneRecord> {
        match self.records.get(id) {
            Some(record) => Arc::clone(record),
            None => {
                debug!(zone = id, fallback = FALLBACK_ZONE_ID, "unknown zone id");
                Arc::clone(&self.fallback)
            }
        }
    }

    /// Known zone ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds a time zone; the local zone samples the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::Validation`] if the options are inconsistent.
    pub fn time_zone(&self, options: &TimeZoneOptions) -> Result<TimeZone, TzError> {
        self.time_zone_with(options, LocalOffsets::system)
    }

    /// Builds a time zone, sampling `source` if the local zone is selected.
    ///
    /// # Errors
    ///
    /// Returns [`TzError::Validation`] if the options are inconsistent.
    pub fn time_zone_with_source(
        &self,
        options: &TimeZoneOptions,
        source: Arc<dyn OffsetSource>,
    ) -> Result<TimeZone, TzError> {
        self.time_zone_with(options, || LocalOffsets::sample(source))
    }

    fn time_zone_with(
        &self,
        options: &TimeZoneOptions,
        local: impl FnOnce() -> LocalOffsets,
    ) -> Result<TimeZone, TzError> {
        options.validate()?;
        let zone = match (options.id(), options.offset()) {
            (_, Some(minutes)) => TimeZone::fixed(minutes),
            (None, None) | (Some(LOCAL_ZONE_ID), None) => TimeZone::local(local()),
            (Some(id), None) => TimeZone::from_record(self.record(id)),
        };
        Ok(zone.with_locale(options.locale().map(str::to_string)))
    }
}
