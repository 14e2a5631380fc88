//! Zone table sources.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::TzError;
use crate::table::ZoneTable;

/// The built-in zone table.
const EMBEDDED_JSON: &str = include_str!("../data/timezones.json");

/// Anything that can produce a zone table.
pub trait ZoneTableLoader {
    /// Loads the table.
    ///
    /// # Errors
    ///
    /// Returns [`TzError`] if the table cannot be read or decoded.
    fn load(&self) -> Result<ZoneTable, TzError>;
}

/// The table compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTable;

impl ZoneTableLoader for EmbeddedTable {
    fn load(&self) -> Result<ZoneTable, TzError> {
        ZoneTable::from_json(EMBEDDED_JSON)
    }
}

/// A JSON zone table on disk, optionally laid over the embedded table.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
    overlay_embedded: bool,
}

impl JsonFileLoader {
    /// Reads `path` on its own.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overlay_embedded: false,
        }
    }

    /// When `true`, rows from the file replace or extend the embedded table
    /// instead of standing alone.
    pub fn with_overlay_embedded(mut self, overlay: bool) -> Self {
        self.overlay_embedded = overlay;
        self
    }

    /// File the table is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ZoneTableLoader for JsonFileLoader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<ZoneTable, TzError> {
        if !self.path.exists() {
            return Err(TzError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let text = std::fs::read_to_string(&self.path)?;
        let table = ZoneTable::from_json(&text)?;
        debug!(zones = table.len(), "read zone table");
        if self.overlay_embedded {
            Ok(EmbeddedTable.load()?.merge(table))
        } else {
            Ok(table)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_table_decodes() {
        let table = EmbeddedTable.load().unwrap();
        assert!(table.len() >= 40);
        assert!(table.get("Etc/UTC").is_some());
        assert!(table.get("America/New_York").is_some());
        assert!(table.get("Australia/Sydney").is_some());
    }

    #[test]
    fn file_alone() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Mars/Olympus": {{"o": "0:37", "f": "MTC"}}}}"#).unwrap();
        let table = JsonFileLoader::new(file.path()).load().unwrap();
        assert_eq!(table.ids().collect::<Vec<_>>(), vec!["Mars/Olympus"]);
    }

    #[test]
    fn file_over_embedded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Asia/Tokyo": {{"o": "10:0", "f": "XST"}}}}"#).unwrap();
        let table = JsonFileLoader::new(file.path())
            .with_overlay_embedded(true)
            .load()
            .unwrap();
        assert_eq!(table.get("Asia/Tokyo").unwrap().offset, "10:0");
        assert!(table.get("Europe/London").is_some());
    }

    #[test]
    fn missing_file() {
        let err = JsonFileLoader::new("/nonexistent/zones.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, TzError::FileNotFound { .. }));
    }

    #[test]
    fn malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = JsonFileLoader::new(file.path()).load().unwrap_err();
        assert!(matches!(err, TzError::Json { .. }));
    }
}
