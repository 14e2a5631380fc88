use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "almanac.toml";

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Calendar defaults.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Zone table and default zone.
    #[serde(default)]
    pub zones: ZonesToml,
}

impl AlmanacConfig {
    /// Reads the config file.
    ///
    /// An explicit `path` must exist. Without one, `almanac.toml` in the
    /// working directory is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::read(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_calendar")]
    pub default: String,
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            default: default_calendar(),
            first_day_of_week: default_first_day_of_week(),
        }
    }
}

fn default_calendar() -> String {
    "gregorian".to_string()
}
fn default_first_day_of_week() -> String {
    "sunday".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZonesToml {
    /// JSON zone table read in place of, or over, the built-in one.
    #[serde(default)]
    pub table: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub overlay: bool,
    #[serde(default = "default_zone")]
    pub default: String,
}

impl Default for ZonesToml {
    fn default() -> Self {
        Self {
            table: None,
            overlay: true,
            default: default_zone(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_zone() -> String {
    "local".to_string()
}
