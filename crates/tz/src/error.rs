//! Error types for almanac-tz.

use std::path::PathBuf;

/// Error type for all fallible operations in the almanac-tz crate.
///
/// Queries on a constructed [`TimeZone`](crate::TimeZone) never fail. Errors
/// come from loading and interpreting zone tables and from invalid
/// construction options.
#[derive(Debug, thiserror::Error)]
pub enum TzError {
    /// Returned when a zone table file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while reading a zone table.
    #[error("i/o error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a JSON decoding failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serde_json failure.
        reason: String,
    },

    /// Returned when an `H:M[:S]` offset or time string cannot be parsed.
    #[error("invalid offset {text:?}: {reason}")]
    InvalidOffset {
        /// The offending text.
        text: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Returned when a transition rule in a zone row cannot be interpreted.
    #[error("invalid rule for zone '{zone}': {reason}")]
    InvalidRule {
        /// Zone id the rule belongs to.
        zone: String,
        /// What was wrong with the rule.
        reason: String,
    },

    /// Returned when time zone options are inconsistent.
    #[error("invalid time zone options: {details}")]
    Validation {
        /// Human-readable description of the problem.
        details: String,
    },
}

impl From<std::io::Error> for TzError {
    fn from(e: std::io::Error) -> Self {
        TzError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for TzError {
    fn from(e: serde_json::Error) -> Self {
        TzError::Json {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = TzError::FileNotFound {
            path: PathBuf::from("/tmp/zones.json"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/zones.json");
    }

    #[test]
    fn display_invalid_offset() {
        let err = TzError::InvalidOffset {
            text: "5:xx".into(),
            reason: "bad minutes".into(),
        };
        assert_eq!(err.to_string(), "invalid offset \"5:xx\": bad minutes");
    }

    #[test]
    fn display_invalid_rule() {
        let err = TzError::InvalidRule {
            zone: "Mars/Olympus".into(),
            reason: "month 13 out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rule for zone 'Mars/Olympus': month 13 out of range"
        );
    }

    #[test]
    fn display_validation() {
        let err = TzError::Validation {
            details: "offset out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid time zone options: offset out of range"
        );
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TzError = json_err.into();
        assert!(err.to_string().starts_with("json error: "));
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TzError = io.into();
        assert_eq!(err.to_string(), "i/o error: denied");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<TzError>();
    }
}
