//! `H:M[:S]` offset strings and `+HH:MM` rendering.

use crate::error::TzError;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60_000;

fn invalid(text: &str, reason: impl Into<String>) -> TzError {
    TzError::InvalidOffset {
        text: text.into(),
        reason: reason.into(),
    }
}

/// Parses a signed `H[:M[:S]]` string into seconds.
///
/// The sign applies to the whole value, so `"-3:30"` is minus three and a
/// half hours. Minutes and seconds must be below 60; hours are unbounded so
/// that rule times such as `"24:0"` are accepted.
///
/// # Errors
///
/// Returns [`TzError::InvalidOffset`] on empty input, more than three
/// components, non-numeric components, or minutes/seconds of 60 or more.
pub fn parse_hms_seconds(text: &str) -> Result<i32, TzError> {
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if body.is_empty() {
        return Err(invalid(text, "empty"));
    }

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid(text, "expected H[:M[:S]]"));
    }
    let mut values = [0i32; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<u16>()
            .map_err(|_| invalid(text, format!("{part:?} is not a number")))?
            as i32;
    }
    let [hours, minutes, seconds] = values;
    if minutes >= 60 || seconds >= 60 {
        return Err(invalid(text, "minutes and seconds must be below 60"));
    }
    Ok(sign * (hours * 3_600 + minutes * 60 + seconds))
}

/// Parses a signed `H[:M[:S]]` string into whole minutes, rounding seconds.
///
/// # Errors
///
/// See [`parse_hms_seconds`].
pub fn parse_offset_minutes(text: &str) -> Result<i32, TzError> {
    let seconds = parse_hms_seconds(text)?;
    Ok((seconds as f64 / 60.0).round() as i32)
}

/// Renders minutes east of UTC as `+HH:MM`.
pub fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}
