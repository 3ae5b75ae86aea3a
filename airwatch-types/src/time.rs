//! Timestamp parsing and display formatting.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, TimeZone};

use crate::ReadingError;

/// Chart axis format: 24-hour clock, minutes.
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

/// Header format for the "last updated" line.
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an RFC 3339 capture timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ReadingError> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|source| ReadingError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Format a capture timestamp as `HH:MM` in the host's local time zone.
pub fn format_time_label(captured_at: &str) -> Result<String, ReadingError> {
    format_time_label_in(captured_at, &Local)
}

/// Format a capture timestamp as `HH:MM` in the given time zone.
///
/// Fails closed: a value that does not parse yields
/// [`ReadingError::InvalidTimestamp`] rather than a placeholder label.
pub fn format_time_label_in<Tz>(captured_at: &str, tz: &Tz) -> Result<String, ReadingError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(captured_at, tz, TIME_LABEL_FORMAT)
}

/// Format a capture timestamp as a full date and time in the given zone.
pub fn format_last_updated_in<Tz>(captured_at: &str, tz: &Tz) -> Result<String, ReadingError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(captured_at, tz, LAST_UPDATED_FORMAT)
}

fn format_in<Tz>(captured_at: &str, tz: &Tz, format: &str) -> Result<String, ReadingError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let ts = parse_timestamp(captured_at)?;
    Ok(ts.with_timezone(tz).format(format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_time_label_utc() {
        let label = format_time_label_in("2025-09-09T11:32:00Z", &Utc).unwrap();
        assert_eq!(label, "11:32");
    }

    #[test]
    fn test_time_label_is_24_hour() {
        let label = format_time_label_in("2025-09-09T23:05:59Z", &Utc).unwrap();
        assert_eq!(label, "23:05");
    }

    #[test]
    fn test_time_label_converts_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let label = format_time_label_in("2025-09-09T11:32:00Z", &plus_two).unwrap();
        assert_eq!(label, "13:32");
    }

    #[test]
    fn test_time_label_defaults_to_local() {
        let ts = "2025-09-09T11:32:00Z";
        let local = format_time_label(ts).unwrap();
        assert_eq!(local, format_time_label_in(ts, &Local).unwrap());
        assert_eq!(local.len(), 5);
        assert!(format_time_label("not-a-time").is_err());
    }

    #[test]
    fn test_time_label_respects_source_offset() {
        assert_eq!(
            format_time_label_in("2025-09-09T11:32:00+05:30", &Utc).unwrap(),
            "06:02"
        );
    }

    #[test]
    fn test_invalid_timestamp_fails_closed() {
        let err = format_time_label_in("not-a-time", &Utc).unwrap_err();
        match err {
            ReadingError::InvalidTimestamp { value, .. } => assert_eq!(value, "not-a-time"),
        }
    }

    #[test]
    fn test_empty_timestamp_fails_closed() {
        assert!(format_time_label_in("", &Utc).is_err());
    }

    #[test]
    fn test_last_updated_format() {
        assert_eq!(
            format_last_updated_in("2025-09-09T11:32:00Z", &Utc).unwrap(),
            "2025-09-09 11:32:00"
        );
    }
}
