//! Reference instant parsing
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Utc};

use crate::{error::Error, prelude::Epoch};

/// Timestamp formats carrying an explicit UTC offset
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Naive timestamp formats (no offset), always interpreted in UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 timestamp into an UTC [Epoch].
///
/// Timestamps with an explicit offset (`2024-03-01T02:30:00+00:00`,
/// `2024-03-01T02:30:00Z`, `2024-02-29T23:30:00-03:00`) are converted to UTC.
/// Timestamps lacking zone information, like the `DATE-OBS` header card
/// (`2024-03-01T02:30:00.123`), are interpreted as UTC.
pub fn parse_reference_instant(s: &str) -> Result<Epoch, Error> {
    let trimmed = s.trim();
    let utc = match parse_zoned(trimmed) {
        Some(zoned) => zoned.with_timezone(&Utc),
        None => parse_naive(trimmed)
            .ok_or_else(|| Error::InvalidTimestamp(trimmed.to_string()))?
            .and_utc(),
    };
    utc_epoch(&utc).ok_or_else(|| Error::InvalidTimestamp(trimmed.to_string()))
}

fn parse_zoned(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn utc_epoch(dt: &DateTime<Utc>) -> Option<Epoch> {
    // chrono encodes leap seconds as nanos >= 1s
    let nanos = dt.nanosecond().min(999_999_999);
    Epoch::maybe_from_gregorian_utc(
        dt.year(),
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
        nanos,
    )
    .ok()
}
