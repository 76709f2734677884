// Timestamp primitives shared by the auction service and the search read model.
//
// Purpose
// - Fix one wire representation for `updated_at` and for the watermark query parameter.
//
// Notes
// - All timestamps are UTC. Formatting keeps full sub-second precision so a watermark read back
//   from the read model never lands after the record it was derived from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

pub type Timestamp = DateTime<Utc>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised timestamp: {0:?}")]
pub struct TimestampParseError(pub String);

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn format_timestamp(value: Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a client supplied timestamp. Offsets are honoured; values without an offset are UTC.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, TimestampParseError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampParseError(raw.to_string()))
}
