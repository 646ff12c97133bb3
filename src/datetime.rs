//! Timestamp normalization to UTC instants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::constants::datetime as consts;
use crate::errors::EnrichError;
use crate::frame::{RecordFrame, Value};

/// Parse one raw timestamp string into a UTC instant.
///
/// Accepts, in order: RFC 2822 (the legacy feed format, for example
/// `Wed, 02 Oct 2024 10:15:00 GMT`), RFC 3339 / ISO-8601 with offset,
/// naive date-times assumed UTC, and bare dates normalized to midnight
/// UTC. Anything else yields `None`.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in consts::NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, consts::NAIVE_DATE_FORMAT) {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Convert a raw timestamp column to UTC instants in place.
///
/// Malformed or missing values become the `Null` sentinel and conversion
/// continues; the whole batch never fails on one bad row. Cells that are
/// already instants are left as-is. Returns the number of rows that ended
/// up without a valid instant.
pub fn convert_datetime_column(frame: &mut RecordFrame, field: &str) -> Result<usize, EnrichError> {
    let converted: Vec<Value> = frame
        .column(field)?
        .iter()
        .map(|cell| match cell {
            Value::Text(raw) => match parse_instant(raw) {
                Some(instant) => Value::Instant(instant),
                None => Value::Null,
            },
            Value::Instant(instant) => Value::Instant(*instant),
            _ => Value::Null,
        })
        .collect();
    let invalid = converted.iter().filter(|cell| cell.is_null()).count();
    frame.append_column(field, converted)?;
    Ok(invalid)
}
