//! Absolute delivery time parsing

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::domain::error::DeliveryTimeParseError;

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse an absolute delivery time.
///
/// Accepts RFC 3339 with an explicit offset, or a naive date-time taken
/// in the local time zone. Past instants are accepted as-is.
pub fn parse_delivery_time(input: &str) -> Result<DateTime<Utc>, DeliveryTimeParseError> {
    let trimmed = input.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Utc));
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        // Ambiguous local times (DST fold) resolve to the earlier instant
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| DeliveryTimeParseError {
            input: input.to_string(),
        })
}
