use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Parse a UUID from its wire representation, naming the field on failure.
pub fn parse_uuid(value: &str, field: &'static str) -> CoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| CoreError::Uuid {
        field,
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse an RFC 3339 timestamp from its wire representation, naming the
/// field on failure. Timestamps are normalized to UTC.
pub fn parse_timestamp(value: &str, field: &'static str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::Timestamp {
            field,
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
