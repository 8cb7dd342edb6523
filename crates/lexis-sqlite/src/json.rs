//! Column encoding helpers for SQLite storage
//!
//! The frequency map is stored as a JSON object in a TEXT column and
//! timestamps as RFC 3339 strings with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use lexis_core::analysis::FrequencyMap;

use crate::error::{Result, SqliteError};

/// Serialize a frequency map to a JSON object string
pub fn serialize_frequency_map(map: &FrequencyMap) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}

/// Deserialize a JSON object string into a frequency map
pub fn deserialize_frequency_map(json: &str) -> Result<FrequencyMap> {
    Ok(serde_json::from_str(json)?)
}

/// Format a timestamp for a TEXT column (`2024-01-01T00:00:00.000Z`)
pub fn datetime_to_sql(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a TEXT column timestamp back to UTC
pub fn sql_to_datetime(datetime_str: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SqliteError::InvalidTimestamp(format!("{:?}: {}", datetime_str, e)))
}
