//! Row-to-record parsing helpers.
//!
//! The repos convert `libsql::Row` (column-indexed) into typed records.
//! These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2024-02-09T14:30:00+00:00"`) and `SQLite`'s
/// default format (`"2024-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either
/// format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert an optional timestamp into a bind parameter (`NULL` when unset).
#[must_use]
pub fn datetime_param(value: Option<DateTime<Utc>>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |dt| dt.to_rfc3339().into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2024-02-29T12:15:59+00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-02-29T12:15:59+00:00");
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2024-02-29 12:15:59").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-02-29T12:15:59+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn optional_datetime_handles_empty() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert!(
            parse_optional_datetime(Some("2024-02-29T12:15:59+00:00"))
                .unwrap()
                .is_some()
        );
    }
}
