use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{AppError, FieldError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the textual `dateApplied` value sent by clients.
///
/// Accepts a plain calendar date (`2024-01-10`) or an RFC 3339 timestamp, in
/// which case the UTC calendar date is kept.
pub fn parse_date_applied(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| {
            DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| {
            AppError::ValidationError(vec![FieldError {
                field: "dateApplied".to_string(),
                message: "Must be a date in YYYY-MM-DD or RFC 3339 format".to_string(),
            }])
        })
}
