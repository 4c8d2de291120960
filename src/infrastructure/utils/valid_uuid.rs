use uuid::Uuid;

use crate::errors::AppError;

/// Parses a record id taken from the request path.
///
/// A malformed id cannot name any record, so it is reported exactly like a
/// missing one.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Application not found".to_string()))
}
