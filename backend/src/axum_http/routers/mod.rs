pub mod admin;
pub mod auth;
pub mod plans;
pub mod server_status;
pub mod staff;
pub mod testimonials;

use uuid::Uuid;

use super::error_responses::AppError;

/// Ids are UUIDs; anything else cannot name a record, so it is reported as missing.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}
