//! Request and response bodies

pub mod races;
pub mod participants;
pub mod weather;

use serde::Serialize;

/// Body returned when a record is created
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl std::fmt::Display) -> Self {
        Self { id: id.to_string() }
    }
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), crate::error::ApiError> {
    if value.trim().is_empty() {
        return Err(crate::error::ApiError::Validation(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}
