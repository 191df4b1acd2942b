//! Participant DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use domain_regatta::NewParticipant;

use super::require_non_blank;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipantRequest {
    pub name: String,
    pub email: String,
    pub country: String,
    pub sail_number: Option<String>,
    pub boat_class: String,
    /// Defaults to the time of the request
    pub registration_date: Option<DateTime<Utc>>,
}

impl RegisterParticipantRequest {
    pub fn into_new_participant(self) -> Result<NewParticipant, ApiError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("country", &self.country)?;
        require_non_blank("boatClass", &self.boat_class)?;
        if !self.email.contains('@') {
            return Err(ApiError::Validation(format!(
                "email '{}' is not an address",
                self.email
            )));
        }

        Ok(NewParticipant {
            name: self.name,
            email: self.email,
            country: self.country,
            sail_number: self.sail_number,
            boat_class: self.boat_class,
            registration_date: self.registration_date.unwrap_or_else(Utc::now),
            races: Vec::new(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    pub country: String,
}
