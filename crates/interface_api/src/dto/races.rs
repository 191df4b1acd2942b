//! Race DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use core_kernel::ParticipantId;
use domain_regatta::{NewRace, RaceResult, RaceStatus, SailingConditions};

use super::require_non_blank;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRaceRequest {
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Defaults to `upcoming`
    pub status: Option<RaceStatus>,
    pub conditions: Option<SailingConditions>,
}

impl CreateRaceRequest {
    pub fn into_new_race(self) -> Result<NewRace, ApiError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("location", &self.location)?;

        let mut race = NewRace::new(self.name, self.date, self.location)
            .with_status(self.status.unwrap_or(RaceStatus::Upcoming));
        race.conditions = self.conditions;
        Ok(race)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: RaceStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResultsRequest {
    pub results: Vec<RaceResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantRequest {
    pub participant_id: ParticipantId,
}
