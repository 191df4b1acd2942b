//! Participant records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ParticipantId, RaceId};

/// Fields supplied when registering a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    /// Country code, e.g. "GBR"
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sail_number: Option<String>,
    pub boat_class: String,
    #[serde(with = "core_kernel::timestamp")]
    pub registration_date: DateTime<Utc>,
    #[serde(default)]
    pub races: Vec<RaceId>,
}

impl NewParticipant {
    /// The record a store holds after assigning `id`
    pub fn into_participant(self, id: ParticipantId) -> Participant {
        Participant {
            id,
            name: self.name,
            email: self.email,
            country: self.country,
            sail_number: self.sail_number,
            boat_class: self.boat_class,
            registration_date: self.registration_date,
            races: self.races,
        }
    }
}

/// A registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sail_number: Option<String>,
    pub boat_class: String,
    #[serde(with = "core_kernel::timestamp")]
    pub registration_date: DateTime<Utc>,
    #[serde(default)]
    pub races: Vec<RaceId>,
}

impl Participant {
    pub fn is_entered_in(&self, race_id: &RaceId) -> bool {
        self.races.contains(race_id)
    }
}
