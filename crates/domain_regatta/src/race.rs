//! Race records
//!
//! A race is stored in the `races` collection. Its `participants` list is
//! mirrored by each participant's `races` list; the two sides are written
//! independently and can drift if one write fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ParticipantId, RaceId};

use crate::error::RegattaError;

/// Lifecycle status of a race
///
/// Any status may be set from any other; transitions are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Upcoming,
    Active,
    Completed,
}

impl RaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Upcoming => "upcoming",
            RaceStatus::Active => "active",
            RaceStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceStatus {
    type Err = RegattaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(RaceStatus::Upcoming),
            "active" => Ok(RaceStatus::Active),
            "completed" => Ok(RaceStatus::Completed),
            other => Err(RegattaError::validation(format!("unknown race status '{other}'"))),
        }
    }
}

/// Snapshot of sailing conditions for a race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SailingConditions {
    /// Knots
    pub wind_speed: f64,
    /// Degrees true
    pub wind_direction: f64,
    pub weather: String,
}

/// A single finishing position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub position: u32,
    pub participant_id: ParticipantId,
    #[serde(with = "core_kernel::timestamp")]
    pub finish_time: DateTime<Utc>,
}

/// Fields supplied when creating a race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRace {
    pub name: String,
    #[serde(with = "core_kernel::timestamp")]
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: RaceStatus,
    #[serde(default)]
    pub participants: Vec<ParticipantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<SailingConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RaceResult>>,
}

impl NewRace {
    /// Creates an upcoming race with no participants
    pub fn new(name: impl Into<String>, date: DateTime<Utc>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            location: location.into(),
            status: RaceStatus::Upcoming,
            participants: Vec::new(),
            conditions: None,
            results: None,
        }
    }

    pub fn with_status(mut self, status: RaceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_conditions(mut self, conditions: SailingConditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// The record a store holds after assigning `id`
    pub fn into_race(self, id: RaceId) -> Race {
        Race {
            id,
            name: self.name,
            date: self.date,
            location: self.location,
            status: self.status,
            participants: self.participants,
            conditions: self.conditions,
            results: self.results,
        }
    }
}

/// A stored race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    #[serde(with = "core_kernel::timestamp")]
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: RaceStatus,
    #[serde(default)]
    pub participants: Vec<ParticipantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<SailingConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RaceResult>>,
}

impl Race {
    pub fn has_participant(&self, participant_id: &ParticipantId) -> bool {
        self.participants.contains(participant_id)
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == RaceStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn worlds() -> NewRace {
        NewRace::new(
            "2024 Worlds",
            Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(),
            "Hong Kong",
        )
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("active".parse::<RaceStatus>().unwrap(), RaceStatus::Active);
        assert!("finished".parse::<RaceStatus>().is_err());
        assert_eq!(RaceStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_new_race_serializes_camel_case_without_unset_options() {
        let race = worlds().with_conditions(SailingConditions {
            wind_speed: 12.5,
            wind_direction: 90.0,
            weather: "Sunny".to_string(),
        });
        let value = serde_json::to_value(&race).unwrap();

        assert_eq!(value["status"], json!("upcoming"));
        assert_eq!(value["participants"], json!([]));
        assert_eq!(value["conditions"]["windSpeed"], json!(12.5));
        assert!(value.get("results").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_race_decodes_without_optional_fields() {
        let race: Race = serde_json::from_value(json!({
            "id": "R1",
            "name": "2024 Worlds",
            "date": "2024-09-01T00:00:00Z",
            "location": "Hong Kong",
            "status": "completed"
        }))
        .unwrap();

        assert!(race.participants.is_empty());
        assert!(race.results.is_none());
        assert_eq!(race.id.as_str(), "R1");
    }

    #[test]
    fn test_into_race_keeps_fields() {
        let race = worlds().into_race(RaceId::new("R1"));
        assert_eq!(race.name, "2024 Worlds");
        assert!(race.is_upcoming());
        assert!(!race.has_participant(&ParticipantId::new("P1")));
    }
}
