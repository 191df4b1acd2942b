//! Domain events for the regatta
//!
//! Each successful mutation produces one event, which is forwarded to the
//! analytics sink under a stable snake_case name with camelCase property
//! keys.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AnalyticsEvent, ParticipantId, RaceId};

use crate::race::RaceStatus;

/// Domain events emitted by the regatta service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegattaEvent {
    RaceCreated {
        name: String,
        date: DateTime<Utc>,
        location: String,
    },

    RaceStatusUpdated {
        race_id: RaceId,
        status: RaceStatus,
    },

    RaceResultsUpdated {
        race_id: RaceId,
        result_count: usize,
    },

    ParticipantRegistered {
        name: String,
        country: String,
        boat_class: String,
    },

    ParticipantAddedToRace {
        participant_id: ParticipantId,
        race_id: RaceId,
        race_name: String,
    },

    WeatherDataRecorded {
        location: String,
        conditions: String,
    },
}

impl RegattaEvent {
    /// Analytics event name
    pub fn name(&self) -> &'static str {
        match self {
            RegattaEvent::RaceCreated { .. } => "race_created",
            RegattaEvent::RaceStatusUpdated { .. } => "race_status_updated",
            RegattaEvent::RaceResultsUpdated { .. } => "race_results_updated",
            RegattaEvent::ParticipantRegistered { .. } => "participant_registered",
            RegattaEvent::ParticipantAddedToRace { .. } => "participant_added_to_race",
            RegattaEvent::WeatherDataRecorded { .. } => "weather_data_recorded",
        }
    }

    pub fn to_analytics(&self) -> AnalyticsEvent {
        let event = AnalyticsEvent::new(self.name());
        match self {
            RegattaEvent::RaceCreated { name, date, location } => event
                .with_property("name", name.as_str())
                .with_property("date", date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
                .with_property("location", location.as_str()),
            RegattaEvent::RaceStatusUpdated { race_id, status } => event
                .with_property("raceId", race_id.as_str())
                .with_property("status", status.as_str()),
            RegattaEvent::RaceResultsUpdated { race_id, result_count } => event
                .with_property("raceId", race_id.as_str())
                .with_property("resultCount", *result_count),
            RegattaEvent::ParticipantRegistered { name, country, boat_class } => event
                .with_property("name", name.as_str())
                .with_property("country", country.as_str())
                .with_property("boatClass", boat_class.as_str()),
            RegattaEvent::ParticipantAddedToRace { participant_id, race_id, race_name } => event
                .with_property("participantId", participant_id.as_str())
                .with_property("raceId", race_id.as_str())
                .with_property("raceName", race_name.as_str()),
            RegattaEvent::WeatherDataRecorded { location, conditions } => event
                .with_property("location", location.as_str())
                .with_property("conditions", conditions.as_str()),
        }
    }
}

impl From<&RegattaEvent> for AnalyticsEvent {
    fn from(event: &RegattaEvent) -> Self {
        event.to_analytics()
    }
}
