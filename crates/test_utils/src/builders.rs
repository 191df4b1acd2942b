//! Test Data Builders
//!
//! Builders that start from the fixtures and let a test change only the
//! fields it cares about.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{ParticipantId, RaceId};
use domain_regatta::{
    NewParticipant, NewRace, NewWeatherObservation, RaceResult, RaceStatus, SailingConditions,
};

use crate::fixtures::{RegattaFixtures, TemporalFixtures};

/// Builder for race test data
pub struct TestRaceBuilder {
    race: NewRace,
}

impl Default for TestRaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRaceBuilder {
    pub fn new() -> Self {
        Self {
            race: RegattaFixtures::worlds_2024(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.race.name = name.into();
        self
    }

    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.race.date = date;
        self
    }

    /// Moves the race `days` after the Worlds start date
    pub fn days_after_start(self, days: i64) -> Self {
        self.on(TemporalFixtures::worlds_start() + Duration::days(days))
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.race.location = location.into();
        self
    }

    pub fn with_status(mut self, status: RaceStatus) -> Self {
        self.race.status = status;
        self
    }

    pub fn with_conditions(mut self, conditions: SailingConditions) -> Self {
        self.race.conditions = Some(conditions);
        self
    }

    pub fn with_results(mut self, results: Vec<RaceResult>) -> Self {
        self.race.results = Some(results);
        self
    }

    pub fn build(self) -> NewRace {
        self.race
    }
}

/// Builder for participant test data
pub struct TestParticipantBuilder {
    participant: NewParticipant,
}

impl Default for TestParticipantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestParticipantBuilder {
    pub fn new() -> Self {
        Self {
            participant: RegattaFixtures::a_sailor(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.participant.name = name.into();
        self
    }

    pub fn from_country(mut self, country: impl Into<String>) -> Self {
        self.participant.country = country.into();
        self
    }

    pub fn with_sail_number(mut self, sail_number: impl Into<String>) -> Self {
        self.participant.sail_number = Some(sail_number.into());
        self
    }

    pub fn in_class(mut self, boat_class: impl Into<String>) -> Self {
        self.participant.boat_class = boat_class.into();
        self
    }

    pub fn entered_in(mut self, races: Vec<RaceId>) -> Self {
        self.participant.races = races;
        self
    }

    pub fn build(self) -> NewParticipant {
        self.participant
    }
}

/// Builder for weather observation test data
pub struct TestWeatherBuilder {
    observation: NewWeatherObservation,
}

impl Default for TestWeatherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWeatherBuilder {
    pub fn new() -> Self {
        Self {
            observation: RegattaFixtures::morning_weather(),
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.observation.location = location.into();
        self
    }

    pub fn observed_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.observation.timestamp = timestamp;
        self
    }

    pub fn with_wind(mut self, speed: f64, direction: f64) -> Self {
        self.observation.wind_speed = speed;
        self.observation.wind_direction = direction;
        self
    }

    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.observation.conditions = conditions.into();
        self
    }

    pub fn build(self) -> NewWeatherObservation {
        self.observation
    }
}

/// Builds a finishing order, one minute apart, in the given participant order
pub fn finishing_order(participants: &[ParticipantId]) -> Vec<RaceResult> {
    let first_finish = TemporalFixtures::race_day_afternoon();
    participants
        .iter()
        .enumerate()
        .map(|(index, participant_id)| RaceResult {
            position: index as u32 + 1,
            participant_id: participant_id.clone(),
            finish_time: first_finish + Duration::minutes(index as i64),
        })
        .collect()
}
