//! Pre-built Test Fixtures
//!
//! Ready-to-use records for the regatta worked example: the 2024 Worlds in
//! Hong Kong and a single British Dragon sailor.

use chrono::{DateTime, TimeZone, Utc};
use domain_regatta::{
    NewParticipant, NewRace, NewWeatherObservation, RaceStatus, SailingConditions,
};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Start of the 2024 Worlds (Sep 1, 2024)
    pub fn worlds_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()
    }

    /// Registration date for the example sailor (Jan 1, 2024)
    pub fn registration() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// First warning signal on race day
    pub fn race_day_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 2, 0, 0).unwrap()
    }

    /// Afternoon on race day
    pub fn race_day_afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 7, 30, 0).unwrap()
    }
}

/// Fixture for regatta records
pub struct RegattaFixtures;

impl RegattaFixtures {
    pub const VENUE: &'static str = "Hong Kong";

    /// The 2024 Worlds, upcoming, with no entries
    pub fn worlds_2024() -> NewRace {
        NewRace::new("2024 Worlds", TemporalFixtures::worlds_start(), Self::VENUE)
    }

    /// A completed race with a conditions snapshot
    pub fn completed_race() -> NewRace {
        NewRace::new(
            "2023 Gold Cup",
            Utc.with_ymd_and_hms(2023, 6, 10, 0, 0, 0).unwrap(),
            "Kiel",
        )
        .with_status(RaceStatus::Completed)
        .with_conditions(Self::breezy())
    }

    pub fn breezy() -> SailingConditions {
        SailingConditions {
            wind_speed: 18.0,
            wind_direction: 225.0,
            weather: "Overcast".to_string(),
        }
    }

    /// A. Sailor, GBR, Dragon
    pub fn a_sailor() -> NewParticipant {
        NewParticipant {
            name: "A. Sailor".to_string(),
            email: "a@x.com".to_string(),
            country: "GBR".to_string(),
            sail_number: None,
            boat_class: "Dragon".to_string(),
            registration_date: TemporalFixtures::registration(),
            races: vec![],
        }
    }

    /// Morning observation at the venue
    pub fn morning_weather() -> NewWeatherObservation {
        NewWeatherObservation {
            timestamp: TemporalFixtures::race_day_morning(),
            location: Self::VENUE.to_string(),
            wind_speed: 8.5,
            wind_direction: 90.0,
            temperature: 29.0,
            pressure: 1009.0,
            humidity: 78.0,
            conditions: "Hazy".to_string(),
        }
    }

    /// Afternoon observation at the venue, after the sea breeze fills in
    pub fn afternoon_weather() -> NewWeatherObservation {
        NewWeatherObservation {
            timestamp: TemporalFixtures::race_day_afternoon(),
            wind_speed: 14.0,
            wind_direction: 120.0,
            temperature: 31.5,
            pressure: 1007.5,
            humidity: 70.0,
            conditions: "Sea breeze".to_string(),
            ..Self::morning_weather()
        }
    }
}
