//! Property-Based Test Generators
//!
//! proptest strategies for regatta records. Timestamps carry milliseconds
//! so orderings are exercised below one second.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use domain_regatta::{NewParticipant, NewRace, NewWeatherObservation, RaceStatus};

/// Venues used by generated records; small so queries have collisions
pub const VENUES: [&str; 3] = ["Hong Kong", "Kiel", "Auckland"];

pub fn race_status_strategy() -> impl Strategy<Value = RaceStatus> {
    prop_oneof![
        Just(RaceStatus::Upcoming),
        Just(RaceStatus::Active),
        Just(RaceStatus::Completed),
    ]
}

/// Millisecond timestamps between 2020-01-01 and roughly 2030
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    let start = Utc
        .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp();
    (0i64..315_360_000i64, 0u32..1000).prop_map(move |(offset, millis)| {
        Utc.timestamp_opt(start + offset, millis * 1_000_000)
            .single()
            .unwrap_or_else(Utc::now)
    })
}

pub fn venue_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VENUES.to_vec()).prop_map(str::to_string)
}

pub fn country_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["GBR", "AUS", "NZL", "HKG", "GER"]).prop_map(str::to_string)
}

pub fn new_race_strategy() -> impl Strategy<Value = NewRace> {
    (
        "[A-Z][a-z]{2,10} (Cup|Trophy|Series)",
        timestamp_strategy(),
        venue_strategy(),
        race_status_strategy(),
    )
        .prop_map(|(name, date, location, status)| {
            NewRace::new(name, date, location).with_status(status)
        })
}

pub fn new_participant_strategy() -> impl Strategy<Value = NewParticipant> {
    (
        "[A-Z]\\. [A-Z][a-z]{2,8}",
        country_strategy(),
        prop::sample::select(vec!["Dragon", "Etchells", "Laser", "49er"]),
        timestamp_strategy(),
    )
        .prop_map(|(name, country, boat_class, registration_date)| NewParticipant {
            email: format!("{}@example.com", name.replace(". ", "").to_lowercase()),
            name,
            country,
            sail_number: None,
            boat_class: boat_class.to_string(),
            registration_date,
            races: Vec::new(),
        })
}

pub fn weather_observation_strategy() -> impl Strategy<Value = NewWeatherObservation> {
    (
        timestamp_strategy(),
        venue_strategy(),
        0.0f64..40.0,
        0.0f64..360.0,
        -5.0f64..40.0,
        980.0f64..1040.0,
        10.0f64..100.0,
    )
        .prop_map(
            |(timestamp, location, wind_speed, wind_direction, temperature, pressure, humidity)| {
                NewWeatherObservation {
                    timestamp,
                    location,
                    wind_speed,
                    wind_direction,
                    temperature,
                    pressure,
                    humidity,
                    conditions: "Generated".to_string(),
                }
            },
        )
}
