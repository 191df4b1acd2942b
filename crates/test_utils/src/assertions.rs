//! Custom Test Assertions
//!
//! Assertion helpers for regatta records that print the offending record
//! rather than a bare boolean.

use core_kernel::{ParticipantId, RaceId};
use domain_regatta::{Participant, Race, WeatherObservation};

use crate::doubles::RecordingAnalyticsSink;

/// Asserts races are in non-decreasing date order
pub fn assert_sorted_by_date(races: &[Race]) {
    for pair in races.windows(2) {
        assert!(
            pair[0].date <= pair[1].date,
            "Races out of date order: '{}' ({}) before '{}' ({})",
            pair[0].name,
            pair[0].date,
            pair[1].name,
            pair[1].date
        );
    }
}

/// Asserts every race has status `upcoming`
pub fn assert_all_upcoming(races: &[Race]) {
    for race in races {
        assert!(
            race.is_upcoming(),
            "Expected only upcoming races, found '{}' with status {}",
            race.name,
            race.status
        );
    }
}

/// Asserts both sides of a participant-race link are present
pub fn assert_linked(race: &Race, participant: &Participant) {
    assert!(
        race.has_participant(&participant.id),
        "Race {} does not list participant {}: {:?}",
        race.id,
        participant.id,
        race.participants
    );
    assert!(
        participant.is_entered_in(&race.id),
        "Participant {} does not list race {}: {:?}",
        participant.id,
        race.id,
        participant.races
    );
}

/// Asserts `id` occurs exactly `expected` times in a race's participants
pub fn assert_participant_count(race: &Race, id: &ParticipantId, expected: usize) {
    let actual = race.participants.iter().filter(|p| *p == id).count();
    assert_eq!(
        actual, expected,
        "Race {} lists participant {} {} time(s), expected {}",
        race.id, id, actual, expected
    );
}

/// Asserts `id` occurs exactly `expected` times in a participant's races
pub fn assert_race_count(participant: &Participant, id: &RaceId, expected: usize) {
    let actual = participant.races.iter().filter(|r| *r == id).count();
    assert_eq!(
        actual, expected,
        "Participant {} lists race {} {} time(s), expected {}",
        participant.id, id, actual, expected
    );
}

/// Asserts the observation is from `location`
pub fn assert_observed_at(observation: &WeatherObservation, location: &str) {
    assert_eq!(
        observation.location, location,
        "Observation {} is from '{}', expected '{}'",
        observation.id, observation.location, location
    );
}

/// Asserts the sink received an event with this name
pub async fn assert_event_emitted(sink: &RecordingAnalyticsSink, name: &str) {
    let names = sink.event_names().await;
    assert!(
        names.iter().any(|n| n == name),
        "Expected analytics event '{}', got {:?}",
        name,
        names
    );
}

/// Asserts the sink received nothing
pub async fn assert_no_events(sink: &RecordingAnalyticsSink) {
    let names = sink.event_names().await;
    assert!(names.is_empty(), "Expected no analytics events, got {:?}", names);
}
