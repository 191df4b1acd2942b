//! Property-based tests for the regatta service queries

use proptest::prelude::*;

use domain_regatta::RaceStatus;
use test_utils::{
    assert_all_upcoming, assert_sorted_by_date, country_strategy, new_participant_strategy,
    new_race_strategy, weather_observation_strategy, TestHarness,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_upcoming_races_are_exactly_the_upcoming_ones(
        races in prop::collection::vec(new_race_strategy(), 0..12)
    ) {
        let expected = races.iter().filter(|race| race.status == RaceStatus::Upcoming).count();

        let upcoming = block_on(async {
            let harness = TestHarness::new();
            for race in races {
                harness.service.create_race(race).await.unwrap();
            }
            harness.service.get_upcoming_races().await.unwrap()
        });

        prop_assert_eq!(upcoming.len(), expected);
        assert_all_upcoming(&upcoming);
        assert_sorted_by_date(&upcoming);
    }

    #[test]
    fn prop_latest_weather_has_the_greatest_timestamp(
        observations in prop::collection::vec(weather_observation_strategy(), 1..12)
    ) {
        let location = observations[0].location.clone();
        let newest = observations
            .iter()
            .filter(|obs| obs.location == location)
            .map(|obs| obs.timestamp)
            .max();

        let latest = block_on(async {
            let harness = TestHarness::new();
            for observation in observations {
                harness.service.record_weather_data(observation).await.unwrap();
            }
            harness.service.get_latest_weather(&location).await.unwrap()
        });

        let latest = latest.expect("an observation exists for the location");
        prop_assert_eq!(Some(latest.timestamp), newest);
        prop_assert_eq!(latest.location, location);
    }

    #[test]
    fn prop_country_query_partitions_participants(
        participants in prop::collection::vec(new_participant_strategy(), 0..10),
        country in country_strategy()
    ) {
        let expected = participants.iter().filter(|p| p.country == country).count();

        let matched = block_on(async {
            let harness = TestHarness::new();
            for participant in participants {
                harness.service.register_participant(participant).await.unwrap();
            }
            harness.service.get_participants_by_country(&country).await.unwrap()
        });

        prop_assert_eq!(matched.len(), expected);
        prop_assert!(matched.iter().all(|p| p.country == country));
    }
}
