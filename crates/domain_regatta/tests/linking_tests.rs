//! Tests for entering participants in races

use std::sync::Arc;

use core_kernel::{ParticipantId, RaceId};
use domain_regatta::{collections, RegattaError};
use test_utils::{
    assert_event_emitted, assert_linked, assert_no_events, assert_participant_count,
    assert_race_count, FailingAnalyticsSink, RegattaFixtures, StoreOperation, TestHarness,
};

// ============================================================================
// successful links
// ============================================================================

mod linking {
    use super::*;

    #[tokio::test]
    async fn test_worlds_example() {
        let harness = TestHarness::new();
        let service = &harness.service;
        let race_id = service.create_race(RegattaFixtures::worlds_2024()).await.unwrap();
        let participant_id = service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();

        service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap();

        let race = service.get_race(&race_id).await.unwrap().unwrap();
        let participant = service.get_participant(&participant_id).await.unwrap().unwrap();
        assert_eq!(race.participants, vec![participant_id.clone()]);
        assert_eq!(participant.races, vec![race_id.clone()]);
        assert_linked(&race, &participant);

        let event = harness
            .analytics
            .last("participant_added_to_race")
            .await
            .unwrap();
        assert_eq!(event.property("participantId").unwrap(), participant_id.as_str());
        assert_eq!(event.property("raceId").unwrap(), race_id.as_str());
        assert_eq!(event.property("raceName").unwrap(), "2024 Worlds");
    }

    #[tokio::test]
    async fn test_existing_entries_are_preserved() {
        let harness = TestHarness::new();
        let service = &harness.service;
        let worlds = service.create_race(RegattaFixtures::worlds_2024()).await.unwrap();
        let gold_cup = service
            .create_race(RegattaFixtures::completed_race())
            .await
            .unwrap();
        let sailor = service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();

        service.add_participant_to_race(&sailor, &gold_cup).await.unwrap();
        service.add_participant_to_race(&sailor, &worlds).await.unwrap();

        let participant = service.get_participant(&sailor).await.unwrap().unwrap();
        assert_eq!(participant.races, vec![gold_cup, worlds]);
    }

    #[tokio::test]
    async fn test_linking_twice_appends_twice() {
        let harness = TestHarness::new();
        let service = &harness.service;
        let race_id = service.create_race(RegattaFixtures::worlds_2024()).await.unwrap();
        let participant_id = service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();

        service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap();
        service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap();

        let race = service.get_race(&race_id).await.unwrap().unwrap();
        let participant = service.get_participant(&participant_id).await.unwrap().unwrap();
        assert_participant_count(&race, &participant_id, 2);
        assert_race_count(&participant, &race_id, 2);
    }
}

// ============================================================================
// missing records
// ============================================================================

mod not_found {
    use super::*;

    #[tokio::test]
    async fn test_missing_participant_changes_nothing() {
        let harness = TestHarness::new();
        let race_id = harness
            .service
            .create_race(RegattaFixtures::worlds_2024())
            .await
            .unwrap();
        let created_events = harness.analytics.events().await.len();

        let error = harness
            .service
            .add_participant_to_race(&ParticipantId::new("ghost"), &race_id)
            .await
            .unwrap_err();

        match error {
            RegattaError::NotFound { entity, id } => {
                assert_eq!(entity, "Participant");
                assert_eq!(id, "ghost");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
        let race = harness.service.get_race(&race_id).await.unwrap().unwrap();
        assert!(race.participants.is_empty());
        assert_eq!(harness.analytics.events().await.len(), created_events);
    }

    #[tokio::test]
    async fn test_missing_race_changes_nothing() {
        let harness = TestHarness::new();
        let participant_id = harness
            .service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();

        let error = harness
            .service
            .add_participant_to_race(&participant_id, &RaceId::new("R404"))
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert!(error.to_string().contains("R404"));
        let participant = harness
            .service
            .get_participant(&participant_id)
            .await
            .unwrap()
            .unwrap();
        assert!(participant.races.is_empty());
    }

    #[tokio::test]
    async fn test_both_missing_is_not_found() {
        let harness = TestHarness::new();

        let error = harness
            .service
            .add_participant_to_race(&ParticipantId::new("p"), &RaceId::new("r"))
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert_no_events(&harness.analytics).await;
    }
}

// ============================================================================
// partial failure
// ============================================================================

mod partial_failure {
    use super::*;

    async fn seeded(harness: &TestHarness) -> (ParticipantId, RaceId) {
        let race_id = harness
            .service
            .create_race(RegattaFixtures::worlds_2024())
            .await
            .unwrap();
        let participant_id = harness
            .service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();
        (participant_id, race_id)
    }

    #[tokio::test]
    async fn test_race_write_failure_leaves_participant_side_written() {
        let harness = TestHarness::with_faults(|store| {
            store.failing_on(StoreOperation::Update, collections::RACES)
        });
        let (participant_id, race_id) = seeded(&harness).await;

        let error = harness
            .service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap_err();

        assert!(matches!(error, RegattaError::StoreUnavailable(_)));
        let race = harness.service.get_race(&race_id).await.unwrap().unwrap();
        let participant = harness
            .service
            .get_participant(&participant_id)
            .await
            .unwrap()
            .unwrap();
        assert!(race.participants.is_empty());
        assert_eq!(participant.races, vec![race_id]);
        assert!(harness
            .analytics
            .last("participant_added_to_race")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_participant_write_failure_leaves_race_side_written() {
        let harness = TestHarness::with_faults(|store| {
            store.failing_on(StoreOperation::Update, collections::PARTICIPANTS)
        });
        let (participant_id, race_id) = seeded(&harness).await;

        let result = harness
            .service
            .add_participant_to_race(&participant_id, &race_id)
            .await;

        assert!(matches!(result, Err(RegattaError::StoreUnavailable(_))));
        let race = harness.service.get_race(&race_id).await.unwrap().unwrap();
        assert_eq!(race.participants, vec![participant_id]);
    }

    #[tokio::test]
    async fn test_read_failure_writes_nothing() {
        let harness = TestHarness::with_faults(|store| {
            store.failing_on(StoreOperation::Read, collections::PARTICIPANTS)
        });
        let (participant_id, race_id) = seeded(&harness).await;

        let result = harness
            .service
            .add_participant_to_race(&participant_id, &race_id)
            .await;

        assert!(matches!(result, Err(RegattaError::StoreUnavailable(_))));
        let race = harness.service.get_race(&race_id).await.unwrap().unwrap();
        assert!(race.participants.is_empty());
    }
}

// ============================================================================
// analytics
// ============================================================================

mod analytics {
    use super::*;

    #[tokio::test]
    async fn test_analytics_outage_does_not_fail_linking() {
        let harness = TestHarness::with_analytics(Arc::new(FailingAnalyticsSink));
        let service = &harness.service;
        let race_id = service.create_race(RegattaFixtures::worlds_2024()).await.unwrap();
        let participant_id = service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();

        service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap();

        let race = service.get_race(&race_id).await.unwrap().unwrap();
        assert_eq!(race.participants, vec![participant_id]);
    }

    #[tokio::test]
    async fn test_event_follows_the_mutations() {
        let harness = TestHarness::new();
        let service = &harness.service;
        let race_id = service.create_race(RegattaFixtures::worlds_2024()).await.unwrap();
        let participant_id = service
            .register_participant(RegattaFixtures::a_sailor())
            .await
            .unwrap();
        service
            .add_participant_to_race(&participant_id, &race_id)
            .await
            .unwrap();

        assert_event_emitted(&harness.analytics, "participant_added_to_race").await;
        assert_eq!(
            harness.analytics.event_names().await,
            vec![
                "race_created",
                "participant_registered",
                "participant_added_to_race"
            ]
        );
    }
}
