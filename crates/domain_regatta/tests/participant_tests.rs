//! Tests for participant operations

use core_kernel::ParticipantId;
use domain_regatta::RegattaError;
use test_utils::{
    assert_event_emitted, RegattaFixtures, StoreOperation, TestHarness, TestParticipantBuilder,
};

#[tokio::test]
async fn test_registered_participant_reads_back() {
    let harness = TestHarness::new();
    let id = harness
        .service
        .register_participant(RegattaFixtures::a_sailor())
        .await
        .unwrap();

    let participant = harness.service.get_participant(&id).await.unwrap().unwrap();

    assert_eq!(
        participant,
        RegattaFixtures::a_sailor().into_participant(id.clone())
    );
    assert_eq!(participant.name, "A. Sailor");
    assert!(participant.sail_number.is_none());
    assert!(participant.races.is_empty());
}

#[tokio::test]
async fn test_sail_number_is_kept() {
    let harness = TestHarness::new();
    let id = harness
        .service
        .register_participant(TestParticipantBuilder::new().with_sail_number("GBR 123").build())
        .await
        .unwrap();

    let participant = harness.service.get_participant(&id).await.unwrap().unwrap();

    assert_eq!(participant.sail_number.as_deref(), Some("GBR 123"));
}

#[tokio::test]
async fn test_unknown_participant_is_none() {
    let harness = TestHarness::new();

    let participant = harness
        .service
        .get_participant(&ParticipantId::new("missing"))
        .await
        .unwrap();

    assert!(participant.is_none());
}

#[tokio::test]
async fn test_registration_emits_event() {
    let harness = TestHarness::new();
    harness
        .service
        .register_participant(RegattaFixtures::a_sailor())
        .await
        .unwrap();

    assert_event_emitted(&harness.analytics, "participant_registered").await;
    let event = harness.analytics.last("participant_registered").await.unwrap();
    assert_eq!(event.property("country").unwrap(), "GBR");
    assert_eq!(event.property("boatClass").unwrap(), "Dragon");
}

#[tokio::test]
async fn test_participants_by_country() {
    let harness = TestHarness::new();
    let service = &harness.service;
    for (name, country) in [("Ainslie", "GBR"), ("Slingsby", "AUS"), ("Percy", "GBR")] {
        service
            .register_participant(
                TestParticipantBuilder::new()
                    .named(name)
                    .from_country(country)
                    .build(),
            )
            .await
            .unwrap();
    }

    let mut british: Vec<_> = service
        .get_participants_by_country("GBR")
        .await
        .unwrap()
        .into_iter()
        .map(|participant| participant.name)
        .collect();
    british.sort();

    assert_eq!(british, vec!["Ainslie", "Percy"]);
    assert!(service.get_participants_by_country("NZL").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_country_match_is_exact() {
    let harness = TestHarness::new();
    harness
        .service
        .register_participant(RegattaFixtures::a_sailor())
        .await
        .unwrap();

    assert!(harness
        .service
        .get_participants_by_country("gbr")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_query_failure_surfaces() {
    let harness = TestHarness::with_faults(|store| store.failing(StoreOperation::Query));

    let result = harness.service.get_participants_by_country("GBR").await;

    assert!(matches!(result, Err(RegattaError::StoreUnavailable(_))));
}
