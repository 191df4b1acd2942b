//! Regatta Management Domain
//!
//! This crate holds the records of a sailing regatta (races, participants,
//! weather observations) and the [`RegattaService`] that persists them
//! through a [`DocumentStore`](core_kernel::DocumentStore) and reports
//! every mutation to an [`AnalyticsSink`](core_kernel::AnalyticsSink).
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_regatta::{NewRace, RegattaService};
//! use infra_store::{MemoryDocumentStore, TracingAnalyticsSink};
//!
//! let service = RegattaService::new(
//!     Arc::new(MemoryDocumentStore::new()),
//!     Arc::new(TracingAnalyticsSink::new()),
//! );
//!
//! let race_id = service.create_race(NewRace::new("2024 Worlds", date, "Hong Kong")).await?;
//! let participant_id = service.register_participant(participant).await?;
//! service.add_participant_to_race(&participant_id, &race_id).await?;
//! ```

pub mod race;
pub mod participant;
pub mod weather;
pub mod events;
pub mod error;
pub mod service;

pub use race::{NewRace, Race, RaceResult, RaceStatus, SailingConditions};
pub use participant::{NewParticipant, Participant};
pub use weather::{NewWeatherObservation, WeatherObservation};
pub use events::RegattaEvent;
pub use error::{RegattaError, RegattaResult};
pub use service::{collections, RegattaService};
