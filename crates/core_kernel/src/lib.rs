//! Core Kernel - Foundational types for the regatta system
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed document identifiers
//! - The document and query model used to talk to a document store
//! - Port traits for the document store and the analytics sink
//! - A fixed-precision encoding for stored timestamps

pub mod identifiers;
pub mod document;
pub mod analytics;
pub mod ports;
pub mod timestamp;

pub use identifiers::{DocumentId, RaceId, ParticipantId, WeatherId};
pub use document::{
    encode, Document, DocumentData, DocumentQuery, FieldFilter, FilterOp, OrderBy, SortDirection,
};
pub use analytics::AnalyticsEvent;
pub use ports::{
    AdapterHealth, AnalyticsSink, DocumentStore, DomainPort, HealthCheckResult, HealthCheckable,
    PortError,
};
