//! Ports and Adapters Infrastructure
//!
//! The regatta domain depends on two collaborators it does not own: a
//! document store that persists records, and an analytics sink that
//! receives telemetry events. Both are expressed here as port traits so
//! the domain can be wired to a managed store, a local database, or an
//! in-memory double without change.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             RegattaService               │
//! └──────────────────────────────────────────┘
//!            │                      │
//!            ▼                      ▼
//!    ┌───────────────┐      ┌───────────────┐
//!    │ DocumentStore │      │ AnalyticsSink │
//!    └───────────────┘      └───────────────┘
//!       ▲         ▲            ▲         ▲
//!   In-memory  PostgreSQL   tracing    no-op
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};
use async_trait::async_trait;

use crate::analytics::AnalyticsEvent;
use crate::document::{Document, DocumentData, DocumentQuery};
use crate::identifiers::DocumentId;

/// Error type for port operations
///
/// Every adapter reports failures through this type so callers see the
/// same error shape regardless of which store is wired in.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// A record could not be converted to or from its stored form
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc<dyn _>` across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

/// Generic document persistence
///
/// Collections are named partitions; identifiers are assigned by the
/// store on `create`. Implementations decide their own durability,
/// timeouts, and cancellation behavior.
#[async_trait]
pub trait DocumentStore: DomainPort + HealthCheckable {
    /// Persists a new document and returns its generated identifier
    async fn create(&self, collection: &str, data: DocumentData) -> Result<DocumentId, PortError>;

    /// Reads a document, returning `None` when it does not exist
    async fn read(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>, PortError>;

    /// Returns every document in a collection, in no defined order
    async fn list(&self, collection: &str) -> Result<Vec<Document>, PortError>;

    /// Returns the documents matching a query
    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>, PortError>;

    /// Merges `fields` into an existing document
    ///
    /// Fields not present in `fields` are left untouched. Fails with
    /// `PortError::NotFound` if the document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: DocumentData,
    ) -> Result<(), PortError>;
}

/// Receiver of analytics events
#[async_trait]
pub trait AnalyticsSink: DomainPort {
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<(), PortError>;
}
