//! Test Doubles
//!
//! - `RecordingAnalyticsSink` keeps every event it receives
//! - `FailingAnalyticsSink` rejects every event
//! - `FaultyDocumentStore` wraps a `MemoryDocumentStore` and fails chosen
//!   operations, optionally only for one collection

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, AnalyticsEvent, AnalyticsSink, Document, DocumentData, DocumentId,
    DocumentQuery, DocumentStore, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use infra_store::MemoryDocumentStore;

/// Analytics sink that records events for later inspection
#[derive(Debug, Default)]
pub struct RecordingAnalyticsSink {
    events: Arc<RwLock<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.read().await.clone()
    }

    pub async fn event_names(&self) -> Vec<String> {
        self.events
            .read()
            .await
            .iter()
            .map(|event| event.name.clone())
            .collect()
    }

    /// The most recent event with the given name
    pub async fn last(&self, name: &str) -> Option<AnalyticsEvent> {
        self.events
            .read()
            .await
            .iter()
            .rev()
            .find(|event| event.name == name)
            .cloned()
    }
}

impl DomainPort for RecordingAnalyticsSink {}

#[async_trait]
impl AnalyticsSink for RecordingAnalyticsSink {
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<(), PortError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

/// Analytics sink that is always down
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingAnalyticsSink;

impl DomainPort for FailingAnalyticsSink {}

#[async_trait]
impl AnalyticsSink for FailingAnalyticsSink {
    async fn log_event(&self, _event: &AnalyticsEvent) -> Result<(), PortError> {
        Err(PortError::ServiceUnavailable {
            service: "analytics".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Create,
    Read,
    List,
    Query,
    Update,
}

#[derive(Debug, Clone)]
struct Fault {
    operation: StoreOperation,
    collection: Option<String>,
}

/// Document store that fails selected operations
///
/// Operations without a matching fault go to the wrapped store.
#[derive(Debug, Clone)]
pub struct FaultyDocumentStore {
    inner: MemoryDocumentStore,
    faults: Vec<Fault>,
}

impl FaultyDocumentStore {
    pub fn new(inner: MemoryDocumentStore) -> Self {
        Self {
            inner,
            faults: Vec::new(),
        }
    }

    /// Fails `operation` on every collection
    pub fn failing(mut self, operation: StoreOperation) -> Self {
        self.faults.push(Fault {
            operation,
            collection: None,
        });
        self
    }

    /// Fails `operation` on one collection only
    pub fn failing_on(mut self, operation: StoreOperation, collection: &str) -> Self {
        self.faults.push(Fault {
            operation,
            collection: Some(collection.to_string()),
        });
        self
    }

    pub fn inner(&self) -> &MemoryDocumentStore {
        &self.inner
    }

    fn check(&self, operation: StoreOperation, collection: &str) -> Result<(), PortError> {
        let faulted = self.faults.iter().any(|fault| {
            fault.operation == operation
                && fault.collection.as_deref().map_or(true, |c| c == collection)
        });
        if faulted {
            Err(PortError::ServiceUnavailable {
                service: format!("document store ({operation:?} on {collection})"),
            })
        } else {
            Ok(())
        }
    }
}

impl DomainPort for FaultyDocumentStore {}

#[async_trait]
impl HealthCheckable for FaultyDocumentStore {
    async fn health_check(&self) -> HealthCheckResult {
        let status = if self.faults.is_empty() {
            AdapterHealth::Healthy
        } else {
            AdapterHealth::Degraded
        };
        HealthCheckResult {
            adapter_id: "faulty-document-store".to_string(),
            status,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DocumentStore for FaultyDocumentStore {
    async fn create(&self, collection: &str, data: DocumentData) -> Result<DocumentId, PortError> {
        self.check(StoreOperation::Create, collection)?;
        self.inner.create(collection, data).await
    }

    async fn read(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>, PortError> {
        self.check(StoreOperation::Read, collection)?;
        self.inner.read(collection, id).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, PortError> {
        self.check(StoreOperation::List, collection)?;
        self.inner.list(collection).await
    }

    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>, PortError> {
        self.check(StoreOperation::Query, collection)?;
        self.inner.query(collection, query).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: DocumentData,
    ) -> Result<(), PortError> {
        self.check(StoreOperation::Update, collection)?;
        self.inner.update(collection, id, fields).await
    }
}
