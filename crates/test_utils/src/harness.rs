//! Service Test Harness
//!
//! Wires a `RegattaService` to an in-memory store and a recording
//! analytics sink, keeping handles to both for inspection.

use std::sync::Arc;

use core_kernel::{AnalyticsSink, DocumentStore};
use domain_regatta::RegattaService;
use infra_store::MemoryDocumentStore;

use crate::doubles::{FaultyDocumentStore, RecordingAnalyticsSink};

pub struct TestHarness {
    pub service: RegattaService,
    /// The backing collections, shared with the service
    pub store: MemoryDocumentStore,
    pub analytics: Arc<RecordingAnalyticsSink>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let store = MemoryDocumentStore::new();
        Self::assemble(store.clone(), Arc::new(store))
    }

    /// Routes store calls through a `FaultyDocumentStore`
    ///
    /// `configure` receives a store over the harness collections and
    /// returns it with faults added.
    pub fn with_faults(configure: impl FnOnce(FaultyDocumentStore) -> FaultyDocumentStore) -> Self {
        let store = MemoryDocumentStore::new();
        let faulty = configure(FaultyDocumentStore::new(store.clone()));
        Self::assemble(store, Arc::new(faulty))
    }

    /// Uses a caller-supplied analytics sink; `analytics` then stays empty
    pub fn with_analytics(sink: Arc<dyn AnalyticsSink>) -> Self {
        let store = MemoryDocumentStore::new();
        Self {
            service: RegattaService::new(Arc::new(store.clone()), sink),
            store,
            analytics: Arc::new(RecordingAnalyticsSink::new()),
        }
    }

    fn assemble(store: MemoryDocumentStore, backend: Arc<dyn DocumentStore>) -> Self {
        let analytics = Arc::new(RecordingAnalyticsSink::new());
        Self {
            service: RegattaService::new(backend, analytics.clone()),
            store,
            analytics,
        }
    }
}
