//! Regatta service
//!
//! `RegattaService` shapes calls to the injected document store and
//! analytics sink. It holds no state of its own: every read goes to the
//! store, and every successful mutation is followed by one analytics
//! event.
//!
//! Failures are logged on the operation's span and returned unchanged.
//! A single-entity lookup that finds nothing returns `Ok(None)`; an `Err`
//! always means the lookup itself failed.

mod races;
mod participants;
mod linking;
mod weather;

use std::sync::Arc;

use tracing::warn;

use core_kernel::{AnalyticsSink, DocumentStore};

use crate::events::RegattaEvent;

/// Collection names used as storage namespaces
pub mod collections {
    pub const RACES: &str = "races";
    pub const PARTICIPANTS: &str = "participants";
    pub const WEATHER: &str = "weather";
}

/// Data-access service for races, participants, and weather
#[derive(Clone)]
pub struct RegattaService {
    store: Arc<dyn DocumentStore>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl RegattaService {
    /// Creates a service over the given collaborators
    pub fn new(store: Arc<dyn DocumentStore>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self { store, analytics }
    }

    /// The underlying document store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Forwards an event to the analytics sink
    ///
    /// Analytics failures never fail the calling operation.
    async fn emit(&self, event: RegattaEvent) {
        let analytics_event = event.to_analytics();
        if let Err(error) = self.analytics.log_event(&analytics_event).await {
            warn!(
                event = %analytics_event.name,
                error = %error,
                "Failed to log analytics event"
            );
        }
    }
}

impl std::fmt::Debug for RegattaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegattaService").finish_non_exhaustive()
    }
}
