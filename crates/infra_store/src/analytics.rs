//! Analytics sinks
//!
//! `TracingAnalyticsSink` writes each event as a structured record on the
//! `analytics` tracing target, so events land wherever the subscriber
//! ships logs. `NoopAnalyticsSink` discards events.

use async_trait::async_trait;
use tracing::info;

use core_kernel::{AnalyticsEvent, AnalyticsSink, DomainPort, PortError};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalyticsSink;

impl TracingAnalyticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl DomainPort for TracingAnalyticsSink {}

#[async_trait]
impl AnalyticsSink for TracingAnalyticsSink {
    async fn log_event(&self, event: &AnalyticsEvent) -> Result<(), PortError> {
        let properties = serde_json::to_string(&event.properties).map_err(|e| {
            PortError::Serialization {
                message: e.to_string(),
            }
        })?;

        info!(
            target: "analytics",
            event = %event.name,
            properties = %properties,
            occurred_at = %event.occurred_at,
            "Analytics event"
        );
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalyticsSink;

impl DomainPort for NoopAnalyticsSink {}

#[async_trait]
impl AnalyticsSink for NoopAnalyticsSink {
    async fn log_event(&self, _event: &AnalyticsEvent) -> Result<(), PortError> {
        Ok(())
    }
}
