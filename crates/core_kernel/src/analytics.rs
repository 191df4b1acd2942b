//! Analytics events
//!
//! A named telemetry record with a property map, handed to an
//! [`AnalyticsSink`](crate::ports::AnalyticsSink).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: BTreeMap<String, Value>,
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Adds a property to the event
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_properties() {
        let event = AnalyticsEvent::new("race_created")
            .with_property("name", "2024 Worlds")
            .with_property("resultCount", 3);

        assert_eq!(event.name, "race_created");
        assert_eq!(event.property("name"), Some(&json!("2024 Worlds")));
        assert_eq!(event.property("resultCount"), Some(&json!(3)));
        assert!(event.property("missing").is_none());
    }
}
