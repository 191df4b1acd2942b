//! In-memory document store
//!
//! Collections live in a map guarded by an async `RwLock`. String values
//! that are both RFC 3339 timestamps compare chronologically; other
//! strings compare lexicographically.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    AdapterHealth, Document, DocumentData, DocumentId, DocumentQuery, DocumentStore, DomainPort,
    FieldFilter, FilterOp, HealthCheckResult, HealthCheckable, PortError, SortDirection,
};

type Collection = BTreeMap<DocumentId, DocumentData>;

/// In-memory implementation of `DocumentStore`
#[derive(Debug, Default, Clone)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a document under a caller-chosen identifier
    pub async fn insert_with_id(&self, collection: &str, id: DocumentId, data: DocumentData) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id, data);
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, |docs| docs.len())
    }
}

impl DomainPort for MemoryDocumentStore {}

#[async_trait]
impl HealthCheckable for MemoryDocumentStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "memory-document-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, collection: &str, data: DocumentData) -> Result<DocumentId, PortError> {
        let id = DocumentId::generate();
        self.insert_with_id(collection, id.clone(), data).await;
        debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    async fn read(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>, PortError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|data| Document::new(id.clone(), data.clone())))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, PortError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| Document::new(id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>, PortError> {
        let mut results: Vec<Document> = self
            .list(collection)
            .await?
            .into_iter()
            .filter(|doc| query.filters.iter().all(|filter| matches_filter(&doc.data, filter)))
            .collect();

        if let Some(order) = &query.order_by {
            results.retain(|doc| doc.data.contains_key(&order.field));
            results.sort_by(|a, b| {
                let ordering = match (a.field(&order.field), b.field(&order.field)) {
                    (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                };
                match order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            results.truncate(limit);
        }

        debug!(collection, matched = results.len(), "Query executed");
        Ok(results)
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: DocumentData,
    ) -> Result<(), PortError> {
        let mut collections = self.collections.write().await;
        let data = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| PortError::not_found(collection, id))?;

        data.extend(fields);
        debug!(collection, id = %id, "Document updated");
        Ok(())
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// Orders two JSON values of the same kind; `None` for mixed kinds
pub(crate) fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => match (parse_timestamp(x), parse_timestamp(y)) {
            (Some(x), Some(y)) => Some(x.cmp(&y)),
            _ => Some(x.cmp(y)),
        },
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    a == b || compare_values(a, b) == Some(Ordering::Equal)
}

pub(crate) fn matches_filter(data: &DocumentData, filter: &FieldFilter) -> bool {
    let Some(field) = data.get(&filter.field) else {
        return false;
    };
    let value = &filter.value;

    match filter.op {
        FilterOp::Equal => values_equal(field, value),
        FilterOp::NotEqual => !values_equal(field, value),
        FilterOp::LessThan => compare_values(field, value) == Some(Ordering::Less),
        FilterOp::LessThanOrEqual => matches!(
            compare_values(field, value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        FilterOp::GreaterThan => compare_values(field, value) == Some(Ordering::Greater),
        FilterOp::GreaterThanOrEqual => matches!(
            compare_values(field, value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        FilterOp::ArrayContains => field
            .as_array()
            .is_some_and(|items| items.iter().any(|item| values_equal(item, value))),
        FilterOp::In => value
            .as_array()
            .is_some_and(|items| items.iter().any(|item| values_equal(field, item))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> DocumentData {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    async fn seeded() -> MemoryDocumentStore {
        let store = MemoryDocumentStore::new();
        store
            .insert_with_id("races", "a".into(), data(json!({"status": "upcoming", "date": "2024-09-03T00:00:00Z", "fleet": 12})))
            .await;
        store
            .insert_with_id("races", "b".into(), data(json!({"status": "upcoming", "date": "2024-09-01T00:00:00Z", "fleet": 30})))
            .await;
        store
            .insert_with_id("races", "c".into(), data(json!({"status": "completed", "date": "2024-08-01T00:00:00Z"})))
            .await;
        store
            .insert_with_id("races", "d".into(), data(json!({"status": "upcoming"})))
            .await;
        store
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let store = MemoryDocumentStore::new();
        let id = store.create("races", data(json!({"name": "Worlds"}))).await.unwrap();

        let doc = store.read("races", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("name"), Some(&json!("Worlds")));
        assert!(store.read("races", &"missing".into()).await.unwrap().is_none());
        assert!(store.read("other", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_query_orders_and_drops_documents_missing_the_field() {
        let store = seeded().await;
        let query = DocumentQuery::where_eq("status", "upcoming")
            .order_by("date", SortDirection::Ascending);

        let ids: Vec<String> = store
            .query("races", &query)
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_query_descending_with_limit() {
        let store = seeded().await;
        let query = DocumentQuery::new()
            .order_by("date", SortDirection::Descending)
            .limit(1);

        let docs = store.query("races", &query).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn test_numeric_comparison_filters() {
        let store = seeded().await;
        let query = DocumentQuery::new().filter(FieldFilter::new("fleet", FilterOp::GreaterThan, 20));

        let docs = store.query("races", &query).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id.as_str(), "b");
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = seeded().await;
        store
            .update("races", &"c".into(), data(json!({"status": "active"})))
            .await
            .unwrap();

        let doc = store.read("races", &"c".into()).await.unwrap().unwrap();
        assert_eq!(doc.field("status"), Some(&json!("active")));
        assert_eq!(doc.field("date"), Some(&json!("2024-08-01T00:00:00Z")));
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let store = seeded().await;
        let result = store
            .update("races", &"zzz".into(), data(json!({"status": "active"})))
            .await;
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(store.count("races").await, 4);
    }

    #[test]
    fn test_array_filters() {
        let doc = data(json!({"participants": ["P1", "P2"], "country": "GBR"}));
        assert!(matches_filter(&doc, &FieldFilter::new("participants", FilterOp::ArrayContains, "P2")));
        assert!(!matches_filter(&doc, &FieldFilter::new("participants", FilterOp::ArrayContains, "P3")));
        assert!(matches_filter(&doc, &FieldFilter::new("country", FilterOp::In, json!(["AUS", "GBR"]))));
        assert!(!matches_filter(&doc, &FieldFilter::new("missing", FilterOp::NotEqual, "x")));
    }

    #[test]
    fn test_timestamps_compare_chronologically() {
        let earlier = json!("2024-09-01T10:00:00+02:00");
        let later = json!("2024-09-01T09:00:00Z");
        assert_eq!(compare_values(&earlier, &later), Some(Ordering::Less));
        assert_eq!(compare_values(&json!(1), &json!(1.0)), Some(Ordering::Equal));
        assert_eq!(compare_values(&json!("a"), &json!(1)), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_stored_timestamps_order_like_instants(
            a in 0i64..4_000_000_000,
            b in 0i64..4_000_000_000,
            a_nanos in 0u32..1_000_000_000,
            b_nanos in 0u32..1_000_000_000,
        ) {
            let x = chrono::DateTime::from_timestamp(a, a_nanos).unwrap();
            let y = chrono::DateTime::from_timestamp(b, b_nanos).unwrap();

            proptest::prop_assert_eq!(
                compare_values(
                    &json!(core_kernel::timestamp::format(&x)),
                    &json!(core_kernel::timestamp::format(&y))
                ),
                Some(x.cmp(&y))
            );
        }
    }
}
