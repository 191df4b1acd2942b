//! Document and query model
//!
//! Records are stored as JSON objects addressed by collection name and
//! identifier. The identifier is never stored in the body: it is merged in
//! as `id` when a document is decoded into a record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::DocumentId;
use crate::ports::PortError;

/// Body of a stored document
pub type DocumentData = serde_json::Map<String, Value>;

/// A document read back from a store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub data: DocumentData,
}

impl Document {
    pub fn new(id: DocumentId, data: DocumentData) -> Self {
        Self { id, data }
    }

    /// Returns the value of a top-level field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Decodes the document into a record type, exposing the identifier as `id`
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PortError> {
        let mut data = self.data.clone();
        data.insert("id".to_string(), Value::String(self.id.to_string()));
        serde_json::from_value(Value::Object(data)).map_err(|e| PortError::Serialization {
            message: format!("document {}: {}", self.id, e),
        })
    }
}

/// Serializes a record into a document body
///
/// Records must serialize to a JSON object.
pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<DocumentData, PortError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PortError::Serialization {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(PortError::Serialization {
            message: e.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Comparison operator for a field filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Field is an array containing the value
    ArrayContains,
    /// Value is an array containing the field
    In,
}

/// A `{field, operator, value}` predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOp::Equal, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

/// Query parameters for a collection
///
/// Filters are combined with AND. Documents lacking a filtered or ordered
/// field never match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub filters: Vec<FieldFilter>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl DocumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query with a single equality filter
    pub fn where_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().filter(FieldFilter::eq(field, value))
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Boat {
        id: Option<String>,
        name: String,
    }

    #[test]
    fn test_decode_merges_identifier() {
        let mut data = DocumentData::new();
        data.insert("name".to_string(), json!("Jerboa"));
        let doc = Document::new(DocumentId::new("B1"), data);

        let boat: Boat = doc.decode().unwrap();
        assert_eq!(boat.id.as_deref(), Some("B1"));
        assert_eq!(boat.name, "Jerboa");
    }

    #[test]
    fn test_decode_shape_mismatch_is_serialization_error() {
        let mut data = DocumentData::new();
        data.insert("name".to_string(), json!(42));
        let doc = Document::new(DocumentId::new("B1"), data);

        let result: Result<Boat, _> = doc.decode();
        assert!(matches!(result, Err(PortError::Serialization { .. })));
    }

    #[test]
    fn test_encode_rejects_non_objects() {
        assert!(encode(&vec![1, 2, 3]).is_err());
        assert!(encode("plain").is_err());
        let data = encode(&json!({ "status": "active" })).unwrap();
        assert_eq!(data.get("status"), Some(&json!("active")));
    }

    #[test]
    fn test_query_builder() {
        let query = DocumentQuery::where_eq("location", "Hong Kong")
            .order_by("timestamp", SortDirection::Descending)
            .limit(1);

        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].op, FilterOp::Equal);
        assert_eq!(query.order_by.as_ref().unwrap().direction, SortDirection::Descending);
        assert_eq!(query.limit, Some(1));
    }
}
