//! PostgreSQL document store
//!
//! Every collection shares one `documents` table keyed by
//! `(collection, id)` with the body in a JSONB column. Filters and ordering
//! use `data -> field` so JSONB comparison rules apply: numbers compare
//! numerically, strings lexicographically. Timestamps are stored as RFC 3339
//! UTC strings, which sort chronologically as long as they share a
//! precision.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::time::Instant;
use tracing::{debug, info};

use core_kernel::{
    AdapterHealth, Document, DocumentData, DocumentId, DocumentQuery, DocumentStore, DomainPort,
    FilterOp, HealthCheckResult, HealthCheckable, PortError, SortDirection,
};

use crate::error::StoreError;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT        NOT NULL,
    id          TEXT        NOT NULL,
    data        JSONB       NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (collection, id)
)
"#;

const CREATE_DATA_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_data_idx ON documents USING GIN (data)";

/// Document store backed by a PostgreSQL JSONB table
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Converts a failed statement into a port error
    ///
    /// Waiting out the pool's acquire timeout becomes `PortError::Timeout`
    /// carrying the configured limit.
    fn port_error(&self, operation: &str, error: sqlx::Error) -> PortError {
        match error {
            sqlx::Error::PoolTimedOut => PortError::Timeout {
                operation: operation.to_string(),
                duration_ms: u64::try_from(self.pool.options().get_acquire_timeout().as_millis())
                    .unwrap_or(u64::MAX),
            },
            other => StoreError::from(other).into(),
        }
    }

    /// Creates the `documents` table and its index if missing
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in [CREATE_TABLE, CREATE_DATA_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::SchemaFailed(e.to_string()))?;
        }
        info!("Document schema ready");
        Ok(())
    }
}

/// A positional parameter for a built statement
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Bind {
    Text(String),
    Json(Value),
    Int(i64),
}

/// Builds the SELECT for a query; `$1` is always the collection name
pub(crate) fn build_select(collection: &str, query: &DocumentQuery) -> (String, Vec<Bind>) {
    let mut sql = String::from("SELECT id, data FROM documents WHERE collection = $1");
    let mut binds = vec![Bind::Text(collection.to_string())];

    for filter in &query.filters {
        binds.push(Bind::Text(filter.field.clone()));
        let field = binds.len();
        binds.push(Bind::Json(filter.value.clone()));
        let value = binds.len();

        let clause = match filter.op {
            FilterOp::Equal => format!("(data -> ${field}::text) = ${value}::jsonb"),
            FilterOp::NotEqual => format!("(data -> ${field}::text) <> ${value}::jsonb"),
            FilterOp::LessThan => format!("(data -> ${field}::text) < ${value}::jsonb"),
            FilterOp::LessThanOrEqual => format!("(data -> ${field}::text) <= ${value}::jsonb"),
            FilterOp::GreaterThan => format!("(data -> ${field}::text) > ${value}::jsonb"),
            FilterOp::GreaterThanOrEqual => format!("(data -> ${field}::text) >= ${value}::jsonb"),
            FilterOp::ArrayContains => {
                format!("(data -> ${field}::text) @> jsonb_build_array(${value}::jsonb)")
            }
            FilterOp::In => {
                format!("${value}::jsonb @> jsonb_build_array(data -> ${field}::text)")
            }
        };
        sql.push_str(" AND ");
        sql.push_str(&clause);
    }

    if let Some(order) = &query.order_by {
        binds.push(Bind::Text(order.field.clone()));
        let field = binds.len();
        let direction = match order.direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        sql.push_str(&format!(
            " AND (data -> ${field}::text) IS NOT NULL ORDER BY (data -> ${field}::text) {direction}"
        ));
    }

    if let Some(limit) = query.limit {
        binds.push(Bind::Int(i64::try_from(limit).unwrap_or(i64::MAX)));
        sql.push_str(&format!(" LIMIT ${}", binds.len()));
    }

    (sql, binds)
}

fn row_to_document(row: &PgRow) -> Result<Document, StoreError> {
    let id: String = row.try_get("id")?;
    let data: Value = row.try_get("data")?;
    match data {
        Value::Object(map) => Ok(Document::new(DocumentId::new(id), map)),
        _ => Err(StoreError::SerializationError(format!(
            "document {id} body is not an object"
        ))),
    }
}

fn rows_to_documents(rows: &[PgRow]) -> Result<Vec<Document>, PortError> {
    rows.iter()
        .map(|row| row_to_document(row).map_err(PortError::from))
        .collect()
}

impl DomainPort for PostgresDocumentStore {}

#[async_trait]
impl HealthCheckable for PostgresDocumentStore {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = sqlx::query("SELECT 1").execute(&self.pool).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        let (status, message) = match outcome {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(e.to_string())),
        };

        HealthCheckResult {
            adapter_id: "postgres-document-store".to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn create(&self, collection: &str, data: DocumentData) -> Result<DocumentId, PortError> {
        let id = DocumentId::generate();
        sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id.as_str())
            .bind(Value::Object(data))
            .execute(&self.pool)
            .await
            .map_err(|e| self.port_error("create", e))?;

        debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    async fn read(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>, PortError> {
        let row = sqlx::query("SELECT id, data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.port_error("read", e))?;

        Ok(row.as_ref().map(row_to_document).transpose()?)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, PortError> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.port_error("list", e))?;

        rows_to_documents(&rows)
    }

    async fn query(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Document>, PortError> {
        let (sql, binds) = build_select(collection, query);
        let mut statement = sqlx::query(&sql);
        for bind in binds {
            statement = match bind {
                Bind::Text(text) => statement.bind(text),
                Bind::Json(value) => statement.bind(value),
                Bind::Int(number) => statement.bind(number),
            };
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.port_error("query", e))?;

        debug!(collection, matched = rows.len(), "Query executed");
        rows_to_documents(&rows)
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: DocumentData,
    ) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE documents SET data = data || $3, updated_at = now() \
             WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id.as_str())
        .bind(Value::Object(fields))
        .execute(&self.pool)
        .await
        .map_err(|e| self.port_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found(collection, id));
        }

        debug!(collection, id = %id, "Document updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::FieldFilter;
    use serde_json::json;

    #[test]
    fn test_plain_select() {
        let (sql, binds) = build_select("races", &DocumentQuery::new());
        assert_eq!(sql, "SELECT id, data FROM documents WHERE collection = $1");
        assert_eq!(binds, vec![Bind::Text("races".to_string())]);
    }

    #[test]
    fn test_latest_observation_query() {
        let query = DocumentQuery::where_eq("location", "Hong Kong")
            .order_by("timestamp", SortDirection::Descending)
            .limit(1);
        let (sql, binds) = build_select("weather", &query);

        assert_eq!(
            sql,
            "SELECT id, data FROM documents WHERE collection = $1 \
             AND (data -> $2::text) = $3::jsonb \
             AND (data -> $4::text) IS NOT NULL ORDER BY (data -> $4::text) DESC \
             LIMIT $5"
        );
        assert_eq!(
            binds,
            vec![
                Bind::Text("weather".to_string()),
                Bind::Text("location".to_string()),
                Bind::Json(json!("Hong Kong")),
                Bind::Text("timestamp".to_string()),
                Bind::Int(1),
            ]
        );
    }

    #[test]
    fn test_membership_operators() {
        let query = DocumentQuery::new()
            .filter(FieldFilter::new("participants", FilterOp::ArrayContains, "P1"))
            .filter(FieldFilter::new("country", FilterOp::In, json!(["GBR", "AUS"])));
        let (sql, binds) = build_select("races", &query);

        assert!(sql.contains("(data -> $2::text) @> jsonb_build_array($3::jsonb)"));
        assert!(sql.contains("$5::jsonb @> jsonb_build_array(data -> $4::text)"));
        assert_eq!(binds.len(), 5);
    }

    #[tokio::test]
    async fn test_acquire_timeout_maps_to_port_timeout() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(250))
            .connect_lazy("postgres://regatta@localhost/regatta")
            .unwrap();
        let store = PostgresDocumentStore::new(pool);

        let error = store.port_error("read", sqlx::Error::PoolTimedOut);

        match error {
            PortError::Timeout { operation, duration_ms } => {
                assert_eq!(operation, "read");
                assert_eq!(duration_ms, 250);
            }
            other => panic!("Expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_sqlx_errors_keep_store_mapping() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://regatta@localhost/regatta")
            .unwrap();
        let store = PostgresDocumentStore::new(pool);

        assert!(store.port_error("read", sqlx::Error::RowNotFound).is_not_found());
        assert!(matches!(
            store.port_error("update", sqlx::Error::PoolClosed),
            PortError::ServiceUnavailable { .. }
        ));
    }
}
