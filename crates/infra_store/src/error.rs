//! Store error types
//!
//! Errors raised by the PostgreSQL adapter, mapped from SQLx errors and
//! converted into `PortError` at the port boundary.

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Stored data could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Schema creation failed
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl StoreError {
    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            StoreError::ConnectionFailed(_) | StoreError::PoolExhausted
        )
    }
}

/// Maps SQLx errors to the closest StoreError variant
impl From<&sqlx::Error> for StoreError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => StoreError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => StoreError::PoolExhausted,
            sqlx::Error::Io(e) => StoreError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::ConnectionFailed(e.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StoreError::SerializationError(error.to_string())
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => StoreError::DuplicateEntry(db_err.message().to_string()),
                    _ => StoreError::QueryFailed(db_err.message().to_string()),
                }
            }
            _ => StoreError::QueryFailed(error.to_string()),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        StoreError::from(&error)
    }
}

impl From<StoreError> for PortError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::ConnectionFailed(message) => PortError::connection(message),
            StoreError::PoolExhausted => PortError::ServiceUnavailable {
                service: "postgres".to_string(),
            },
            StoreError::NotFound(message) => PortError::not_found("document", message),
            StoreError::DuplicateEntry(message) => PortError::Conflict { message },
            StoreError::SerializationError(message) => PortError::Serialization { message },
            other @ (StoreError::QueryFailed(_) | StoreError::SchemaFailed(_)) => {
                PortError::Internal {
                    message: other.to_string(),
                    source: Some(Box::new(other)),
                }
            }
        }
    }
}
