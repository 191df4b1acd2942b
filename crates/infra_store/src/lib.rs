//! Store Infrastructure Layer
//!
//! Adapters for the ports defined in `core_kernel`:
//!
//! - [`MemoryDocumentStore`]: in-process collections, used for local runs and tests
//! - [`PostgresDocumentStore`]: one JSONB table on PostgreSQL via SQLx
//! - [`TracingAnalyticsSink`] / [`NoopAnalyticsSink`]: analytics event sinks
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{create_pool, PoolConfig, PostgresDocumentStore};
//!
//! let pool = create_pool(&PoolConfig::new("postgres://localhost/regatta")).await?;
//! let store = PostgresDocumentStore::new(pool);
//! store.ensure_schema().await?;
//! ```

pub mod pool;
pub mod error;
pub mod document;
pub mod analytics;

pub use pool::{create_pool, DatabasePool, PoolConfig};
pub use error::StoreError;
pub use document::{MemoryDocumentStore, PostgresDocumentStore};
pub use analytics::{NoopAnalyticsSink, TracingAnalyticsSink};
