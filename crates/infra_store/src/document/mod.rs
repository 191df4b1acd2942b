//! Document store adapters
//!
//! Both adapters share the same query semantics: filters are ANDed, a
//! document lacking a filtered or ordered field never matches, and numbers
//! compare numerically.

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
