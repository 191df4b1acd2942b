//! Test Utilities Crate
//!
//! Shared test infrastructure for the regatta test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built records matching the regatta worked example
//! - `builders`: Builder patterns for test data construction
//! - `doubles`: Recording analytics sink and fault-injecting document store
//! - `harness`: A `RegattaService` wired to in-memory collaborators
//! - `database`: PostgreSQL test containers
//! - `assertions`: Assertion helpers for regatta records
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod doubles;
pub mod harness;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use doubles::*;
pub use harness::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
