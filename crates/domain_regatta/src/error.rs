//! Regatta domain errors
//!
//! Callers get one of three actionable kinds: the entity does not exist,
//! the store could not complete the operation, or a record did not have
//! the expected shape.

use core_kernel::PortError;
use thiserror::Error;

pub type RegattaResult<T> = Result<T, RegattaError>;

/// Errors that can occur in the regatta domain
#[derive(Debug, Error)]
pub enum RegattaError {
    /// An entity required by the operation does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The document store failed to complete the operation
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] PortError),

    /// A record or request did not have the expected shape
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl RegattaError {
    /// Creates a NotFound error from any ID type
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        RegattaError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        RegattaError::ValidationFailed(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegattaError::NotFound { .. })
    }
}

impl From<PortError> for RegattaError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { entity_type, id } => RegattaError::NotFound {
                entity: entity_type,
                id,
            },
            PortError::Validation { message, field: Some(field) } => {
                RegattaError::ValidationFailed(format!("{field}: {message}"))
            }
            PortError::Validation { message, field: None } => {
                RegattaError::ValidationFailed(message)
            }
            PortError::Serialization { message } => RegattaError::ValidationFailed(message),
            other => RegattaError::StoreUnavailable(other),
        }
    }
}
