//! Strongly-typed identifiers for stored documents
//!
//! Identifiers are assigned by the document store and are opaque strings.
//! Newtype wrappers keep a race id from being passed where a participant
//! id is expected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

macro_rules! define_typed_id {
    ($name:ident) => {
        define_id!($name);

        impl From<DocumentId> for $name {
            fn from(id: DocumentId) -> Self {
                Self(id.0)
            }
        }

        impl From<$name> for DocumentId {
            fn from(id: $name) -> DocumentId {
                DocumentId(id.0)
            }
        }

        impl From<&$name> for DocumentId {
            fn from(id: &$name) -> DocumentId {
                DocumentId(id.0.clone())
            }
        }
    };
}

define_id!(DocumentId);

impl DocumentId {
    /// Generates a fresh store-assigned identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

define_typed_id!(RaceId);
define_typed_id!(ParticipantId);
define_typed_id!(WeatherId);
