//! Stored timestamp encoding
//!
//! Timestamps are written as UTC RFC 3339 with exactly nine fractional
//! digits. A fixed width keeps string order equal to chronological order,
//! which stores that compare JSON strings rely on.
//!
//! Use on `DateTime<Utc>` fields with `#[serde(with = "core_kernel::timestamp")]`.
//! Reading accepts any RFC 3339 precision or offset.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats a timestamp the way it is stored
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(timestamp))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(deserializer)
}
