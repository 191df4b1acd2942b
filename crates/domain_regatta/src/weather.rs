//! Weather observations
//!
//! Observations are append-only; the latest one for a location is the one
//! with the greatest `timestamp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::WeatherId;

/// Fields supplied when recording an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeatherObservation {
    #[serde(with = "core_kernel::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub location: String,
    /// Knots
    pub wind_speed: f64,
    /// Degrees true
    pub wind_direction: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Hectopascals
    pub pressure: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    pub conditions: String,
}

impl NewWeatherObservation {
    pub fn into_observation(self, id: WeatherId) -> WeatherObservation {
        WeatherObservation {
            id,
            timestamp: self.timestamp,
            location: self.location,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            temperature: self.temperature,
            pressure: self.pressure,
            humidity: self.humidity,
            conditions: self.conditions,
        }
    }
}

/// A stored observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub id: WeatherId,
    #[serde(with = "core_kernel::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub conditions: String,
}
