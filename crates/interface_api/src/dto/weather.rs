//! Weather DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use domain_regatta::NewWeatherObservation;

use super::require_non_blank;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWeatherRequest {
    /// Defaults to the time of the request
    pub timestamp: Option<DateTime<Utc>>,
    pub location: String,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub conditions: String,
}

impl RecordWeatherRequest {
    pub fn into_observation(self) -> Result<NewWeatherObservation, ApiError> {
        require_non_blank("location", &self.location)?;
        if !(0.0..=360.0).contains(&self.wind_direction) {
            return Err(ApiError::Validation(format!(
                "windDirection {} is outside 0-360 degrees",
                self.wind_direction
            )));
        }

        Ok(NewWeatherObservation {
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            location: self.location,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            temperature: self.temperature,
            pressure: self.pressure,
            humidity: self.humidity,
            conditions: self.conditions,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: String,
}
