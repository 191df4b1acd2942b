//! Weather handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use domain_regatta::WeatherObservation;

use crate::dto::weather::*;
use crate::dto::CreatedResponse;
use crate::{error::ApiError, AppState};

/// Records an observation
pub async fn record_weather(
    State(state): State<AppState>,
    Json(request): Json<RecordWeatherRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .service
        .record_weather_data(request.into_observation()?)
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Latest observation at a location
pub async fn latest_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<WeatherObservation>, ApiError> {
    state
        .service
        .get_latest_weather(&query.location)
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No weather recorded at {}", query.location))
        })
}
