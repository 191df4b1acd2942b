//! Race handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::RaceId;
use domain_regatta::{Race, RaceResult};

use crate::dto::races::*;
use crate::dto::CreatedResponse;
use crate::{error::ApiError, AppState};

/// Creates a race
pub async fn create_race(
    State(state): State<AppState>,
    Json(request): Json<CreateRaceRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.service.create_race(request.into_new_race()?).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Lists every race
pub async fn list_races(State(state): State<AppState>) -> Result<Json<Vec<Race>>, ApiError> {
    Ok(Json(state.service.get_all_races().await?))
}

/// Lists upcoming races, earliest first
pub async fn list_upcoming(State(state): State<AppState>) -> Result<Json<Vec<Race>>, ApiError> {
    Ok(Json(state.service.get_upcoming_races().await?))
}

/// Gets a race by ID
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<RaceId>,
) -> Result<Json<Race>, ApiError> {
    state
        .service
        .get_race(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Race not found: {id}")))
}

/// Sets a race's status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<RaceId>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update_race_status(&id, request.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Gets a race's results
pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<RaceId>,
) -> Result<Json<Vec<RaceResult>>, ApiError> {
    state
        .service
        .get_race_results(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No results for race {id}")))
}

/// Replaces a race's results
pub async fn update_results(
    State(state): State<AppState>,
    Path(id): Path<RaceId>,
    Json(request): Json<UpdateResultsRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update_race_results(&id, request.results).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enters a participant in a race
pub async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<RaceId>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .add_participant_to_race(&request.participant_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
