//! Participant handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::ParticipantId;
use domain_regatta::Participant;

use crate::dto::participants::*;
use crate::dto::CreatedResponse;
use crate::{error::ApiError, AppState};

/// Registers a participant
pub async fn register_participant(
    State(state): State<AppState>,
    Json(request): Json<RegisterParticipantRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .service
        .register_participant(request.into_new_participant()?)
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Lists participants sailing for a country
pub async fn list_by_country(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    Ok(Json(
        state
            .service
            .get_participants_by_country(&query.country)
            .await?,
    ))
}

/// Gets a participant by ID
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<ParticipantId>,
) -> Result<Json<Participant>, ApiError> {
    state
        .service
        .get_participant(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Participant not found: {id}")))
}
