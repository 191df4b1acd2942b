//! HTTP API Layer
//!
//! This crate exposes the regatta service over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for races, participants, and weather
//! - **Middleware**: Tracing, CORS, audit logging
//! - **DTOs**: Request bodies and their validation
//! - **Error Handling**: `RegattaError` mapped onto status codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(service, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_regatta::RegattaService;

use crate::config::ApiConfig;
use crate::handlers::{health, participants, races, weather};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: RegattaService,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(service: RegattaService, config: ApiConfig) -> Self {
        Self { service, config }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let race_routes = Router::new()
        .route("/", post(races::create_race).get(races::list_races))
        .route("/upcoming", get(races::list_upcoming))
        .route("/:id", get(races::get_race))
        .route("/:id/status", put(races::update_status))
        .route("/:id/results", get(races::get_results).put(races::update_results))
        .route("/:id/participants", post(races::add_participant));

    let participant_routes = Router::new()
        .route(
            "/",
            post(participants::register_participant).get(participants::list_by_country),
        )
        .route("/:id", get(participants::get_participant));

    let weather_routes = Router::new()
        .route("/", post(weather::record_weather))
        .route("/latest", get(weather::latest_weather));

    let api_routes = Router::new()
        .nest("/races", race_routes)
        .nest("/participants", participant_routes)
        .nest("/weather", weather_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
