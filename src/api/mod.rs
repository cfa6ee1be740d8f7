//! REST API endpoints.
//!
//! Axum-based HTTP API over a single shared league session: fixtures,
//! result entry, standings, player rotation and the export view.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::league::LeagueError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        let message = err.to_string();
        match err {
            LeagueError::InvalidFixtureIndex { .. } | LeagueError::UnknownPool(_) => {
                ApiError::NotFound(message)
            }
            LeagueError::AlreadyPlayed(_) | LeagueError::FixtureMismatch { .. } => {
                ApiError::Conflict(message)
            }
            LeagueError::InvalidLineup { .. } | LeagueError::ScoreOutOfRange { .. } => {
                ApiError::Unprocessable(message)
            }
            LeagueError::DuplicateTeamId(_)
            | LeagueError::InvalidConfig(_)
            | LeagueError::Team(_) => ApiError::BadRequest(message),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the API router over a shared league.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/teams", get(routes::teams::list_teams))
        .route("/api/pools", get(routes::pools::list_pools))
        .route("/api/pools/:pool/standings", get(routes::pools::standings))
        .route("/api/pools/:pool/players", get(routes::pools::players))
        .route("/api/fixtures", get(routes::fixtures::list_fixtures))
        .route("/api/fixtures/:index", get(routes::fixtures::get_fixture))
        .route(
            "/api/fixtures/:index/result",
            post(routes::fixtures::enter_result),
        )
        .route("/api/results", get(routes::fixtures::list_results))
        .route("/api/export", get(routes::teams::export))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
