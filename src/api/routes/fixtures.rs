use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{FixtureRow, PoolId, ResultRecord, ResultSubmission};
use crate::storage::append_result;

#[derive(Debug, Deserialize)]
pub struct ListFixturesParams {
    pub pool: Option<String>,
    pub played: Option<bool>,
}

pub async fn list_fixtures(
    State(state): State<AppState>,
    Query(params): Query<ListFixturesParams>,
) -> Result<Json<Vec<FixtureRow>>, ApiError> {
    let pool = params.pool.map(PoolId::from);
    let league = state.league.read().await;
    let mut rows = league.fixture_rows(pool.as_ref())?;

    if let Some(played) = params.played {
        rows.retain(|r| r.played == played);
    }

    Ok(Json(rows))
}

pub async fn get_fixture(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<FixtureRow>, ApiError> {
    let league = state.league.read().await;
    league
        .fixture_rows(None)?
        .into_iter()
        .nth(index)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Fixture {}", index)))
}

#[derive(Debug, Deserialize)]
pub struct ResultBody {
    pub score_home: u32,
    pub score_away: u32,
    pub lineup_home: Vec<String>,
    pub lineup_away: Vec<String>,
}

pub async fn enter_result(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(body): Json<ResultBody>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = ResultSubmission {
        fixture_index: index,
        home_team_id: None,
        away_team_id: None,
        score_home: body.score_home,
        score_away: body.score_away,
        lineup_home: body.lineup_home,
        lineup_away: body.lineup_away,
    };

    // Held until the response is built so the log sees submissions in the
    // same order as the league.
    let mut league = state.league.write().await;
    let submission = league.pin_result(submission)?;

    // Persist first: a result the log does not have must not be served.
    if let Some(path) = &state.results_log {
        append_result(path, &submission).map_err(|e| {
            tracing::error!("Result for fixture {} not persisted: {}", index, e);
            ApiError::Internal(format!("Failed to store result for fixture {}", index))
        })?;
    }
    league.submit(&submission)?;

    let row = league
        .fixture_rows(None)?
        .into_iter()
        .nth(index)
        .ok_or_else(|| ApiError::Internal(format!("Fixture {} vanished", index)))?;

    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list_results(State(state): State<AppState>) -> Json<Vec<ResultRecord>> {
    let league = state.league.read().await;
    Json(league.results().to_vec())
}
