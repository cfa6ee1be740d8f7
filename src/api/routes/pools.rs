use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{PoolId, StandingsRow, TrackerRow};

#[derive(Debug, Serialize)]
pub struct PoolSummary {
    pub pool: PoolId,
    pub teams: usize,
    pub rounds: usize,
    pub fixtures: usize,
    pub remaining: usize,
}

pub async fn list_pools(State(state): State<AppState>) -> Result<Json<Vec<PoolSummary>>, ApiError> {
    let league = state.league.read().await;

    let pools = league
        .pools()
        .iter()
        .map(|p| {
            Ok(PoolSummary {
                pool: p.id.clone(),
                teams: p.team_ids.len(),
                rounds: p.round_count(),
                fixtures: p.fixture_count(),
                remaining: league.remaining_fixtures(&p.id)?,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Json(pools))
}

pub async fn standings(
    State(state): State<AppState>,
    Path(pool): Path<String>,
) -> Result<Json<Vec<StandingsRow>>, ApiError> {
    let league = state.league.read().await;
    Ok(Json(league.standings(&PoolId::from(pool))?))
}

pub async fn players(
    State(state): State<AppState>,
    Path(pool): Path<String>,
) -> Result<Json<Vec<TrackerRow>>, ApiError> {
    let league = state.league.read().await;
    Ok(Json(league.player_tracker(&PoolId::from(pool))?))
}
